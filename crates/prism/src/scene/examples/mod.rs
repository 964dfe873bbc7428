mod debug;
mod ring;

pub use debug::DebugScene;
pub use ring::{ring_sphere, RingScene, RING_COUNT};

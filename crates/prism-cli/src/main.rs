mod cli;
mod output;
mod progress;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::{AvailableOutput, AvailableScene, Dimensions, Keys, Pair, Triple};

#[derive(Parser, Debug)]
#[command(name = "prism", about = "Renders reflective and refractive spheres by ray tracing")]
pub struct Args {
    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(long, default_value_t = 0.0)]
    /// Time of the first frame, in seconds. Only moves the orbiting light
    time: f32,

    #[arg(long, default_value_t = 1)]
    /// Number of frames to render
    frames: u32,

    #[arg(long, default_value_t = 30.0)]
    /// Frames per second, used to advance the time between frames
    fps: f32,

    #[arg(long, default_value = "-1.5,0,-2", allow_hyphen_values = true)]
    /// Camera position in format `x`,`y`,`z`
    position: Triple,

    #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
    /// Camera yaw in degrees, 90 looks toward +z
    yaw: f32,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    /// Camera pitch in degrees, clamped to [-89, 89]
    pitch: f32,

    #[arg(long, default_value = "")]
    /// Scripted keyboard input, one key per frame: `w` `a` `s` `d` to move, `e` up, `q` down, `.` idle
    keys: Keys,

    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    /// Mouse delta applied before each frame, in format `dx`,`dy`
    turn: Pair,

    #[arg(long, default_value_t = 6)]
    /// Maximum number of surfaces hit along a path
    max_depth: u32,

    #[arg(long, default_value_t = 32)]
    tile_size: u32,

    #[arg(long)]
    /// Render tiles in a random order
    shuffle_tiles: bool,

    #[arg(long)]
    /// Render on a single thread
    no_threads: bool,

    #[arg(short, long, value_enum)]
    output: Vec<AvailableOutput>,

    #[arg(long, default_value = "output")]
    /// Directory where images are written
    output_dir: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}

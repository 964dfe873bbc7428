use crate::{ray::Ray, renderer::RayResult, scene::Scene};

mod shading;
mod whitted;

pub use shading::{reflection_sample, shade, sky_color, AMBIENT};
pub use whitted::{PathState, Primary, Step, WhittedIntegrator};

pub trait Integrator: Send + Sync {
    fn ray_cast(&self, scene: &Scene, ray: Ray) -> RayResult;
}

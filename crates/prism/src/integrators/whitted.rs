use glam::Vec3;

use crate::{
    material::{beer_lambert, fresnel, Fresnel},
    math::vec::{RefrReflVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    ray::Ray,
    renderer::RayResult,
    scene::Scene,
    SURFACE_EPSILON,
};

use super::{reflection_sample, shade, sky_color, Integrator};

/// Direct lighting at every hit, followed along a single path of mirror reflections and
/// refractions. Dielectric surfaces also get a one bounce reflection sample weighted by Fresnel.
pub struct WhittedIntegrator {
    /// Maximum number of surfaces hit along a path
    pub max_depth: u32,
}

impl Default for WhittedIntegrator {
    fn default() -> Self {
        Self { max_depth: 6 }
    }
}

/// Information on the first surface seen from the camera
#[derive(Debug, Clone, Copy)]
pub struct Primary {
    pub normal: Vec3,
    pub albedo: Vec3,
    pub z: f32,
}

/// Everything carried from one bounce to the next.
///
/// `attenuation` starts at one and only ever decreases.
#[derive(Debug, Clone, Copy)]
pub struct PathState {
    pub ray: Ray,
    pub color: Vec3,
    pub attenuation: Vec3,
    pub bounces: u32,
    pub primary: Option<Primary>,
}

impl PathState {
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            color: Vec3::ZERO,
            attenuation: Vec3::ONE,
            bounces: 0,
            primary: None,
        }
    }
}

pub enum Step {
    Continue(PathState),
    Done(PathState),
}

impl WhittedIntegrator {
    /// Intersects, shades and redirects the path once
    pub fn step(&self, scene: &Scene, mut state: PathState) -> Step {
        if state.bounces >= self.max_depth {
            return Step::Done(state);
        }

        let ray = state.ray;
        let Some(hit) = scene.first_hit(ray) else {
            state.color += state.attenuation * sky_color(ray.direction);
            return Step::Done(state);
        };

        state.bounces += 1;
        let material = scene.material(hit.surface);
        let position = ray.at(hit.t);
        let albedo = material.color.vec();
        state.primary.get_or_insert(Primary {
            normal: hit.normal,
            albedo,
            z: hit.t,
        });

        state.color += state.attenuation * shade(scene, position, hit.normal, albedo);

        let reflected = ray.direction.reflect(hit.normal);
        let reflected_ray = Ray::new_offset(position, reflected, SURFACE_EPSILON);

        if material.is_transparent() {
            let Fresnel {
                reflectance: kr,
                total_internal,
            } = fresnel(ray.direction, hit.normal, 1.0, material.ior);

            if !total_internal && kr > 0.0 {
                let sample = reflection_sample(scene, reflected_ray);
                state.color += state.attenuation * sample * kr * material.reflectivity;
            }

            let refracted = if total_internal {
                None
            } else {
                ray.direction.refract(hit.normal, material.ior)
            };

            match refracted {
                Some(refracted) => {
                    state.attenuation *= beer_lambert(material.absorption, hit.t);
                    state.attenuation *= (1.0 - kr) * material.transparency;
                    state.ray = Ray::new_offset(position, refracted, SURFACE_EPSILON);
                }
                None => {
                    state.attenuation *= material.reflectivity;
                    state.ray = reflected_ray;
                }
            }
            Step::Continue(state)
        } else if material.is_reflective() {
            state.attenuation *= material.reflectivity;
            state.ray = reflected_ray;
            Step::Continue(state)
        } else {
            Step::Done(state)
        }
    }

    pub fn trace(&self, scene: &Scene, ray: Ray) -> PathState {
        let mut state = PathState::new(ray);
        loop {
            match self.step(scene, state) {
                Step::Continue(next) => state = next,
                Step::Done(last) => return last,
            }
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, scene: &Scene, ray: Ray) -> RayResult {
        crate::counter!("Primary rays");
        let state = self.trace(scene, ray);

        let primary = state.primary.unwrap_or(Primary {
            normal: Vec3::ZERO,
            albedo: Vec3::ZERO,
            z: f32::INFINITY,
        });
        RayResult {
            normal: primary.normal,
            albedo: primary.albedo.rgb(),
            color: state.color.rgb(),
            z: primary.z,
            ray_depth: state.bounces as f32,
        }
    }
}

use glam::Vec3;

use crate::{material::Material, math::float::FloatAsExt, ray::Ray};

use super::{IntersectionResult, RayIntersection, Shape};

/// Rays closer than this to being parallel to a plane never hit it
const PARALLEL_EPSILON: f32 = 1e-4;

/// An infinite, always opaque plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Shape for Plane {
    /// The reported normal is the plane normal, whichever side the ray comes from.
    fn intersection_full(&self, ray: Ray) -> IntersectionResult {
        let Some(denom) = ray.direction.dot(self.normal).into_non_zero(PARALLEL_EPSILON) else {
            return IntersectionResult::NoIntersection;
        };

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return IntersectionResult::NoIntersection;
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            normal: self.normal,
        })
    }
}

use glam::Vec3;

use crate::{material::Material, ray::Ray};

use super::{IntersectionResult, RayIntersection, Shape};

/// A sphere with its own material.
///
/// Normals are always pointing outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Shape for Sphere {
    /// Only the near root is considered: a ray starting inside the sphere does not hit it.
    fn intersection_full(&self, ray: Ray) -> IntersectionResult {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let h = b * b - c;
        if h < 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let t = -b - f32::sqrt(h);
        if t <= 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let normal = (ray.at(t) - self.center).normalize();
        IntersectionResult::Intersection(RayIntersection { t, normal })
    }
}

//! Contains the objects that are meant to be rendered: spheres and planes.
//!
//! Intersections are only reported strictly in front of the ray origin (`t > 0`),
//! missing a shape is an ordinary [IntersectionResult::NoIntersection], never an error.

pub mod plane;
pub mod sphere;

use glam::Vec3;

use crate::ray::Ray;

pub use plane::Plane;
pub use sphere::Sphere;

/// An abstracted shape to be rendered by raytracing.
pub trait Shape {
    /// Check whether `ray` intersect the shape defined by `self` if so, gives the distance and the normal
    fn intersection_full(&self, ray: Ray) -> IntersectionResult;

    /// Only checks for the existence of an intersection.
    /// It is used to cast shadow rays
    fn intersects(&self, ray: Ray) -> bool {
        matches!(
            self.intersection_full(ray),
            IntersectionResult::Intersection(_)
        )
    }
}

/// Holds the local information and the time of a collision between a ray and a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersection {
    pub t: f32,
    pub normal: Vec3,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult {
    Intersection(RayIntersection),
    NoIntersection,
}

pub mod dielectric;

use glam::Vec3;

use crate::color::Color;

/// Smallest index of refraction a material can have
pub const MIN_IOR: f32 = 0.01;

pub use dielectric::{beer_lambert, fresnel, Fresnel};

/// Surface description shared by every shape.
///
/// `reflectivity` and `transparency` are both kept in [0, 1], `ior` is at least [MIN_IOR] and
/// `absorption` is non-negative.
/// A surface with no transparency is opaque, whatever its reflectivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub reflectivity: f32,
    pub transparency: f32,
    pub ior: f32,
    /// Per channel Beer-Lambert coefficient
    pub absorption: Vec3,
}

impl Material {
    pub fn new(
        color: Color,
        reflectivity: f32,
        transparency: f32,
        ior: f32,
        absorption: Vec3,
    ) -> Self {
        Self {
            color,
            reflectivity: reflectivity.clamp(0.0, 1.0),
            transparency: transparency.clamp(0.0, 1.0),
            ior: ior.max(MIN_IOR),
            absorption: absorption.max(Vec3::ZERO),
        }
    }

    pub fn opaque(color: Color, reflectivity: f32) -> Self {
        Self::new(color, reflectivity, 0.0, 1.0, Vec3::ZERO)
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency > 0.0
    }

    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

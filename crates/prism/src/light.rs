use glam::Vec3;

use crate::color::Color;

/// A point light. Its color is an intensity and may exceed 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    /// A light circling the Y axis at `radius`, `time` seconds after the start of its orbit
    pub fn orbiting(radius: f32, height: f32, time: f32, color: Color) -> Self {
        let (s, c) = f32::sin_cos(time);
        Self {
            position: Vec3::new(radius * c, height, radius * s),
            color,
        }
    }
}

use glam::Vec3;

use crate::ray::Ray;

/// Vertical field of view, in degrees
pub const FOV: f32 = 45.0;

/// A pinhole camera.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub origin: Vec3,
    pub forward: Vec3,
    right: Vec3,
    up: Vec3,
    /// Half height of the screen at distance 1
    focal: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32, origin: Vec3, direction: Vec3) -> Self {
        let forward = direction.normalize();
        let right = Vec3::Y.cross(forward).try_normalize().unwrap_or(Vec3::X);
        let up = forward.cross(right);

        Self {
            width,
            height,
            origin,
            forward,
            right,
            up,
            focal: f32::tan(FOV.to_radians() / 2.),
        }
    }

    /// Ray through viewport coordinates, `vx` and `vy` in [-1, 1] from left to right and from bottom to top.
    pub fn ray(&self, vx: f32, vy: f32) -> Ray {
        let aspect_ratio = self.width as f32 / self.height as f32;
        let direction = self.forward
            + self.focal * (vx * aspect_ratio * self.right + vy * self.up);
        Ray::new(self.origin, direction)
    }

    /// Ray through the center of pixel `(x, y)`, rows going from top to bottom
    pub fn pixel_ray(&self, x: u32, y: u32) -> Ray {
        let vx = 2. * ((x as f32 + 0.5) / self.width as f32) - 1.;
        let vy = 1. - 2. * ((y as f32 + 0.5) / self.height as f32);
        self.ray(vx, vy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// First person camera driven by keyboard moves and mouse deltas.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Degrees, 90° looks toward +Z
    pub yaw: f32,
    /// Degrees, kept in [-89, 89]
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(-1.5, 0.0, -2.0),
            yaw: 90.0,
            pitch: 0.0,
            speed: 0.1,
            sensitivity: 0.1,
        }
    }
}

impl FlyCamera {
    pub const MAX_PITCH: f32 = 89.0;

    pub fn direction(&self) -> Vec3 {
        let (sy, cy) = f32::sin_cos(self.yaw.to_radians());
        let (sp, cp) = f32::sin_cos(self.pitch.to_radians());
        Vec3::new(cy * cp, sp, sy * cp).normalize()
    }

    pub fn process_movement(&mut self, movement: Movement) {
        let direction = self.direction();
        // Same orientation as the screen right axis of [Camera]
        let right = Vec3::Y.cross(direction).normalize();
        let delta = match movement {
            Movement::Forward => direction,
            Movement::Backward => -direction,
            Movement::Left => -right,
            Movement::Right => right,
            Movement::Up => Vec3::Y,
            Movement::Down => Vec3::NEG_Y,
        };
        self.position += self.speed * delta;
    }

    /// Applies a mouse delta, `dy` is positive when the mouse goes up
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    pub fn camera(&self, width: u32, height: u32) -> Camera {
        Camera::new(width, height, self.position, self.direction())
    }
}

use super::math::vec::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// A ray starting slightly along `direction` from `origin`, so it cannot hit the surface it leaves
    pub fn new_offset(origin: Vec3, direction: Vec3, eps: f32) -> Self {
        let ray = Self::new(origin, direction);
        Self {
            origin: ray.at(eps),
            ..ray
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::Ray;

    #[test]
    fn ray() {
        let eps = 0.01;
        let ray = Ray::new(Vec3::new(1., 0., 0.), Vec3::new(-1., 1., 0.));

        assert!(ray.at(0.0).distance_squared(ray.origin) < eps);
        assert!(ray.at(1.0).distance_squared(ray.origin + ray.direction) < eps);
    }

    #[test]
    fn offset_ray() {
        let ray = Ray::new_offset(Vec3::ZERO, Vec3::new(0., 2., 0.), 0.5);
        assert_eq!(ray.origin, Vec3::new(0., 0.5, 0.));
        assert_eq!(ray.direction, Vec3::Y);
    }
}

pub use glam::Vec3;
use image::Rgb;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait RefrReflVecExt {
    fn refract(self, normal: Vec3, ior: f32) -> Option<Vec3>;
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl RefrReflVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }

    /// Bends `self` through an interface between air and a medium of index `ior`.
    ///
    /// `normal` is the outward normal of the medium, the side the ray comes from is deduced
    /// from it. Returns `None` when the ray is totally reflected.
    fn refract(self, mut normal: Vec3, ior: f32) -> Option<Vec3> {
        let mut cosi = self.dot(normal).clamp(-1.0, 1.0);
        let mut etai = 1.;
        let mut etat = ior;
        if cosi < 0.0 {
            cosi = -cosi;
        } else {
            (etat, etai) = (etai, etat);
            normal = -normal;
        }
        let eta = etai / etat;
        let k = 1. - eta * eta * (1. - cosi * cosi);

        if k < 0. {
            None
        } else {
            Some(eta * self + (eta * cosi - f32::sqrt(k)) * normal)
        }
    }
}

pub trait Vec3ExpExt {
    /// Component-wise exponential
    fn exp(self) -> Self;
}

impl Vec3ExpExt for Vec3 {
    fn exp(self) -> Self {
        Vec3::new(self.x.exp(), self.y.exp(), self.z.exp())
    }
}

#[cfg(test)]
mod tests {
    use super::{RefrReflVecExt, Vec3};

    #[test]
    fn reflect_mirrors_around_normal() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = d.reflect(Vec3::Y);
        assert!(r.distance(Vec3::new(1.0, 1.0, 0.0).normalize()) < 1e-6);
    }

    #[test]
    fn refract_straight_through_at_normal_incidence() {
        let r = Vec3::NEG_Y.refract(Vec3::Y, 1.5).unwrap();
        assert!(r.distance(Vec3::NEG_Y) < 1e-6);

        // Leaving the medium
        let r = Vec3::Y.refract(Vec3::Y, 1.5).unwrap();
        assert!(r.distance(Vec3::Y) < 1e-6);
    }

    #[test]
    fn refract_bends_toward_normal_entering_denser_medium() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = d.refract(Vec3::Y, 1.5).unwrap();
        // sin(t) = sin(45°) / 1.5
        let expected_sin = f32::sqrt(0.5) / 1.5;
        assert!((r.x - expected_sin).abs() < 1e-5);
        assert!(r.y < 0.0);
        assert!((r.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn refract_none_beyond_critical_angle() {
        // Inside glass, going out at 60° from the normal
        let (s, c) = f32::sin_cos(60f32.to_radians());
        let d = Vec3::new(s, c, 0.0);
        assert!(d.refract(Vec3::Y, 1.5).is_none());
    }
}

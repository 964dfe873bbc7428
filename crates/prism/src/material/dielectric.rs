use glam::Vec3;

use crate::math::vec::Vec3ExpExt;

/// Split of the light at a dielectric interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fresnel {
    /// Fraction of the light that is reflected, the rest is transmitted
    pub reflectance: f32,
    pub total_internal: bool,
}

/// Exact (unpolarized) Fresnel reflectance for a ray of direction `direction` hitting a
/// surface of outward normal `normal`, going from `ior_in` to `ior_out`.
///
/// A ray leaving the medium (`direction` along `normal`) swaps both indices.
pub fn fresnel(direction: Vec3, normal: Vec3, ior_in: f32, ior_out: f32) -> Fresnel {
    let mut cosi = direction.dot(normal).clamp(-1.0, 1.0);
    let (mut etai, mut etat) = (ior_in, ior_out);
    if cosi > 0.0 {
        // Inside the medium, looking out
        (etai, etat) = (etat, etai);
        cosi = -cosi;
    }

    let sint = etai / etat * f32::sqrt(f32::max(0.0, 1.0 - cosi * cosi));
    if sint >= 1.0 {
        return Fresnel {
            reflectance: 1.0,
            total_internal: true,
        };
    }

    let cost = f32::sqrt(f32::max(0.0, 1.0 - sint * sint));
    let cosi = cosi.abs();
    let rs = (etat * cosi - etai * cost) / (etat * cosi + etai * cost);
    let rp = (etai * cosi - etat * cost) / (etai * cosi + etat * cost);
    Fresnel {
        reflectance: (rs * rs + rp * rp) * 0.5,
        total_internal: false,
    }
}

/// Transmittance of a medium of coefficient `absorption` over `distance`
pub fn beer_lambert(absorption: Vec3, distance: f32) -> Vec3 {
    (-absorption * distance).exp()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{beer_lambert, fresnel};

    const NORMAL_INCIDENCE_GLASS: f32 = (0.5 / 2.5) * (0.5 / 2.5);

    #[test]
    fn normal_incidence_from_outside() {
        let f = fresnel(Vec3::NEG_Y, Vec3::Y, 1.0, 1.5);
        assert!(!f.total_internal);
        assert!((f.reflectance - NORMAL_INCIDENCE_GLASS).abs() < 1e-6);
        assert!((f.reflectance - 0.04).abs() < 1e-6);
    }

    #[test]
    fn normal_incidence_from_inside() {
        let f = fresnel(Vec3::Y, Vec3::Y, 1.0, 1.5);
        assert!(!f.total_internal);
        assert!((f.reflectance - NORMAL_INCIDENCE_GLASS).abs() < 1e-6);
    }

    #[test]
    fn total_internal_reflection_beyond_critical_angle() {
        let critical = f32::asin(1.0 / 1.5);
        assert!((critical.to_degrees() - 41.81).abs() < 0.01);

        for angle in [45f32, 60.0, 89.0] {
            let (s, c) = f32::sin_cos(angle.to_radians());
            // Leaving the glass: the direction is along the outward normal
            let f = fresnel(Vec3::new(s, c, 0.0), Vec3::Y, 1.0, 1.5);
            assert!(f.total_internal, "{angle}° should be totally reflected");
            assert_eq!(f.reflectance, 1.0);
        }
    }

    #[test]
    fn below_critical_angle_is_partial() {
        let (s, c) = f32::sin_cos(30f32.to_radians());
        let f = fresnel(Vec3::new(s, c, 0.0), Vec3::Y, 1.0, 1.5);
        assert!(!f.total_internal);
        assert!(f.reflectance > 0.0 && f.reflectance < 1.0);
    }

    #[test]
    fn entering_never_totally_reflects() {
        let (s, c) = f32::sin_cos(89f32.to_radians());
        let f = fresnel(Vec3::new(s, -c, 0.0), Vec3::Y, 1.0, 1.5);
        assert!(!f.total_internal);
        assert!(f.reflectance < 1.0);
    }

    #[test]
    fn same_index_does_not_reflect() {
        let d = Vec3::new(1.0, -1.0, 0.5).normalize();
        let f = fresnel(d, Vec3::Y, 1.0, 1.0);
        assert!(f.reflectance.abs() < 1e-6);
    }

    #[test]
    fn beer_lambert_decays() {
        assert_eq!(beer_lambert(Vec3::ZERO, 10.0), Vec3::ONE);
        let t = beer_lambert(Vec3::new(0.0, 0.1, 1.0), 2.0);
        assert_eq!(t.x, 1.0);
        assert!((t.y - f32::exp(-0.2)).abs() < 1e-6);
        assert!(t.z < t.y);
    }
}

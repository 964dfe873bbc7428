use glam::Vec3;

use crate::{math::vec::RgbAsVec3Ext, ray::Ray, scene::Scene};

pub const AMBIENT: Vec3 = Vec3::new(0.05, 0.05, 0.05);

/// Sky seen looking down
const SKY_DOWN: Vec3 = Vec3::new(0.5, 0.6, 0.8);
/// Sky seen looking up
const SKY_UP: Vec3 = Vec3::new(0.0, 0.0, 0.3);

/// Vertical gradient seen by rays escaping the scene
pub fn sky_color(direction: Vec3) -> Vec3 {
    let t = 0.5 * (direction.y + 1.0);
    SKY_DOWN.lerp(SKY_UP, t)
}

/// Lambertian direct lighting at `point`, with hard shadows, plus a constant ambient term.
pub fn shade(scene: &Scene, point: Vec3, normal: Vec3, base_color: Vec3) -> Vec3 {
    let diffuse = scene.lights.iter().fold(Vec3::ZERO, |diffuse, light| {
        let light_dir = (light.position - point).normalize();
        let lambert = normal.dot(light_dir).max(0.0);

        // A light behind the surface contributes nothing, shadowed or not
        if lambert > 0.0 && scene.is_visible(point, normal, light_dir) {
            diffuse + lambert * light.color.vec()
        } else {
            diffuse
        }
    });

    diffuse * base_color + AMBIENT
}

/// Color seen along `ray` without any further bounce: the shading of the first surface hit, or the sky.
pub fn reflection_sample(scene: &Scene, ray: Ray) -> Vec3 {
    crate::counter!("Reflection samples");
    match scene.first_hit(ray) {
        Some(hit) => {
            let material = scene.material(hit.surface);
            shade(scene, ray.at(hit.t), hit.normal, material.color.vec())
        }
        None => sky_color(ray.direction),
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use image::Rgb;

    use crate::{
        color,
        light::Light,
        material::Material,
        math::vec::RgbAsVec3Ext,
        ray::Ray,
        scene::Scene,
        shape::Sphere,
    };

    use super::{reflection_sample, shade, sky_color, AMBIENT};

    fn lit_scene() -> Scene {
        let mut scene = Scene::default();
        scene.insert_light(Light {
            position: Vec3::new(0.0, 10.0, 0.0),
            color: Rgb([2.0, 1.0, 0.5]),
        });
        scene
    }

    #[test]
    fn sky_gradient() {
        assert!(sky_color(Vec3::Y).distance(Vec3::new(0.0, 0.0, 0.3)) < 1e-6);
        assert_eq!(sky_color(Vec3::NEG_Y), Vec3::new(0.5, 0.6, 0.8));
        let horizon = sky_color(Vec3::X);
        assert!(horizon.distance(Vec3::new(0.25, 0.3, 0.55)) < 1e-6);
    }

    #[test]
    fn unobstructed_light_right_above() {
        let scene = lit_scene();
        let color = shade(&scene, Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Vec3::ONE);
        assert!(color.distance(Vec3::new(2.0, 1.0, 0.5) + AMBIENT) < 1e-5);
    }

    #[test]
    fn shadowed_point_is_ambient_only() {
        let mut scene = lit_scene();
        scene.insert_sphere(Sphere {
            center: Vec3::new(0.0, 3.0, 0.0),
            radius: 1.0,
            material: Material::opaque(color::WHITE, 0.0),
        });
        let color = shade(&scene, Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Vec3::ONE);
        assert_eq!(color, AMBIENT);
    }

    #[test]
    fn occluder_between_point_and_light_removes_its_diffuse() {
        let mut scene = lit_scene();
        let point = Vec3::new(0.0, -1.0, 0.0);
        // Second light, in line with the point and a sphere
        scene.insert_light(Light {
            position: Vec3::new(6.0, 5.0, 0.0),
            color: Rgb([0.0, 3.0, 0.0]),
        });
        let toward_light = Vec3::new(6.0, 6.0, 0.0).normalize();
        scene.insert_sphere(Sphere {
            center: point + 3.0 * toward_light,
            radius: 0.5,
            material: Material::opaque(color::WHITE, 0.0),
        });

        let color = shade(&scene, point, Vec3::Y, Vec3::ONE);
        // Only the unobstructed light above contributes
        assert!(color.distance(Vec3::new(2.0, 1.0, 0.5) + AMBIENT) < 1e-5);
    }

    #[test]
    fn light_behind_surface() {
        let scene = lit_scene();
        let color = shade(&scene, Vec3::new(0.0, -1.0, 0.0), Vec3::NEG_Y, Vec3::ONE);
        assert_eq!(color, AMBIENT);
    }

    #[test]
    fn reflection_sample_sees_sky_or_surface() {
        let scene = lit_scene();
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(reflection_sample(&scene, up), sky_color(Vec3::Y));

        let down = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        let expected = shade(
            &scene,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            scene.plane.material.color.vec(),
        );
        assert!(reflection_sample(&scene, down).distance(expected) < 1e-6);
    }
}

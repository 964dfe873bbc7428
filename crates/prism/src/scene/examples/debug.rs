use glam::Vec3;
use image::Rgb;

use crate::{
    light::Light,
    material::Material,
    scene::Scene,
    shape::{Plane, Sphere},
};

/// A glass sphere in front of a mirror sphere, lit by a single light
pub struct DebugScene;

impl From<DebugScene> for Scene {
    fn from(_: DebugScene) -> Self {
        let mut scene = Scene {
            plane: Plane {
                origin: Vec3::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
                material: Material::opaque(Rgb([0.8, 0.8, 0.8]), 0.0),
            },
            ..Default::default()
        };

        scene.insert_sphere(Sphere {
            center: Vec3::new(0.0, 0.0, 3.0),
            radius: 1.0,
            material: Material::new(Rgb([1.0, 1.0, 1.0]), 0.5, 1.0, 1.5, Vec3::new(0.2, 0.05, 0.05)),
        });
        scene.insert_sphere(Sphere {
            center: Vec3::new(1.5, 0.5, 6.0),
            radius: 1.5,
            material: Material::opaque(Rgb([0.9, 0.9, 0.9]), 0.9),
        });
        scene.insert_light(Light {
            position: Vec3::new(2.0, 6.0, -2.0),
            color: Rgb([1.0, 1.0, 1.0]),
        });
        scene
    }
}

use std::f32::consts::TAU;

use glam::Vec3;
use image::Rgb;

use crate::{
    light::Light,
    material::Material,
    math::float::FloatAsExt,
    scene::Scene,
    shape::{Plane, Sphere},
};

/// Number of small spheres laid on the ground around the big ones
pub const RING_COUNT: usize = 23;
const RING_RADIUS: f32 = 3.5;
const RING_CENTER_Z: f32 = 3.5;
const GROUND_Y: f32 = -1.0;

/// Four big spheres (two opaque, two glass-like) surrounded by a ring of small ones, on a
/// reflective ground.
///
/// `time` only moves the first light, which orbits the origin.
pub struct RingScene {
    pub time: f32,
}

impl From<RingScene> for Scene {
    fn from(RingScene { time }: RingScene) -> Self {
        let mut scene = Scene {
            spheres: Vec::with_capacity(4 + RING_COUNT),
            plane: Plane {
                origin: Vec3::new(0.0, GROUND_Y, 0.0),
                normal: Vec3::Y,
                material: Material::opaque(Rgb([0.32, 0.18, 0.26]), 0.4),
            },
            lights: Vec::new(),
        };

        scene.insert_sphere(Sphere {
            center: Vec3::new(-1.5, 0.0, 5.0),
            radius: 1.0,
            material: Material::opaque(Rgb([1.0, 0.0, 0.0]), 0.2),
        });
        scene.insert_sphere(Sphere {
            center: Vec3::new(1.5, 0.0, 6.0),
            radius: 1.0,
            material: Material::new(Rgb([0.0, 0.0, 1.0]), 0.8, 0.0, 1.0, Vec3::splat(0.02)),
        });
        scene.insert_sphere(Sphere {
            center: Vec3::new(0.0, -0.5, 3.0),
            radius: 0.5,
            material: Material::new(Rgb([0.9, 0.9, 0.9]), 0.2, 0.95, 0.87, Vec3::splat(0.01)),
        });
        scene.insert_sphere(Sphere {
            center: Vec3::new(2.0, -0.3, 3.0),
            radius: 0.7,
            material: Material::new(Rgb([0.7, 0.6, 0.5]), 0.1, 0.95, 0.87, Vec3::splat(0.03)),
        });

        for i in 0..RING_COUNT {
            scene.insert_sphere(ring_sphere(i));
        }

        scene.insert_light(Light::orbiting(5.0, 5.0, time, Rgb([0.4, 0.4, 0.4])));
        scene.insert_light(Light {
            position: Vec3::new(-5.0, 100.0, 0.0),
            color: Rgb([0.3, 0.5, 0.5]),
        });
        scene.insert_light(Light {
            position: Vec3::new(0.0, 5.0, 0.0),
            color: Rgb([0.5, 0.5, 0.5]),
        });
        scene.insert_light(Light {
            position: Vec3::new(-5.0, 5.0, 0.0),
            color: Rgb([0.2, 0.2, 0.1]),
        });
        scene.insert_light(Light {
            position: Vec3::new(0.0, 5.0, 0.0),
            color: Rgb([0.3, 0.1, 1.0]),
        });

        scene
    }
}

/// Pseudo random value in [0, 1) that only depends on `seed`
fn hash(seed: f32, k: f32, magnitude: f32) -> f32 {
    (f32::sin(seed * k) * magnitude).fract_positive()
}

/// The `i`-th sphere of the ring, resting on the ground
pub fn ring_sphere(i: usize) -> Sphere {
    let seed = i as f32;
    let angle = TAU * seed / RING_COUNT as f32;
    let radius = if i % 2 == 0 { 0.20 } else { 0.15 };
    let center = Vec3::new(
        RING_RADIUS * angle.cos(),
        GROUND_Y + radius,
        RING_CENTER_Z + RING_RADIUS * angle.sin(),
    );

    let color = Rgb([
        0.3 + 0.7 * hash(seed, 12.345, 9876.543),
        0.3 + 0.7 * hash(seed, 3.217, 5432.123),
        0.3 + 0.7 * hash(seed, 5.789, 6543.234),
    ]);
    let reflectivity = 0.1 + 0.4 * hash(seed, 1.111, 777.0);
    let transparency = 0.2 * hash(seed, 2.222, 123.0);
    let ior = 1.0 + 0.5 * hash(seed, 4.444, 987.0);

    Sphere {
        center,
        radius,
        material: Material::new(color, reflectivity, transparency, ior, Vec3::ZERO),
    }
}

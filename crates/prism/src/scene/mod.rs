pub mod examples;

use glam::Vec3;

use crate::{
    color,
    light::Light,
    material::Material,
    ray::Ray,
    shape::{IntersectionResult, Plane, RayIntersection, Shape, Sphere},
    SURFACE_EPSILON,
};

/// Which surface of a [Scene] has been hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    Sphere(usize),
    Plane,
}

#[derive(Debug, Clone, Copy)]
pub struct SceneHit {
    pub t: f32,
    pub normal: Vec3,
    pub surface: SurfaceId,
}

/// A fixed set of spheres above a single ground plane, lit by point lights.
///
/// The scene is never mutated while rendering, it is shared by reference between all the workers.
#[derive(Debug, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub plane: Plane,
    pub lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            plane: Plane {
                origin: Vec3::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
                material: Material::opaque(color::gray(0.5), 0.0),
            },
            lights: Vec::new(),
        }
    }
}

impl Scene {
    /// Insert a sphere in the scene
    pub fn insert_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere)
    }

    /// Insert a light in the scene
    pub fn insert_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn material(&self, surface: SurfaceId) -> &Material {
        match surface {
            SurfaceId::Sphere(i) => &self.spheres[i].material,
            SurfaceId::Plane => &self.plane.material,
        }
    }

    /// Nearest intersection in front of the ray. On equal distances, the first inserted shape wins.
    pub fn first_hit(&self, ray: Ray) -> Option<SceneHit> {
        let spheres = self
            .spheres
            .iter()
            .enumerate()
            .map(|(i, sphere)| (SurfaceId::Sphere(i), sphere.intersection_full(ray)));
        let plane = std::iter::once((SurfaceId::Plane, self.plane.intersection_full(ray)));

        spheres
            .chain(plane)
            .fold(None, |nearest: Option<SceneHit>, (surface, result)| {
                let IntersectionResult::Intersection(RayIntersection { t, normal }) = result else {
                    return nearest;
                };
                match nearest {
                    Some(hit) if hit.t <= t => Some(hit),
                    _ => Some(SceneHit { t, normal, surface }),
                }
            })
    }

    /// Whether `light_dir` is unobstructed from `point`, a point of a surface of normal `normal`.
    ///
    /// Every occluder counts, including those farther than the light itself.
    pub fn is_visible(&self, point: Vec3, normal: Vec3, light_dir: Vec3) -> bool {
        crate::counter!("Shadow rays");
        let ray = Ray::new(point + normal * SURFACE_EPSILON, light_dir);

        !(self.spheres.iter().any(|sphere| sphere.intersects(ray)) || self.plane.intersects(ray))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color,
        light::Light,
        material::Material,
        ray::Ray,
        shape::Sphere,
    };

    use super::{Scene, SurfaceId};

    fn scene() -> Scene {
        let mut scene = Scene::default();
        scene.insert_sphere(Sphere {
            center: Vec3::new(0.0, 0.0, 5.0),
            radius: 1.0,
            material: Material::opaque(color::WHITE, 0.0),
        });
        scene.insert_sphere(Sphere {
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 1.0,
            material: Material::opaque(color::WHITE, 0.5),
        });
        scene.insert_light(Light {
            position: Vec3::new(0.0, 5.0, 0.0),
            color: color::WHITE,
        });
        scene
    }

    #[test]
    fn nearest_hit_wins() {
        let scene = scene();
        let hit = scene.first_hit(Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.surface, SurfaceId::Sphere(0));
        assert!((hit.t - 4.0).abs() < 1e-5);

        let hit = scene.first_hit(Ray::new(Vec3::ZERO, Vec3::NEG_Y)).unwrap();
        assert_eq!(hit.surface, SurfaceId::Plane);
        assert_eq!(scene.material(hit.surface), &scene.plane.material);

        assert!(scene.first_hit(Ray::new(Vec3::ZERO, Vec3::Y)).is_none());
    }

    #[test]
    fn occluded_light_is_not_visible() {
        let mut scene = scene();
        // Lifted off the ground, so the shadow ray starts outside of it
        scene.spheres[0].center = Vec3::new(0.0, 2.0, 5.0);
        // Shaded point on the ground, under the first sphere, light straight above it
        let point = Vec3::new(0.0, -1.0, 5.0);
        assert!(!scene.is_visible(point, Vec3::Y, Vec3::Y));

        let point = Vec3::new(3.0, -1.0, 5.0);
        assert!(scene.is_visible(point, Vec3::Y, Vec3::Y));
    }

    #[test]
    fn occluder_beyond_light_still_shadows() {
        let mut scene = scene();
        let point = Vec3::new(0.0, -1.0, 0.0);
        let light = Vec3::new(0.0, 1.0, 0.0);
        scene.insert_sphere(Sphere {
            center: Vec3::new(0.0, 20.0, 0.0),
            radius: 1.0,
            material: Material::opaque(color::WHITE, 0.0),
        });
        assert!(!scene.is_visible(point, Vec3::Y, (light - point).normalize()));
    }
}

//! The renderable scene: entities, point lights and render options.

use crate::hittable::{ClosestHit, Hittable, RayHit};
use crate::renderer::{render, ImageBuffer, RenderConfig};
use lumen_core::PointLight;
use lumen_math::{DVec3, Ray, EPSILON};

/// A collection of hittable entities and point lights.
///
/// Entity order carries no meaning; nearest-hit ties are resolved by
/// whichever entity is scanned first.
#[derive(Default)]
pub struct Scene {
    entities: Vec<Box<dyn Hittable>>,
    lights: Vec<PointLight>,
    config: RenderConfig,
}

impl Scene {
    /// Create an empty scene with the given render options.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            entities: Vec::new(),
            lights: Vec::new(),
            config,
        }
    }

    /// Add an entity to be rendered.
    pub fn add_entity(&mut self, entity: impl Hittable + 'static) {
        self.entities.push(Box::new(entity));
    }

    /// Add an already boxed entity.
    pub fn add_boxed_entity(&mut self, entity: Box<dyn Hittable>) {
        self.entities.push(entity);
    }

    pub fn add_point_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    pub fn entities(&self) -> &[Box<dyn Hittable>] {
        &self.entities
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Nearest hit along `ray` over every entity, ignoring hits within
    /// `EPSILON` of the ray origin.
    pub fn closest_hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let mut closest = ClosestHit::new(ray.origin());
        for entity in &self.entities {
            if let Some(hit) = entity.hit(ray) {
                closest.offer(hit);
            }
        }
        closest.into_hit()
    }

    /// True if any entity blocks the segment from `point` to the light.
    ///
    /// Blockers must lie strictly closer than the light and farther than
    /// `EPSILON` from `point`, so the surface `point` lies on does not
    /// shadow itself.
    pub fn is_occluded(&self, point: DVec3, light: &PointLight) -> bool {
        let to_light = light.position - point;
        let light_distance_sq = to_light.length_squared();
        let shadow_ray = Ray::new(point, to_light);

        self.entities
            .iter()
            .filter_map(|entity| entity.hit(&shadow_ray))
            .any(|hit| {
                let distance_sq = hit.position.distance_squared(point);
                distance_sq < light_distance_sq && distance_sq.sqrt() > EPSILON
            })
    }

    /// Render the scene at `width x height` with its render options.
    pub fn render(&self, width: u32, height: u32) -> ImageBuffer {
        render(self, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere, Triangle};
    use lumen_core::{Color, Material};
    use std::sync::Arc;

    fn matte() -> Arc<Material> {
        Arc::new(Material::diffuse(Color::splat(0.5)))
    }

    #[test]
    fn test_closest_hit_picks_nearest_entity() {
        let mut scene = Scene::default();
        scene.add_entity(Sphere::new(
            DVec3::new(0.0, 0.0, 10.0),
            1.0,
            Arc::new(Material::emissive(Color::Y)),
        ));
        scene.add_entity(Sphere::new(
            DVec3::new(0.0, 0.0, 5.0),
            1.0,
            Arc::new(Material::emissive(Color::X)),
        ));
        assert_eq!(scene.len(), 2);

        let hit = scene.closest_hit(&Ray::new(DVec3::ZERO, DVec3::Z)).unwrap();
        assert!((hit.position.z - 4.0).abs() < 1e-9);
        assert_eq!(hit.material.color, Color::X);
    }

    #[test]
    fn test_closest_hit_empty_scene() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert!(scene.closest_hit(&Ray::new(DVec3::ZERO, DVec3::Z)).is_none());
    }

    #[test]
    fn test_secondary_rays_do_not_self_hit() {
        let mut scene = Scene::default();
        scene.add_entity(Plane::new(DVec3::ZERO, DVec3::Y, matte()));
        scene.add_entity(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, matte()));
        scene.add_entity(Triangle::new(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(11.0, 0.0, 0.0),
            DVec3::new(10.0, 1.0, 0.0),
            matte(),
        ));

        // Leaving the plane upwards at a shallow angle
        let ray = Ray::new(DVec3::new(-3.0, 0.0, -3.0), DVec3::new(-1.0, 0.1, 0.0));
        assert!(scene.closest_hit(&ray).is_none());

        // Leaving the sphere surface inwards reaches the far side, not itself
        let ray = Ray::new(DVec3::new(0.0, 0.0, 4.0), DVec3::Z);
        let hit = scene.closest_hit(&ray).unwrap();
        assert!(hit.position.distance(ray.origin()) > 1.0);

        // Leaving the triangle
        let ray = Ray::new(DVec3::new(10.2, 0.2, 0.0), DVec3::new(0.0, 1.0, -1.0));
        assert!(scene.closest_hit(&ray).is_none());
    }

    #[test]
    fn test_occlusion() {
        let mut scene = Scene::default();
        scene.add_entity(Plane::new(DVec3::ZERO, DVec3::Y, matte()));
        scene.add_entity(Sphere::new(DVec3::new(0.0, 5.0, 0.0), 1.0, matte()));

        let above = PointLight::new(DVec3::new(0.0, 10.0, 0.0), Color::ONE);
        let between = PointLight::new(DVec3::new(0.0, 2.0, 0.0), Color::ONE);
        let aside = PointLight::new(DVec3::new(10.0, 10.0, 0.0), Color::ONE);

        assert!(scene.is_occluded(DVec3::ZERO, &above));
        // The sphere is past the light
        assert!(!scene.is_occluded(DVec3::ZERO, &between));
        assert!(!scene.is_occluded(DVec3::ZERO, &aside));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut scene = Scene::new(RenderConfig::default().with_aa_multiplier(3));
        assert_eq!(scene.config().aa_multiplier, 3);

        scene.set_config(RenderConfig::default().with_max_depth(2));
        assert_eq!(scene.config().aa_multiplier, 1);
        assert_eq!(scene.config().max_depth, 2);
    }

    #[test]
    fn test_lights() {
        let mut scene = Scene::default();
        scene.add_point_light(PointLight::new(DVec3::Y, Color::ONE));
        scene.add_point_light(PointLight::new(DVec3::X, Color::ONE));
        assert_eq!(scene.lights().len(), 2);
    }
}

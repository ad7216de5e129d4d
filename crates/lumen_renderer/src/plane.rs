//! Infinite plane primitive.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit};
use lumen_core::Material;
use lumen_math::{DVec3, Ray, EPSILON};

/// An infinite plane through `center`, facing `normal`.
///
/// The plane is one-sided only in the sense that its normal is never flipped
/// towards the ray; it can be hit from either side.
pub struct Plane {
    center: DVec3,
    normal: DVec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a plane. A zero normal yields a plane that is never hit.
    pub fn new(center: DVec3, normal: DVec3, material: Arc<Material>) -> Self {
        Self {
            center,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let dir = ray.direction().try_normalize()?;

        let denom = self.normal.dot(dir);
        // Parallel to the plane
        if denom.abs() <= EPSILON {
            return None;
        }

        let t = (self.center - ray.origin()).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        let position = ray.origin() + dir * t;
        Some(RayHit::new(position, self.normal, dir, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

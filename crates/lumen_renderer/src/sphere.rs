//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit};
use lumen_core::Material;
use lumen_math::{DVec3, Ray, EPSILON};

/// A sphere primitive.
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance along the normalized ray direction to the accepted hit.
    ///
    /// Geometric solution. A center behind the origin (`tca < 0`) is a miss
    /// even if the origin is inside the sphere. The nearer root is used
    /// unless it is within `EPSILON`, then the farther one.
    pub fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let dir = ray.direction().try_normalize()?;

        let voc = self.center - ray.origin();
        let tca = voc.dot(dir);
        if tca < 0.0 {
            return None;
        }

        let r2 = self.radius * self.radius;
        let d2 = voc.dot(voc) - tca * tca;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        let mut t = t0.min(t1);
        if t < EPSILON {
            t = t0.max(t1);
            if t < EPSILON {
                return None;
            }
        }

        Some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let t = self.hit_distance(ray)?;
        let dir = ray.direction().normalize();

        let point = ray.origin() + dir * t;
        let normal = (point - self.center).normalize();

        Some(RayHit::new(point, normal, dir, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

//! Hittable trait and RayHit for ray-object intersection.

use lumen_core::Material;
use lumen_math::{DVec3, Ray, EPSILON};

/// Record of a ray-surface intersection.
#[derive(Clone, Copy, Debug)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: DVec3,
    /// Unit surface normal, as defined by the primitive (not flipped
    /// towards the ray)
    pub normal: DVec3,
    /// Unit direction of the ray that produced the hit
    pub incident: DVec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    pub fn new(position: DVec3, normal: DVec3, incident: DVec3, material: &'a Material) -> Self {
        Self {
            position,
            normal,
            incident,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest valid intersection of `ray` with this object, if any.
    fn hit(&self, ray: &Ray) -> Option<RayHit<'_>>;

    /// Material shared by every hit on this object.
    fn material(&self) -> &Material;
}

/// Running nearest-hit selection along one ray.
///
/// Candidates are ranked by squared distance from the ray origin; a strictly
/// smaller distance wins, so ties keep the first offer. Hits within
/// [`EPSILON`] of the origin are ignored, which keeps secondary rays leaving a
/// surface from re-hitting it.
pub struct ClosestHit<'a> {
    origin: DVec3,
    distance_sq: f64,
    hit: Option<RayHit<'a>>,
}

impl<'a> ClosestHit<'a> {
    pub fn new(origin: DVec3) -> Self {
        Self {
            origin,
            distance_sq: f64::MAX,
            hit: None,
        }
    }

    /// Consider a candidate hit. Returns true if it became the closest.
    pub fn offer(&mut self, hit: RayHit<'a>) -> bool {
        let distance_sq = hit.position.distance_squared(self.origin);
        if distance_sq < self.distance_sq && distance_sq.sqrt() > EPSILON {
            self.distance_sq = distance_sq;
            self.hit = Some(hit);
            true
        } else {
            false
        }
    }

    /// Squared distance of the current winner (`f64::MAX` if none).
    pub fn distance_squared(&self) -> f64 {
        self.distance_sq
    }

    pub fn into_hit(self) -> Option<RayHit<'a>> {
        self.hit
    }
}

//! Triangle primitive for ray tracing.
//!
//! Two intersection routines share the same hit shape:
//! - [`Hittable::hit`] solves against the face plane and runs inside-outside
//!   edge tests, returning the flat face normal.
//! - [`Triangle::hit_smooth`] is Möller-Trumbore and interpolates the given
//!   per-vertex normals with the barycentric coordinates.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit};
use lumen_core::Material;
use lumen_math::{DVec3, Ray, EPSILON};

/// A triangle primitive.
pub struct Triangle {
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices (counter-clockwise).
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3, material: Arc<Material>) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
        }
    }

    pub fn vertices(&self) -> [DVec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unit face normal, `(v1 - v0) x (v2 - v0)`. Zero for a degenerate
    /// triangle.
    pub fn face_normal(&self) -> DVec3 {
        (self.v1 - self.v0)
            .cross(self.v2 - self.v0)
            .normalize_or_zero()
    }

    /// Möller-Trumbore intersection with interpolated vertex normals.
    ///
    /// `t` is measured along the ray's own (possibly unnormalized)
    /// direction.
    pub fn hit_smooth(&self, ray: &Ray, normals: &[DVec3; 3]) -> Option<RayHit<'_>> {
        let dir = ray.direction();
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let pvec = dir.cross(edge2);
        let det = edge1.dot(pvec);

        // Ray is parallel to triangle
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = ray.origin() - self.v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = dir.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        if t <= EPSILON {
            return None;
        }

        let [n0, n1, n2] = *normals;
        let normal = ((1.0 - u - v) * n0 + u * n1 + v * n2)
            .try_normalize()
            .unwrap_or_else(|| self.face_normal());

        Some(RayHit::new(
            ray.at(t),
            normal,
            dir.normalize(),
            &self.material,
        ))
    }
}

impl Hittable for Triangle {
    /// Plane solve plus inside-outside test, flat normal.
    fn hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let normal = self.face_normal();
        let dir = ray.direction().try_normalize()?;

        let n_dot_dir = normal.dot(dir);
        // Parallel, or a degenerate triangle with a zero normal
        if n_dot_dir.abs() <= EPSILON {
            return None;
        }

        let d = -normal.dot(self.v0);
        let t = -(normal.dot(ray.origin()) + d) / n_dot_dir;
        // Behind the ray origin
        if t < EPSILON {
            return None;
        }

        let point = ray.origin() + dir * t;

        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (a, b) in edges {
            if normal.dot((b - a).cross(point - a)) < 0.0 {
                return None;
            }
        }

        Some(RayHit::new(point, normal, dir, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Color;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            Arc::new(Material::diffuse(Color::splat(0.5))),
        )
    }

    fn centroid_ray() -> Ray {
        Ray::new(DVec3::new(1.0 / 3.0, 1.0 / 3.0, -1.0), DVec3::Z)
    }

    #[test]
    fn test_triangle_hit_centroid() {
        let tri = unit_triangle();
        let hit = tri.hit(&centroid_ray()).unwrap();

        assert!((hit.position - DVec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)).length() < 1e-12);
        assert_eq!(hit.normal, DVec3::Z);
        assert_eq!(hit.incident, DVec3::Z);
    }

    #[test]
    fn test_triangle_miss_outside() {
        let ray = Ray::new(DVec3::new(2.0, 2.0, -1.0), DVec3::Z);

        assert!(unit_triangle().hit(&ray).is_none());
        assert!(unit_triangle().hit_smooth(&ray, &[DVec3::Z; 3]).is_none());
    }

    #[test]
    fn test_triangle_hit_from_behind_keeps_face_normal() {
        let ray = Ray::new(DVec3::new(0.25, 0.25, 1.0), DVec3::new(0.0, 0.0, -1.0));
        let tri = unit_triangle();
        let hit = tri.hit(&ray).unwrap();

        assert_eq!(hit.normal, DVec3::Z);
    }

    #[test]
    fn test_triangle_parallel_and_behind() {
        let parallel = Ray::new(DVec3::new(0.2, 0.2, -1.0), DVec3::X);
        assert!(unit_triangle().hit(&parallel).is_none());

        let behind = Ray::new(DVec3::new(0.2, 0.2, -1.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(unit_triangle().hit(&behind).is_none());
        assert!(unit_triangle().hit_smooth(&behind, &[DVec3::Z; 3]).is_none());
    }

    #[test]
    fn test_triangle_origin_on_surface_misses() {
        let ray = Ray::new(DVec3::new(0.2, 0.2, 0.0), DVec3::new(0.0, 1.0, 1.0));

        assert!(unit_triangle().hit(&ray).is_none());
        assert!(unit_triangle().hit_smooth(&ray, &[DVec3::Z; 3]).is_none());
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let tri = Triangle::new(
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(2.0, 0.0, 0.0),
            Arc::new(Material::default()),
        );
        let ray = Ray::new(DVec3::new(0.5, 0.0, -1.0), DVec3::Z);

        assert_eq!(tri.face_normal(), DVec3::ZERO);
        assert!(tri.hit(&ray).is_none());
    }

    #[test]
    fn test_smooth_hit_matches_flat_position() {
        let tri = unit_triangle();
        let flat = tri.hit(&centroid_ray()).unwrap();
        let smooth = tri.hit_smooth(&centroid_ray(), &[DVec3::Z; 3]).unwrap();

        assert!((flat.position - smooth.position).length() < 1e-12);
        assert!((smooth.normal - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_smooth_normal_interpolation() {
        let tri = unit_triangle();
        let normals = [DVec3::X, DVec3::Y, DVec3::Z];

        // Close to v1 the normal is dominated by n1
        let ray = Ray::new(DVec3::new(0.98, 0.01, -1.0), DVec3::Z);
        let hit = tri.hit_smooth(&ray, &normals).unwrap();
        assert!(hit.normal.y > 0.99);
        assert!((hit.normal.length() - 1.0).abs() < 1e-12);

        // At the centroid all three contribute equally
        let hit = tri.hit_smooth(&centroid_ray(), &normals).unwrap();
        let expected = DVec3::ONE.normalize();
        assert!((hit.normal - expected).length() < 1e-9);
    }

    #[test]
    fn test_smooth_incident_is_unit_length() {
        let ray = Ray::new(DVec3::new(0.25, 0.25, -2.0), DVec3::new(0.0, 0.0, 4.0));
        let tri = unit_triangle();
        let hit = tri.hit_smooth(&ray, &[DVec3::Z; 3]).unwrap();

        assert_eq!(hit.incident, DVec3::Z);
        assert!((hit.position - DVec3::new(0.25, 0.25, 0.0)).length() < 1e-12);
    }
}

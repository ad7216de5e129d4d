//! Triangle mesh entity with bounding-sphere culling.
//!
//! A `MeshModel` owns the triangles derived from a parsed [`Mesh`] and one
//! bounding sphere computed at construction. Rays that miss the sphere skip
//! the per-triangle scan entirely; the sphere never produces a hit itself.

use std::path::Path;
use std::sync::Arc;

use crate::hittable::{ClosestHit, Hittable, RayHit};
use crate::{Sphere, Triangle};
use lumen_core::obj::{load_obj, ObjResult, VertexTransform};
use lumen_core::{Material, Mesh};
use lumen_math::{DVec3, Ray};

struct MeshFace {
    triangle: Triangle,
    normals: Option<[DVec3; 3]>,
}

/// A mesh of triangles sharing one material.
pub struct MeshModel {
    faces: Vec<MeshFace>,
    /// Interpolate vertex normals (one normal per vertex in the source mesh)
    smooth: bool,
    /// `None` only for a mesh without vertices
    bounds: Option<Sphere>,
    material: Arc<Material>,
}

impl MeshModel {
    /// Build the triangle list and bounding sphere from `mesh`.
    pub fn new(mesh: &Mesh, material: Arc<Material>) -> Self {
        let mut faces = Vec::with_capacity(mesh.triangle_count());
        for face in &mesh.faces {
            let Some([v0, v1, v2]) = mesh.face_vertices(face) else {
                log::warn!(
                    "Skipping face {:?}: mesh has {} vertices",
                    face.indices,
                    mesh.vertex_count()
                );
                continue;
            };
            faces.push(MeshFace {
                triangle: Triangle::new(v0, v1, v2, material.clone()),
                normals: face.normals,
            });
        }

        let bounds = mesh
            .bounding_sphere()
            .map(|(center, radius)| Sphere::new(center, radius, material.clone()));

        if let Some(sphere) = &bounds {
            log::debug!(
                "Mesh bounding sphere: center {:?}, radius {}",
                sphere.center(),
                sphere.radius()
            );
        }

        Self {
            faces,
            smooth: mesh.has_vertex_normals(),
            bounds,
            material,
        }
    }

    /// Load an OBJ file and build a model from it.
    ///
    /// Malformed lines are skipped (and logged by the parser); only an
    /// unreadable file is an error.
    pub fn from_obj_file(
        path: impl AsRef<Path>,
        transform: VertexTransform,
        material: Arc<Material>,
    ) -> ObjResult<Self> {
        let parsed = load_obj(path, transform)?;
        Ok(Self::new(&parsed.mesh, material))
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// True if intersections interpolate vertex normals.
    pub fn uses_smooth_normals(&self) -> bool {
        self.smooth
    }

    /// Culling sphere as `(center, radius)`.
    pub fn bounding_sphere(&self) -> Option<(DVec3, f64)> {
        self.bounds.as_ref().map(|s| (s.center(), s.radius()))
    }
}

impl Hittable for MeshModel {
    fn hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        // Broad phase
        self.bounds.as_ref()?.hit_distance(ray)?;

        let mut closest = ClosestHit::new(ray.origin());
        for face in &self.faces {
            let hit = match (&face.normals, self.smooth) {
                (Some(normals), true) => face.triangle.hit_smooth(ray, normals),
                _ => face.triangle.hit(ray),
            };
            if let Some(hit) = hit {
                closest.offer(hit);
            }
        }

        closest.into_hit()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

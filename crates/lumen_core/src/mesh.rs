//! Mesh geometry representation for Lumen.
//!
//! A `Mesh` is the parsed form of a triangle asset: vertex positions, vertex
//! normals and faces. It knows nothing about materials or rays; the renderer
//! turns it into intersectable triangles.

use lumen_math::{Aabb, DVec3};

/// One triangle of a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// 0-based vertex indices
    pub indices: [usize; 3],

    /// Per-corner vertex normals, present only if they were available when
    /// the face was read
    pub normals: Option<[DVec3; 3]>,
}

impl Face {
    /// Create a face without normals.
    pub fn new(indices: [usize; 3]) -> Self {
        Self {
            indices,
            normals: None,
        }
    }

    /// Create a face with per-corner normals.
    pub fn with_normals(indices: [usize; 3], normals: [DVec3; 3]) -> Self {
        Self {
            indices,
            normals: Some(normals),
        }
    }

    /// Largest vertex index referenced by this face.
    pub fn max_index(&self) -> usize {
        self.indices[0].max(self.indices[1]).max(self.indices[2])
    }
}

/// A triangle mesh consisting of vertex positions, vertex normals and faces.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions (one DVec3 per vertex)
    pub positions: Vec<DVec3>,

    /// Vertex normals in file order (may be empty or mismatched)
    pub normals: Vec<DVec3>,

    /// Triangles
    pub faces: Vec<Face>,

    /// Axis-aligned bounding box of every vertex
    pub bounds: Aabb,
}

impl Mesh {
    /// Create a new mesh; bounds are computed from `positions`.
    pub fn new(positions: Vec<DVec3>, normals: Vec<DVec3>, faces: Vec<Face>) -> Self {
        let bounds = Aabb::enclosing(&positions);
        Self {
            positions,
            normals,
            faces,
            bounds,
        }
    }

    /// True when there is exactly one normal per vertex.
    ///
    /// Only then are the captured face normals interpolated; otherwise every
    /// triangle is shaded with its flat face normal.
    pub fn has_vertex_normals(&self) -> bool {
        !self.normals.is_empty() && self.normals.len() == self.positions.len()
    }

    /// Bounding sphere as `(center, radius)`.
    ///
    /// The center is the midpoint of the per-axis extrema and the radius is
    /// half the largest axis-aligned extent. `None` for a mesh without
    /// vertices.
    pub fn bounding_sphere(&self) -> Option<(DVec3, f64)> {
        if self.bounds.is_empty() {
            return None;
        }
        Some((self.bounds.centroid(), self.bounds.max_extent() / 2.0))
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Corner positions of a face, or `None` if an index is out of range.
    pub fn face_vertices(&self, face: &Face) -> Option<[DVec3; 3]> {
        let [i0, i1, i2] = face.indices;
        Some([
            *self.positions.get(i0)?,
            *self.positions.get(i1)?,
            *self.positions.get(i2)?,
        ])
    }
}

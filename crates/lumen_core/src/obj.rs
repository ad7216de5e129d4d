//! Wavefront OBJ parsing.
//!
//! Only the records a triangle mesh needs are understood:
//!
//! - `v x y z` - vertex position (scaled, then offset)
//! - `vn x y z` - vertex normal
//! - `f a b c ...` - face; each corner may be `i/t/n`, only `i` is used.
//!   Indices are 1-based. Polygons are fan-triangulated.
//!
//! Everything else (comments, `vt`, groups, materials) is skipped. A bad line
//! never aborts the parse: it is dropped, logged and kept as a diagnostic.

use std::path::Path;

use lumen_math::DVec3;
use thiserror::Error;

use crate::mesh::{Face, Mesh};

/// Errors that can occur while reading an OBJ asset.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number '{token}' at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Missing field in '{tag}' record at line {line}")]
    MissingField { line: usize, tag: &'static str },

    #[error("Face index {index} at line {line} is out of range ({vertex_count} vertices)")]
    InvalidIndex {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("Face at line {line} has {count} corners, need at least 3")]
    TooFewCorners { line: usize, count: usize },
}

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Uniform scale followed by a translation, applied to every vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexTransform {
    pub scale: f64,
    pub offset: DVec3,
}

impl Default for VertexTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: DVec3::ZERO,
        }
    }
}

impl VertexTransform {
    pub fn new(offset: DVec3, scale: f64) -> Self {
        Self { scale, offset }
    }

    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        p * self.scale + self.offset
    }
}

/// Output of a parse: the (possibly partial) mesh plus every dropped line.
#[derive(Debug)]
pub struct ParsedObj {
    pub mesh: Mesh,
    pub diagnostics: Vec<ObjError>,
}

/// Incremental OBJ parser.
pub struct ObjParser {
    transform: VertexTransform,
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    faces: Vec<Face>,
    diagnostics: Vec<ObjError>,
}

impl ObjParser {
    /// Create a parser that applies `transform` to every vertex.
    pub fn new(transform: VertexTransform) -> Self {
        Self {
            transform,
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Feed a whole document and return the result.
    pub fn parse(mut self, source: &str) -> ParsedObj {
        for (i, line) in source.lines().enumerate() {
            self.feed_line(i + 1, line);
        }
        self.finish()
    }

    /// Parse one line. Failures are logged and recorded, never returned.
    pub fn feed_line(&mut self, line_num: usize, line: &str) {
        if let Err(err) = self.parse_line(line_num, line) {
            log::warn!("Skipping OBJ line: {}", err);
            self.diagnostics.push(err);
        }
    }

    /// Build the mesh from everything parsed so far.
    pub fn finish(self) -> ParsedObj {
        ParsedObj {
            mesh: Mesh::new(self.positions, self.normals, self.faces),
            diagnostics: self.diagnostics,
        }
    }

    fn parse_line(&mut self, line_num: usize, line: &str) -> ObjResult<()> {
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else {
            return Ok(());
        };

        match tag {
            "v" => {
                let raw = parse_vector(line_num, "v", &mut tokens)?;
                self.positions.push(self.transform.apply(raw));
            }
            "vn" => {
                let n = parse_vector(line_num, "vn", &mut tokens)?;
                self.normals.push(n);
            }
            "f" => {
                let corners = tokens
                    .map(|token| self.parse_corner(line_num, token))
                    .collect::<ObjResult<Vec<_>>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::TooFewCorners {
                        line: line_num,
                        count: corners.len(),
                    });
                }
                for i in 1..corners.len() - 1 {
                    let face = self.make_face([corners[0], corners[i], corners[i + 1]]);
                    self.faces.push(face);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Resolve a `i[/t[/n]]` corner to a 0-based vertex index.
    fn parse_corner(&self, line_num: usize, token: &str) -> ObjResult<usize> {
        let index_str = token.split('/').next().unwrap_or(token);
        let index: i64 = index_str.parse().map_err(|_| ObjError::InvalidNumber {
            line: line_num,
            token: token.to_string(),
        })?;

        if index < 1 || index as usize > self.positions.len() {
            return Err(ObjError::InvalidIndex {
                line: line_num,
                index,
                vertex_count: self.positions.len(),
            });
        }

        Ok(index as usize - 1)
    }

    /// Normals are captured only if enough have been read to cover the face.
    fn make_face(&self, indices: [usize; 3]) -> Face {
        let face = Face::new(indices);
        if self.normals.len() > face.max_index() {
            let [i0, i1, i2] = indices;
            Face::with_normals(indices, [self.normals[i0], self.normals[i1], self.normals[i2]])
        } else {
            face
        }
    }
}

fn parse_vector<'a>(
    line_num: usize,
    tag: &'static str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> ObjResult<DVec3> {
    let mut component = || -> ObjResult<f64> {
        let token = tokens.next().ok_or(ObjError::MissingField {
            line: line_num,
            tag,
        })?;
        token.parse().map_err(|_| ObjError::InvalidNumber {
            line: line_num,
            token: token.to_string(),
        })
    };
    let x = component()?;
    let y = component()?;
    let z = component()?;
    Ok(DVec3::new(x, y, z))
}

/// Parse OBJ text.
pub fn parse_obj(source: &str, transform: VertexTransform) -> ParsedObj {
    ObjParser::new(transform).parse(source)
}

/// Read and parse an OBJ file.
///
/// Only an unreadable file is an error; malformed lines end up in
/// [`ParsedObj::diagnostics`].
pub fn load_obj(path: impl AsRef<Path>, transform: VertexTransform) -> ObjResult<ParsedObj> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let parsed = parse_obj(&source, transform);

    log::info!(
        "Loaded {}: {} vertices, {} normals, {} triangles, {} lines skipped",
        path.display(),
        parsed.mesh.vertex_count(),
        parsed.mesh.normals.len(),
        parsed.mesh.triangle_count(),
        parsed.diagnostics.len()
    );

    Ok(parsed)
}

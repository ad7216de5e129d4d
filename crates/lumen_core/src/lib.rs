//! Lumen Core - scene data for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene data types**: `Material`, `MaterialKind`, `PointLight`, `Color`
//! - **Mesh geometry**: `Mesh` with faces, captured vertex normals and bounds
//! - **OBJ support**: line-oriented `v`/`vn`/`f` parsing into a `Mesh`
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::obj::{load_obj, VertexTransform};
//!
//! let parsed = load_obj("bunny.obj", VertexTransform::default())?;
//! println!("Loaded {} triangles ({} lines skipped)",
//!     parsed.mesh.triangle_count(),
//!     parsed.diagnostics.len());
//! ```

pub mod mesh;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use mesh::{Face, Mesh};
pub use obj::{load_obj, parse_obj, ObjError, ObjResult, ParsedObj, VertexTransform};
pub use scene::{Color, Material, MaterialKind, PointLight};

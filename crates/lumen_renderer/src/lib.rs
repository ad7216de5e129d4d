//! Lumen Renderer - recursive CPU ray tracing.
//!
//! A Whitted-style ray tracer: primary rays are supersampled on a regular
//! sub-pixel grid, diffuse surfaces are lit by point lights with hard
//! shadows, mirrors reflect, and dielectrics blend reflection and
//! Beer-absorbed refraction by their Fresnel reflectance.

mod camera;
mod hittable;
mod mesh_model;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use hittable::{ClosestHit, Hittable, RayHit};
pub use mesh_model::MeshModel;
pub use plane::Plane;
pub use renderer::{color_to_rgba, render, render_into, render_pixel, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use shading::{beer_absorption, fresnel, reflect, refract, shade};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export scene data and math types
pub use lumen_core::{Color, Material, MaterialKind, PointLight};
pub use lumen_math::{DVec3, Ray, EPSILON};

//! Scene data types for Lumen.
//!
//! Materials and lights are plain, immutable data. Geometry shares a
//! material through `Arc<Material>`; the renderer only ever borrows it.

use lumen_math::DVec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, unclamped until the image is written)
pub type Color = DVec3;

/// How a surface responds to incoming light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Lit by point lights with shadow testing.
    Diffuse,
    /// Perfect mirror.
    Reflective,
    /// Dielectric: Fresnel-weighted reflection plus absorbed refraction.
    Refractive,
    /// Flat colour, ignores lighting.
    Emissive,
}

/// A surface material.
///
/// `refractive_index` is only consulted for [`MaterialKind::Refractive`].
/// For refractive materials `color` doubles as the Beer's-law extinction
/// coefficient of the medium behind the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f64,
}

fn default_refractive_index() -> f64 {
    1.0
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}

impl Material {
    /// Create a new material.
    pub fn new(kind: MaterialKind, color: Color, refractive_index: f64) -> Self {
        Self {
            kind,
            color,
            refractive_index,
        }
    }

    /// Diffuse surface with the given albedo.
    pub fn diffuse(color: Color) -> Self {
        Self::new(MaterialKind::Diffuse, color, 1.0)
    }

    /// Mirror. The colour is only visible once recursion bottoms out.
    pub fn reflective(color: Color) -> Self {
        Self::new(MaterialKind::Reflective, color, 1.0)
    }

    /// Glass-like dielectric.
    pub fn refractive(color: Color, refractive_index: f64) -> Self {
        Self::new(MaterialKind::Refractive, color, refractive_index)
    }

    /// Unlit flat colour.
    pub fn emissive(color: Color) -> Self {
        Self::new(MaterialKind::Emissive, color, 1.0)
    }
}

/// An isotropic point light. No distance falloff.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}

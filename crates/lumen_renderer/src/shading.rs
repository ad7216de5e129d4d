//! Recursive shading.
//!
//! `shade` computes the colour leaving a hit point back along its incident
//! ray. Secondary rays re-enter the scene's nearest-hit search and recurse
//! with one less level of depth; depth 0 returns the flat material colour.

use crate::hittable::RayHit;
use crate::Scene;
use lumen_core::{Color, MaterialKind};
use lumen_math::{DVec3, Ray, EPSILON};

/// Index of refraction outside every dielectric.
const AIR_INDEX: f64 = 1.0;

/// Colour seen along the incident ray of `hit`.
pub fn shade(scene: &Scene, hit: &RayHit, depth: u32) -> Color {
    if depth == 0 {
        return hit.material.color;
    }

    match hit.material.kind {
        MaterialKind::Diffuse => diffuse(scene, hit),
        MaterialKind::Reflective => reflection(scene, hit, depth),
        MaterialKind::Refractive => dielectric(scene, hit, depth),
        MaterialKind::Emissive => hit.material.color,
    }
}

/// Direct lighting from every unoccluded light. No ambient term.
fn diffuse(scene: &Scene, hit: &RayHit) -> Color {
    scene
        .lights()
        .iter()
        .filter(|light| !scene.is_occluded(hit.position, light))
        .filter_map(|light| {
            let light_dir = (light.position - hit.position).try_normalize()?;
            let cos_theta = hit.normal.dot(light_dir);
            (cos_theta > EPSILON).then(|| hit.material.color * light.color * cos_theta)
        })
        .fold(Color::ZERO, |acc, c| acc + c)
}

/// Follow the mirror direction.
fn reflection(scene: &Scene, hit: &RayHit, depth: u32) -> Color {
    let ray = Ray::new(hit.position, reflect(hit.incident, hit.normal));
    match scene.closest_hit(&ray) {
        Some(next) => shade(scene, &next, depth - 1),
        None => Color::ZERO,
    }
}

/// Fresnel blend of reflection and absorbed refraction.
fn dielectric(scene: &Scene, hit: &RayHit, depth: u32) -> Color {
    let ior = hit.material.refractive_index;
    let k = fresnel(hit.incident, hit.normal, ior);

    let refracted = if k < 1.0 {
        refraction(scene, hit, ior, depth)
    } else {
        Color::ZERO
    };
    let reflected = reflection(scene, hit, depth);

    reflected * k + refracted * (1.0 - k)
}

fn refraction(scene: &Scene, hit: &RayHit, ior: f64, depth: u32) -> Color {
    // Total internal reflection contributes nothing here
    let Some(direction) = refract(hit.incident, hit.normal, ior) else {
        return Color::ZERO;
    };

    let ray = Ray::new(hit.position, direction);
    let Some(next) = scene.closest_hit(&ray) else {
        return Color::ZERO;
    };

    let distance = next.position.distance(hit.position);
    shade(scene, &next, depth - 1) * beer_absorption(hit.material.color, distance)
}

/// Mirror `incident` about `normal`.
#[inline]
pub fn reflect(incident: DVec3, normal: DVec3) -> DVec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Refraction direction by the vector form of Snell's law.
///
/// The ray is inside the medium when `normal . incident > 0`; then the normal
/// is flipped and the indices swapped. `None` on total internal reflection.
pub fn refract(incident: DVec3, normal: DVec3, ior: f64) -> Option<DVec3> {
    let cos_i = normal.dot(incident).clamp(-1.0, 1.0);

    let (eta_i, eta_t, n, cos_i) = if cos_i < 0.0 {
        (AIR_INDEX, ior, normal, -cos_i)
    } else {
        (ior, AIR_INDEX, -normal, cos_i)
    };

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some(eta * incident + (eta * cos_i - k.sqrt()) * n)
}

/// Fraction of light reflected at a dielectric boundary.
///
/// Exact unpolarized Fresnel equations; 1 under total internal reflection.
pub fn fresnel(incident: DVec3, normal: DVec3, ior: f64) -> f64 {
    let cos_i = normal.dot(incident).clamp(-1.0, 1.0);
    let (eta_i, eta_t) = if cos_i > 0.0 {
        (ior, AIR_INDEX)
    } else {
        (AIR_INDEX, ior)
    };

    let sin_t = eta_i / eta_t * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = cos_i.abs();
    let rs = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let rp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);

    (rs * rs + rp * rp) / 2.0
}

/// Per-channel transmittance `exp(-extinction * distance)`.
#[inline]
pub fn beer_absorption(extinction: Color, distance: f64) -> Color {
    Color::new(
        (-extinction.x * distance).exp(),
        (-extinction.y * distance).exp(),
        (-extinction.z * distance).exp(),
    )
}

//! Pinhole camera for primary ray generation.

use lumen_math::{DVec3, Ray};

/// A pinhole camera at the origin looking down `+z`, with `+y` up.
///
/// Primary rays pass through a virtual image plane at `z = 1`. Directions are
/// left unnormalized; each primitive normalizes what it needs.
#[derive(Clone, Debug)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    /// Field of view in radians
    fov: f64,
    origin: DVec3,

    // Image plane half extents at z = 1
    half_width: f64,
    half_height: f64,
}

impl Camera {
    /// Create a camera for a `width x height` image.
    ///
    /// The horizontal half extent is `tan(fov / 2)`; the vertical one is that
    /// divided by `height / width`.
    pub fn new(width: u32, height: u32, fov: f64) -> Self {
        let aspect_ratio = height as f64 / width as f64;
        let half_width = (fov / 2.0).tan();
        let half_height = half_width / aspect_ratio;

        Self {
            image_width: width,
            image_height: height,
            fov,
            origin: DVec3::ZERO,
            half_width,
            half_height,
        }
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Direction through sub-sample `(sx, sy)` of an `n x n` grid inside
    /// pixel `(x, y)`. Pixel `(0, 0)` is the top-left corner.
    pub fn sample_direction(&self, x: u32, y: u32, sx: u32, sy: u32, n: u32) -> DVec3 {
        let n = n.max(1) as f64;
        let px = (x as f64 + (sx as f64 + 0.5) / n) / self.image_width as f64;
        let py = (y as f64 + (sy as f64 + 0.5) / n) / self.image_height as f64;

        let ndc_x = px * 2.0 - 1.0;
        let ndc_y = 1.0 - py * 2.0;

        DVec3::new(ndc_x * self.half_width, ndc_y * self.half_height, 1.0)
    }

    /// Primary ray for a sub-sample; see [`Camera::sample_direction`].
    pub fn get_ray(&self, x: u32, y: u32, sx: u32, sy: u32, n: u32) -> Ray {
        Ray::new(self.origin, self.sample_direction(x, y, sx, sy, n))
    }
}

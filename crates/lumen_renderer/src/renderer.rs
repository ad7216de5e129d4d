//! Supersampled image renderer.
//!
//! Every pixel is split into an `n x n` grid of sub-samples, each traced
//! through the scene and shaded to `max_depth`. Rays that hit nothing add
//! black. The pixel colour is the plain average of its sub-samples.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::shading::shade;
use crate::{Camera, Color, Scene};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Sub-samples per pixel axis; 0 renders like 1
    pub aa_multiplier: u32,
    /// Maximum recursion depth for secondary rays
    pub max_depth: u32,
    /// Vertical field of view in radians
    pub fov: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aa_multiplier: 1,
            max_depth: 4,
            fov: std::f64::consts::FRAC_PI_3,
        }
    }
}

impl RenderConfig {
    pub fn with_aa_multiplier(mut self, aa_multiplier: u32) -> Self {
        self.aa_multiplier = aa_multiplier;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Sub-sample grid size actually used.
    pub fn samples_per_axis(&self) -> u32 {
        self.aa_multiplier.max(1)
    }

    /// Sub-samples averaged into each pixel.
    pub fn samples_per_pixel(&self) -> f64 {
        (self.samples_per_axis() as f64).powi(2)
    }
}

/// Clamp a colour to 8-bit RGBA. No gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Average colour of pixel `(x, y)`.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32) -> Color {
    let config = scene.config();
    let n = config.samples_per_axis();
    let mut pixel_color = Color::ZERO;

    for sy in 0..n {
        for sx in 0..n {
            let ray = camera.get_ray(x, y, sx, sy, n);
            if let Some(hit) = scene.closest_hit(&ray) {
                pixel_color += shade(scene, &hit, config.max_depth);
            }
        }
    }

    pixel_color / config.samples_per_pixel()
}

/// Image buffer for render output, row-major from the top-left pixel.
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to RGBA bytes (for saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color_to_rgba(*color))
            .collect()
    }
}

/// Render the scene to a new `width x height` buffer.
pub fn render(scene: &Scene, width: u32, height: u32) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    render_into(scene, &mut image);
    image
}

/// Render the scene into an existing buffer, overwriting every pixel.
pub fn render_into(scene: &Scene, image: &mut ImageBuffer) {
    let config = scene.config();
    log::info!(
        "Rendering {}x{} ({} entities, {} lights, {}x{} samples, depth {})",
        image.width,
        image.height,
        scene.len(),
        scene.lights().len(),
        config.samples_per_axis(),
        config.samples_per_axis(),
        config.max_depth
    );

    let start = Instant::now();
    let camera = Camera::new(image.width, image.height, config.fov);

    for y in 0..image.height {
        for x in 0..image.width {
            let color = render_pixel(scene, &camera, x, y);
            image.set(x, y, color);
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
}

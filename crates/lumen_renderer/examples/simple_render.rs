//! Simple ray tracer example.
//!
//! Renders a small room with a mirror, a glass sphere and an OBJ
//! tetrahedron, then saves it as a PNG.
//!
//! Run with: cargo run --example simple_render -p lumen_renderer [output.png]

use std::sync::Arc;

use anyhow::Context;
use lumen_core::obj::{parse_obj, VertexTransform};
use lumen_renderer::{
    Color, DVec3, Material, MeshModel, Plane, PointLight, RenderConfig, Scene, Sphere,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

const TETRAHEDRON: &str = "\
# tetrahedron
v 0 0 0
v 1 0 0
v 0.5 0 0.866
v 0.5 0.8 0.289
f 1 2 3
f 1 4 2
f 2 4 3
f 3 4 1
";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "simple_render.png".to_string());

    let scene = build_scene();
    let image = scene.render(WIDTH, HEIGHT);

    let rgba = image::RgbaImage::from_raw(WIDTH, HEIGHT, image.to_rgba())
        .context("image buffer size does not match dimensions")?;
    rgba.save(&output)
        .with_context(|| format!("failed to write {}", output))?;

    log::info!("Saved {}", output);
    Ok(())
}

fn build_scene() -> Scene {
    let config = RenderConfig::default()
        .with_aa_multiplier(3)
        .with_max_depth(5);
    let mut scene = Scene::new(config);

    // Room
    let floor = Arc::new(Material::diffuse(Color::new(0.8, 0.8, 0.75)));
    scene.add_entity(Plane::new(DVec3::new(0.0, -1.0, 0.0), DVec3::Y, floor));
    scene.add_entity(Plane::new(
        DVec3::new(0.0, 0.0, 12.0),
        DVec3::new(0.0, 0.0, -1.0),
        Arc::new(Material::diffuse(Color::new(0.4, 0.5, 0.7))),
    ));
    scene.add_entity(Plane::new(
        DVec3::new(-4.0, 0.0, 0.0),
        DVec3::X,
        Arc::new(Material::reflective(Color::splat(0.9))),
    ));
    scene.add_entity(Plane::new(
        DVec3::new(0.0, 6.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
        Arc::new(Material::emissive(Color::splat(0.15))),
    ));

    // Spheres
    scene.add_entity(Sphere::new(
        DVec3::new(-1.5, 0.0, 7.0),
        1.0,
        Arc::new(Material::diffuse(Color::new(0.9, 0.2, 0.2))),
    ));
    scene.add_entity(Sphere::new(
        DVec3::new(0.3, -0.2, 5.0),
        0.8,
        Arc::new(Material::refractive(Color::new(0.05, 0.02, 0.0), 1.5)),
    ));

    let obj = parse_obj(TETRAHEDRON, VertexTransform::new(DVec3::new(1.5, -1.0, 6.5), 1.2));
    let tetrahedron = MeshModel::new(
        &obj.mesh,
        Arc::new(Material::diffuse(Color::new(0.2, 0.8, 0.3))),
    );
    log::info!("Tetrahedron: {} triangles", tetrahedron.triangle_count());
    scene.add_entity(tetrahedron);

    scene.add_point_light(PointLight::new(DVec3::new(2.0, 5.0, 2.0), Color::splat(0.8)));
    scene.add_point_light(PointLight::new(DVec3::new(-2.0, 4.0, 4.0), Color::splat(0.4)));

    scene
}

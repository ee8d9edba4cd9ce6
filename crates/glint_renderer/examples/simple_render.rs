//! Simple ray tracer example.
//!
//! Renders a small custom scene and saves it to PPM format.

use glint_renderer::{
    render, Camera, Color, DVec3, ImageBuffer, Material, Plane, PointLight, RenderConfig, Scene,
    Sphere,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    // Set up camera
    let camera = Camera::new(
        DVec3::new(0.0, 1.5, 4.0), // position
        DVec3::new(0.0, 0.0, -2.0), // look_at
        50.0,
    );

    let config = RenderConfig::default()
        .with_resolution(640, 360)
        .with_max_depth(6);

    println!(
        "Rendering {}x{} @ depth {}...",
        config.width, config.height, config.max_depth
    );

    // Render
    let start = std::time::Instant::now();
    let image = render(&scene, &camera, config).expect("Invalid render settings");
    println!("Rendered in {:?}", start.elapsed());

    // Save as PPM
    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::with_ambient(Color::splat(0.15));

    // Ground
    scene.add(Plane::new(
        DVec3::new(0.0, -1.0, 0.0),
        DVec3::Y,
        Material::matte(Color::new(0.6, 0.6, 0.55)).with_reflectivity(0.1),
    ));

    // A row of spheres from matte to mirror
    for i in 0..5 {
        let t = i as f64 / 4.0;
        let material = Material::matte(Color::new(0.9 - 0.5 * t, 0.3, 0.2 + 0.6 * t))
            .with_specular(0.6, 16.0 + 112.0 * t)
            .with_reflectivity(t * 0.9);
        scene.add(Sphere::new(DVec3::new(-3.0 + 1.5 * i as f64, -0.4, -2.0), 0.6, material));
    }

    scene.add_light(PointLight::new(DVec3::new(-4.0, 6.0, 3.0), Color::splat(0.9)));
    scene.add_light(PointLight::new(DVec3::new(4.0, 2.0, 1.0), Color::new(0.3, 0.3, 0.45)));

    println!("Created {} objects", scene.len());
    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b, _] = image.get(x, y).to_rgba8();
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

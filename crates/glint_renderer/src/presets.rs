//! Built-in showcase scene.
//!
//! Five spheres of different materials over a grey floor, lit by a white
//! key light and a dimmer bluish fill.

use crate::{Camera, Material, Plane, PointLight, Scene, Sphere};
use glint_math::{Color, DVec3};

/// Field of view of [`showcase_camera`], in degrees.
pub const SHOWCASE_FOV: f64 = 70.0;

/// Build the showcase scene.
pub fn showcase_scene() -> Scene {
    let black = Material {
        color: Color::BLACK,
        ambient: 0.1,
        diffuse: 0.7,
        specular: 0.8,
        shininess: 32.0,
        reflectivity: 0.1,
    };
    let red = Material::matte(Color::new(1.0, 0.0, 0.0))
        .with_specular(0.5, 40.0)
        .with_reflectivity(0.2);
    let green = Material::matte(Color::new(0.0, 1.0, 0.0))
        .with_lighting(0.1, 0.8)
        .with_specular(0.6, 20.0)
        .with_reflectivity(0.3);
    let ground = Material::matte(Color::splat(0.8))
        .with_specular(0.1, 8.0)
        .with_reflectivity(0.2);

    let mut scene = Scene::new();

    scene.add(Sphere::new(DVec3::new(0.0, 1.0, -5.0), 1.0, black));
    scene.add(Sphere::new(DVec3::new(2.0, -0.5, -4.0), 0.5, red));
    scene.add(Sphere::new(DVec3::new(-2.0, 0.5, -6.0), 1.2, green));
    scene.add(Sphere::new(DVec3::new(0.0, 2.5, -3.0), 0.7, Material::mirror()));
    scene.add(Sphere::new(DVec3::new(-1.5, -0.7, -3.0), 0.3, Material::glass()));

    // Floor
    scene.add(Plane::new(DVec3::new(0.0, -1.0, 0.0), DVec3::Y, ground));

    scene.add_light(PointLight::new(DVec3::new(5.0, 5.0, 5.0), Color::WHITE));
    scene.add_light(PointLight::new(
        DVec3::new(-5.0, 3.0, -2.0),
        Color::new(0.5, 0.5, 0.8),
    ));

    log::debug!(
        "Built showcase scene: {} shapes, {} lights",
        scene.len(),
        scene.lights().len()
    );
    scene
}

/// Camera at the origin looking down -Z.
pub fn showcase_camera() -> Camera {
    Camera::new(DVec3::ZERO, DVec3::NEG_Z, SHOWCASE_FOV)
}

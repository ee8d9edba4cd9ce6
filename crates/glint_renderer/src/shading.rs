//! Whitted-style trace and shade.
//!
//! Local Phong lighting with hard shadows from every point light, plus
//! recursive perfect-mirror reflection bounded by `depth`.

use crate::{Hittable, Intersection, Scene};
use glint_math::{reflect, Color, Ray, EPSILON};

/// Compute the color seen along a ray.
///
/// Returns black once `depth` reaches zero; this is the only thing that
/// stops the reflection recursion.
pub fn trace_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth == 0 {
        return Color::BLACK;
    }

    match scene.closest_hit(ray) {
        Some(intersection) => shade(scene, &intersection, ray, depth),
        None => sky_gradient(ray),
    }
}

/// Shade a hit: ambient, then diffuse and specular from every unshadowed
/// light, then the mirror reflection.
///
/// Contributions are summed unclamped and the total is clamped once at the
/// end, so every channel of the result is in `[0, 1]`.
pub fn shade(scene: &Scene, intersection: &Intersection, ray: &Ray, depth: u32) -> Color {
    // An intersection from a different scene has nothing to shade with
    let Some(shape) = scene.shape(intersection.shape) else {
        log::trace!("No shape at index {}", intersection.shape);
        return Color::BLACK;
    };
    let material = shape.material();
    let point = intersection.record.point;
    let normal = intersection.record.normal;

    // Secondary rays start just off the surface
    let offset_origin = point + normal * EPSILON;

    let mut color = material.color * material.ambient * scene.ambient_light();

    for light in scene.lights() {
        let to_light = light.position - point;
        let light_dir = to_light.normalize_or_zero();
        let light_distance = to_light.length();

        let shadow_ray = Ray::new(offset_origin, light_dir);
        if scene.is_occluded(&shadow_ray, light_distance) {
            continue;
        }

        // Lambertian diffuse
        let n_dot_l = normal.dot(light_dir).max(0.0);
        color += material.color * material.diffuse * n_dot_l * light.color;

        // Phong specular
        if material.specular > 0.0 {
            let reflect_dir = reflect(light_dir, normal).normalize_or_zero();
            let view_dir = (-ray.direction()).normalize_or_zero();
            let r_dot_v = reflect_dir.dot(view_dir).max(0.0);
            color += light.color * (material.specular * r_dot_v.powf(material.shininess));
        }
    }

    if material.reflectivity > 0.0 {
        let reflect_dir = reflect(ray.direction(), normal);
        let reflection_ray = Ray::new(offset_origin, reflect_dir);
        let reflected = trace_ray(scene, &reflection_ray, depth.saturating_sub(1));
        color += reflected * material.reflectivity;
    }

    color.clamp()
}

/// Background for rays that hit nothing.
///
/// White looking straight down, sky blue straight up, linear in between.
pub fn sky_gradient(ray: &Ray) -> Color {
    let t = 0.5 * (ray.direction().y + 1.0);
    Color::WHITE.lerp(Color::SKY_BLUE, t)
}

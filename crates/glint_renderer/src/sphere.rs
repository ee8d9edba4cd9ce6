//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{DVec3, Interval, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Only `radius²` enters the hit test, so a negative
    /// radius describes the same surface as its absolute value.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        if ray.is_degenerate() {
            return None;
        }

        // a t^2 + b t + c = 0
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the near root, fall back to the far one when the origin is
        // inside the sphere or within EPSILON of its near surface.
        let mut t = (-b - sqrtd) / (2.0 * a);
        if !Interval::HIT_RANGE.contains(t) {
            t = (-b + sqrtd) / (2.0 * a);
            if !Interval::HIT_RANGE.contains(t) {
                return None;
            }
        }

        let point = ray.at(t);
        Some(HitRecord {
            point,
            normal: (point - self.center).normalize_or_zero(),
            distance: t,
        })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

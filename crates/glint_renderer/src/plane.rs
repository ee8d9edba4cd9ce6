//! Infinite plane primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{DVec3, Interval, Ray, EPSILON};

/// An infinite plane through `point` with a fixed normal.
///
/// The reported normal is always the stored one, whichever side the ray
/// comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: DVec3,
    normal: DVec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here.
    pub fn new(point: DVec3, normal: DVec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let denom = self.normal.dot(ray.direction());
        // Parallel, or nearly so
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !Interval::HIT_RANGE.contains(t) {
            return None;
        }

        Some(HitRecord {
            point: ray.at(t),
            normal: self.normal,
            distance: t,
        })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

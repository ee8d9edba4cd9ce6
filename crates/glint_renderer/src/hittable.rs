//! Hittable trait, HitRecord and the closed set of scene shapes.

use crate::{Material, Plane, Sphere};
use glint_math::{DVec3, Ray};

/// Record of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: DVec3,
    /// Surface normal at the intersection (unit length)
    pub normal: DVec3,
    /// Distance along the ray, never below `EPSILON`
    pub distance: f64,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test the ray against this object.
    ///
    /// Hits closer than `EPSILON` along the ray are never reported; that both
    /// rejects hits behind the origin and keeps secondary rays from hitting
    /// the surface they start on.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// Material used to shade a hit on this object.
    fn material(&self) -> &Material;
}

/// Every kind of shape a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Hittable for Shape {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Plane(plane) => plane.hit(ray),
        }
    }

    #[inline]
    fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
            Shape::Plane(plane) => plane.material(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

/// The nearest hit along a ray, tagged with the shape it belongs to.
///
/// `shape` is an index into [`Scene::shapes`](crate::Scene::shapes); it is
/// only used to look up the material while shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub record: HitRecord,
    pub shape: usize,
}

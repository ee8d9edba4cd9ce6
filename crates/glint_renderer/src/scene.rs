//! Scene container: shapes, point lights and global ambient light.
//!
//! Intersection is an exhaustive linear scan over every shape; there is no
//! acceleration structure.

use crate::{Hittable, Intersection, PointLight, Shape};
use glint_math::{Color, Ray};

/// Ambient light used when none is given explicitly.
pub const DEFAULT_AMBIENT: Color = Color::splat(0.1);

/// Shapes and lights to render, in insertion order.
///
/// Append-only. The renderer only ever borrows a scene immutably.
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    lights: Vec<PointLight>,
    ambient_light: Color,
}

impl Scene {
    /// Create an empty scene with the default ambient light.
    pub fn new() -> Self {
        Self::with_ambient(DEFAULT_AMBIENT)
    }

    /// Create an empty scene with a custom ambient light.
    pub fn with_ambient(ambient_light: Color) -> Self {
        Self {
            shapes: Vec::new(),
            lights: Vec::new(),
            ambient_light,
        }
    }

    /// Add a shape and return its index.
    pub fn add(&mut self, shape: impl Into<Shape>) -> usize {
        let id = self.shapes.len();
        self.shapes.push(shape.into());
        id
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by index.
    pub fn shape(&self, id: usize) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn ambient_light(&self) -> Color {
        self.ambient_light
    }

    /// Get shape count.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find the nearest hit along `ray`.
    ///
    /// On equal distances the shape added first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;

        for (shape, object) in self.shapes.iter().enumerate() {
            if let Some(record) = object.hit(ray) {
                let nearer = closest
                    .as_ref()
                    .map_or(true, |best| record.distance < best.record.distance);
                if nearer {
                    closest = Some(Intersection { record, shape });
                }
            }
        }

        closest
    }

    /// True if any shape is hit closer than `max_distance` along `ray`.
    pub fn is_occluded(&self, ray: &Ray, max_distance: f64) -> bool {
        self.shapes
            .iter()
            .filter_map(|object| object.hit(ray))
            .any(|record| record.distance < max_distance)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

//! Point lights.

use glint_math::{Color, DVec3};

/// Idealized point light.
///
/// No falloff with distance and no area, so shadows are always hard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}

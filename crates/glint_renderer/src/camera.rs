//! Pinhole camera for primary ray generation.

use glint_math::{DVec3, Ray};

/// Camera looking from `position` toward `look_at`.
///
/// The orthonormal basis is derived once on construction. The up hint is
/// only used to find `right`; `up` is then rebuilt from `right` and
/// `forward`, so a hint that is not perpendicular to the view direction is
/// corrected silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: DVec3,
    look_at: DVec3,
    /// Vertical field of view in degrees
    fov: f64,

    // Basis derived from the fields above
    forward: DVec3,
    right: DVec3,
    up: DVec3,
}

impl Camera {
    /// Create a camera with world-up (+Y) as the up hint.
    pub fn new(position: DVec3, look_at: DVec3, fov: f64) -> Self {
        let mut camera = Self {
            position,
            look_at,
            fov,
            forward: DVec3::NEG_Z,
            right: DVec3::X,
            up: DVec3::Y,
        };
        camera.orient(DVec3::Y);
        camera
    }

    /// Re-derive the basis from a different up hint.
    pub fn with_up(mut self, up_hint: DVec3) -> Self {
        self.orient(up_hint);
        self
    }

    fn orient(&mut self, up_hint: DVec3) {
        self.forward = (self.look_at - self.position).normalize_or_zero();
        self.right = self.forward.cross(up_hint).normalize_or_zero();
        self.up = self.right.cross(self.forward).normalize_or_zero();
    }

    /// Generate the primary ray through normalized image coordinates.
    ///
    /// `(u, v)` lie in `[0, 1]` with `(0, 0)` at the top-left of the image.
    /// `v` grows downward while camera-space y grows upward, hence the flip.
    pub fn generate_ray(&self, u: f64, v: f64, aspect_ratio: f64) -> Ray {
        let half_height = (self.fov.to_radians() / 2.0).tan();
        let half_width = half_height * aspect_ratio;

        let x = (2.0 * u - 1.0) * half_width;
        let y = (1.0 - 2.0 * v) * half_height;

        let direction = self.forward + self.right * x + self.up * y;
        Ray::new(self.position, direction)
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn forward(&self) -> DVec3 {
        self.forward
    }

    pub fn right(&self) -> DVec3 {
        self.right
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }
}

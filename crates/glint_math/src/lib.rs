// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
mod ray;
pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;

/// Minimum distance along a ray at which a hit is accepted.
///
/// Also used to push secondary ray origins off the surface they start on.
pub const EPSILON: f64 = 0.001;

/// Mirror `v` about the plane whose normal is `n`.
///
/// Returns `v - 2 (v . n) n`. `n` is expected to be unit length.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - n * (2.0 * v.dot(n))
}

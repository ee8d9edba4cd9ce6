use crate::DVec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized on construction, whatever magnitude the
/// caller passes in. A zero direction stays zero and such a ray hits nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    #[inline]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// True when the direction collapsed to zero on construction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == DVec3::ZERO
    }
}

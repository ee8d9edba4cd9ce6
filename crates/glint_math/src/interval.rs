use crate::EPSILON;

/// A closed range of real values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval [0, 1], the displayable range of a color channel.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    /// Distances along a ray that count as a hit.
    ///
    /// Anything closer than [`EPSILON`] is either behind the origin or the
    /// surface the ray was spawned from.
    pub const HIT_RANGE: Interval = Interval::new(EPSILON, f64::INFINITY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_hit_range() {
        assert!(!Interval::HIT_RANGE.contains(0.0));
        assert!(!Interval::HIT_RANGE.contains(0.0009));
        assert!(Interval::HIT_RANGE.contains(EPSILON));
        assert!(Interval::HIT_RANGE.contains(1e9));
        assert!(!Interval::HIT_RANGE.contains(-1.0));
    }
}

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use crate::Interval;

/// Linear RGB color.
///
/// Channels are unbounded while light contributions are accumulated and are
/// only brought into `[0, 1]` by [`Color::clamp`] or on conversion to bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Top of the sky gradient.
    pub const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

    /// Create a color from its red, green and blue channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Same value on every channel.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Bound each channel independently to `[0, 1]`.
    pub fn clamp(self) -> Self {
        Self::new(
            Interval::UNIT.clamp(self.r),
            Interval::UNIT.clamp(self.g),
            Interval::UNIT.clamp(self.b),
        )
    }

    /// Linear blend: `self` at `t = 0`, `other` at `t = 1`.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Convert to an opaque 8-bit RGBA pixel.
    ///
    /// Channels are clamped and then truncated, not rounded: `0.999` maps to
    /// 254 and only exactly `1.0` reaches 255.
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0) as u8,
            (c.g * 255.0) as u8,
            (c.b * 255.0) as u8,
            255,
        ]
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, s: f64) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

/// Component-wise product, used to filter light by a surface color.
impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Color::new(0.2, 0.4, 0.6);
        let b = Color::new(0.5, 0.5, 2.0);

        assert_eq!(a + b, Color::new(0.7, 0.9, 2.6));
        assert_eq!(b - b, Color::BLACK);
        assert_eq!(a * 2.0, Color::new(0.4, 0.8, 1.2));
        assert_eq!(a * b, Color::new(0.1, 0.2, 1.2));

        let mut acc = Color::BLACK;
        acc += a;
        acc += a;
        assert_eq!(acc, a * 2.0);
    }

    #[test]
    fn test_sum() {
        let total: Color = [Color::splat(0.25); 4].into_iter().sum();
        assert_eq!(total, Color::WHITE);

        let empty: Color = std::iter::empty().sum();
        assert_eq!(empty, Color::BLACK);
    }

    #[test]
    fn test_clamp_is_per_channel() {
        let c = Color::new(-0.5, 0.5, 3.0).clamp();
        assert_eq!(c, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(Color::WHITE.lerp(Color::SKY_BLUE, 0.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp(Color::SKY_BLUE, 1.0), Color::SKY_BLUE);
        assert_eq!(
            Color::BLACK.lerp(Color::WHITE, 0.5),
            Color::splat(0.5)
        );
    }

    #[test]
    fn test_to_rgba8_truncates() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::BLACK.to_rgba8(), [0, 0, 0, 255]);
        // 0.999 * 255 = 254.745, truncated rather than rounded
        assert_eq!(Color::splat(0.999).to_rgba8(), [254, 254, 254, 255]);
        // 0.5 * 255 = 127.5
        assert_eq!(Color::splat(0.5).to_rgba8(), [127, 127, 127, 255]);
    }

    #[test]
    fn test_to_rgba8_clamps_out_of_range() {
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_pod_layout() {
        let colors = [Color::new(1.0, 2.0, 3.0)];
        let raw: &[f64] = bytemuck::cast_slice(&colors);
        assert_eq!(raw, &[1.0, 2.0, 3.0]);
    }
}

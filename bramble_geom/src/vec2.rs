// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal `f32` 2D vector.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector (or point) with `f32` components.
///
/// Plain value semantics: copied, never shared-mutated. Equality is
/// component-wise IEEE-754 equality, with everything that implies
/// (`NaN != NaN`, `-0.0 == 0.0`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a vector from components.
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared magnitude. Cheaper than [`length`][Self::length]; prefer it
    /// for comparisons.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Linear interpolation from `self` to `other` by `t` (`t = 0` is
    /// `self`, `t = 1` is `other`).
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

#[cfg(feature = "std")]
impl Vec2 {
    /// Magnitude.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Scale to unit length. The zero vector is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let mag = self.length();
        if mag == 0.0 { self } else { self / mag }
    }

    /// Shorten the vector to `max` if it is longer than that.
    #[inline]
    pub fn clamp_length(self, max: f32) -> Self {
        if self.length_squared() > max * max {
            self.normalize() * max
        } else {
            self
        }
    }

    /// Unit vector pointing at `angle` radians (measured from the positive
    /// x axis).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Heading angle in radians.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotate by `angle` radians counterclockwise (in a y-up frame).
    #[inline]
    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn squared_metrics() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.length_squared(), 25.0);
        assert_eq!(a.distance_squared(Vec2::ZERO), 25.0);
        assert_eq!(a.dot(Vec2::new(1.0, 0.0)), 3.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, -5.0));
    }

    #[cfg(feature = "std")]
    #[test]
    fn normalize_and_clamp() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);

        let clamped = v.clamp_length(2.5);
        assert!((clamped.length() - 2.5).abs() < 1e-6);
        assert_eq!(v.clamp_length(10.0), v);
    }

    #[cfg(feature = "std")]
    #[test]
    fn angles_round_trip() {
        let v = Vec2::from_angle(0.5);
        assert!((v.angle() - 0.5).abs() < 1e-6);
        assert!((v.length() - 1.0).abs() < 1e-6);

        let r = Vec2::new(1.0, 0.0).rotate(core::f32::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
    }
}

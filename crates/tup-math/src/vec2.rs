//! 2D vector type.
//!
//! The 2D sibling of [`crate::Vec3`], backed by [`crate::ops2`].

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use tup_core::sink::{new, Assign};
use tup_core::{check_len, Result, Tup2fNew, Tup2fR, Tup2fW};

use crate::ops2;
use crate::provider::MathProvider;
use crate::round::RoundMethod;

/// A 2-component `f32` vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Reads the first two values of a slice.
    pub fn from_slice(s: &[f32]) -> Result<Self> {
        check_len(s.len(), 2)?;
        Ok(Self::new(s[0], s[1]))
    }

    /// Boundary-exact linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        ops2::lerp(self, other, t, new())
    }

    /// Cheaper linear interpolation.
    #[inline]
    pub fn fast_lerp(self, other: Self, t: f32) -> Self {
        ops2::fast_lerp(self, other, t, new())
    }

    /// `self + t * rate`.
    #[inline]
    pub fn integrate_linear(self, rate: Self, t: f32) -> Self {
        ops2::integrate_linear(self, rate, t, new())
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        ops2::dot(self, other)
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        ops2::length(self)
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        ops2::length_squared(self)
    }

    /// Unit-length copy. The zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        ops2::normalize(self, new())
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        ops2::abs(self, new())
    }

    /// Component-wise sign, zero and NaN pass through.
    #[inline]
    pub fn signum(self) -> Self {
        ops2::signum(self, new())
    }

    /// Component-wise rounding with the given policy.
    #[inline]
    pub fn round_with(self, method: RoundMethod) -> Self {
        ops2::round_with(self, method, new())
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        ops2::min_vector(self, other, new())
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        ops2::max_vector(self, other, new())
    }

    /// Reflection about the unit vector `normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        ops2::reflect(self, normal, new())
    }

    /// Midpoint of `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        ops2::half_point_between(self, other, new())
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotate_rad(self, angle: f32) -> Self {
        ops2::rotate_rad(self, angle, new())
    }

    /// Counter-clockwise rotation by `angle` degrees.
    #[inline]
    pub fn rotate_deg(self, angle: f32) -> Self {
        ops2::rotate_deg(self, angle, new())
    }

    /// Counter-clockwise rotation by `angle` radians using `math`.
    #[inline]
    pub fn rotate_rad_with<P: MathProvider>(self, angle: f32, math: &P) -> Self {
        ops2::rotate_rad_with(self, angle, math, new())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Tup2fR for Vec2 {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }
}

impl Tup2fW for Vec2 {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        *self = Self::new(x, y);
    }
}

impl Tup2fNew for Vec2 {
    #[inline]
    fn from_components(x: f32, y: f32) -> Self {
        Self::new(x, y)
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ops2::add(self, rhs, new())
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ops2::sub(self, rhs, new())
    }
}

impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        ops2::mul(self, rhs, new())
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        ops2::mul_scalar(self, rhs, new())
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        ops2::mul_scalar(rhs, self, new())
    }
}

impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        ops2::div(self, rhs, new())
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        ops2::div_scalar(self, rhs, new())
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        ops2::negate(self, new())
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        ops2::add(*self, rhs, Assign(self));
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        ops2::sub(*self, rhs, Assign(self));
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> glam::Vec2 {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * b, Vec2::new(3.0, 10.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 13.0);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_vec2_rotate() {
        let r = Vec2::X.rotate_deg(90.0);
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = 1e-6);
        assert_eq!(Vec2::new(3.0, 4.0).rotate_rad(0.0), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_vec2_from_slice() {
        assert_eq!(Vec2::from_slice(&[1.0, 2.0]), Ok(Vec2::new(1.0, 2.0)));
        assert!(Vec2::from_slice(&[1.0]).is_err());
    }

    #[test]
    fn test_vec2_lerp_endpoints() {
        let a = Vec2::new(0.1, 1.0e8);
        let b = Vec2::new(-3.0, 0.7);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.fast_lerp(b, 1.0), b);
    }
}

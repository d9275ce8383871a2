//! 3D vector type.
//!
//! [`Vec3`] is a plain `#[repr(C)]` triple that implements the tuple
//! accessor traits, so it can be passed to every [`crate::ops3`] function
//! and used as an output type. The inherent methods are thin wrappers over
//! those kernel functions.
//!
//! # Usage
//!
//! ```rust
//! use tup_math::Vec3;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::splat(2.0);
//! assert_eq!(a + b, Vec3::new(3.0, 4.0, 5.0));
//! assert_eq!(a.lerp(b, 1.0), b);
//! assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tup_core::sink::{new, Assign};
use tup_core::{check_len, Result, Tup3fNew, Tup3fR, Tup3fW};

use crate::mat4::Mat4Transform;
use crate::ops3;
use crate::provider::MathProvider;
use crate::quat::QuatTransform;
use crate::round::RoundMethod;

/// A 3-component `f32` vector.
///
/// Access components via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use tup_math::Vec3;
///
/// let v = Vec3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v[2], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Reads the first three values of a slice.
    ///
    /// # Errors
    ///
    /// [`tup_core::Error::SliceTooShort`] if `s` has fewer than three values.
    ///
    /// ```rust
    /// use tup_math::Vec3;
    ///
    /// assert_eq!(Vec3::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap(), Vec3::new(1.0, 2.0, 3.0));
    /// assert!(Vec3::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(s: &[f32]) -> Result<Self> {
        check_len(s.len(), 3)?;
        Ok(Self::new(s[0], s[1], s[2]))
    }

    /// Boundary-exact linear interpolation, see [`crate::lerp`].
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        ops3::lerp(self, other, t, new())
    }

    /// Cheaper linear interpolation, see [`crate::fast_lerp`].
    #[inline]
    pub fn fast_lerp(self, other: Self, t: f32) -> Self {
        ops3::fast_lerp(self, other, t, new())
    }

    /// `self + t * rate`.
    #[inline]
    pub fn integrate_linear(self, rate: Self, t: f32) -> Self {
        ops3::integrate_linear(self, rate, t, new())
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        ops3::dot(self, other)
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        ops3::cross(self, other, new())
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        ops3::length(self)
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        ops3::length_squared(self)
    }

    /// Normalizes the vector to unit length.
    ///
    /// The zero vector is not special-cased and yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        ops3::normalize(self, new())
    }

    /// Normalizes using the provider's `sqrt`.
    #[inline]
    pub fn normalize_with<P: MathProvider>(self, math: &P) -> Self {
        ops3::normalize_with(self, math, new())
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        ops3::abs(self, new())
    }

    /// Component-wise sign, zero and NaN pass through.
    #[inline]
    pub fn signum(self) -> Self {
        ops3::signum(self, new())
    }

    /// Component-wise reciprocal.
    #[inline]
    pub fn recip(self) -> Self {
        ops3::inverse(self, new())
    }

    /// Component-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        ops3::floor(self, new())
    }

    /// Component-wise ceiling.
    #[inline]
    pub fn ceil(self) -> Self {
        ops3::ceil(self, new())
    }

    /// Component-wise rounding, ties away from zero.
    #[inline]
    pub fn round(self) -> Self {
        ops3::round(self, new())
    }

    /// Component-wise truncation.
    #[inline]
    pub fn trunc(self) -> Self {
        ops3::trunc(self, new())
    }

    /// Component-wise rounding with the given policy.
    #[inline]
    pub fn round_with(self, method: RoundMethod) -> Self {
        ops3::round_with(self, method, new())
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        ops3::min_vector(self, other, new())
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        ops3::max_vector(self, other, new())
    }

    /// Projection onto the unit vector `target`.
    #[inline]
    pub fn project(self, target: Self) -> Self {
        ops3::project(self, target, new())
    }

    /// Reflection about the unit vector `normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        ops3::reflect(self, normal, new())
    }

    /// `(other - self) / 2`.
    #[inline]
    pub fn half_vector_to(self, other: Self) -> Self {
        ops3::half_vector_to(self, other, new())
    }

    /// Midpoint of `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        ops3::half_point_between(self, other, new())
    }

    /// Rotation about the unit `axis` by `angle` radians.
    #[inline]
    pub fn rotate_rad(self, axis: Self, angle: f32) -> Self {
        ops3::rotate_rad(self, axis, angle, new())
    }

    /// Rotation about the unit `axis` by `angle` degrees.
    #[inline]
    pub fn rotate_deg(self, axis: Self, angle: f32) -> Self {
        ops3::rotate_deg(self, axis, angle, new())
    }

    /// Rotation about the unit `axis` by `angle` radians using `math`.
    #[inline]
    pub fn rotate_rad_with<P: MathProvider>(self, axis: Self, angle: f32, math: &P) -> Self {
        ops3::rotate_rad_with(self, axis, angle, math, new())
    }

    /// Rotation by a quaternion.
    #[inline]
    pub fn transform_quat<Q: QuatTransform + ?Sized>(self, q: &Q) -> Self {
        ops3::transform_quat(self, q, new())
    }

    /// Transforms as a point (translation applied).
    #[inline]
    pub fn transform_point<M: Mat4Transform + ?Sized>(self, m: &M) -> Self {
        ops3::transform_point_mat4(self, m, new())
    }

    /// Transforms as a direction (translation ignored).
    #[inline]
    pub fn transform_vector<M: Mat4Transform + ?Sized>(self, m: &M) -> Self {
        ops3::transform_vector_mat4(self, m, new())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Tup3fR for Vec3 {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    fn z(&self) -> f32 {
        self.z
    }
}

impl Tup3fW for Vec3 {
    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        *self = Self::new(x, y, z);
    }
}

impl Tup3fNew for Vec3 {
    #[inline]
    fn from_components(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ops3::add(self, rhs, new())
    }
}

impl Add<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        ops3::add_scalar(self, rhs, new())
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ops3::sub(self, rhs, new())
    }
}

impl Sub<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        ops3::sub_scalar(self, rhs, new())
    }
}

// component-wise
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        ops3::mul(self, rhs, new())
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        ops3::mul_scalar(self, rhs, new())
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        ops3::mul_scalar(rhs, self, new())
    }
}

// component-wise
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        ops3::div(self, rhs, new())
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        ops3::div_scalar(self, rhs, new())
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        ops3::negate(self, new())
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        ops3::add(*self, rhs, Assign(self));
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        ops3::sub(*self, rhs, Assign(self));
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        ops3::mul_scalar(*self, rhs, Assign(self));
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        ops3::div_scalar(*self, rhs, Assign(self));
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
        assert_eq!(Vec3::splat(0.5), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_assign_ops() {
        let mut v = Vec3::ONE;
        v += Vec3::X;
        v -= Vec3::Y;
        v *= 4.0;
        v /= 2.0;
        assert_eq!(v, Vec3::new(4.0, 0.0, 2.0));
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v[1] = 7.0;
        assert_eq!([v[0], v[1], v[2]], [1.0, 7.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vec3_index_panics() {
        let v = Vec3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_vec3_accessor_traits() {
        let mut v = Vec3::ZERO;
        v.set_component(2, 9.0).unwrap();
        assert_eq!(v.component(2), Ok(9.0));
        assert!(v.component(3).is_err());
        assert!(v.set_component(5, 1.0).is_err());
    }

    #[test]
    fn test_vec3_normalize_zero_unguarded() {
        assert!(Vec3::ZERO.normalize().is_nan());
        assert_abs_diff_eq!(Vec3::new(0.0, 3.0, 4.0).normalize().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_rounding_and_sign() {
        let v = Vec3::new(2.5, -2.5, -0.4);
        assert_eq!(v.ceil(), Vec3::new(3.0, -2.0, 0.0));
        assert_eq!(v.floor(), Vec3::new(2.0, -3.0, -1.0));
        assert_eq!(v.trunc(), Vec3::new(2.0, -2.0, 0.0));
        assert!(v.trunc().z.is_sign_negative());

        let s = Vec3::new(-3.0, -0.0, f32::NAN).signum();
        assert_eq!(s.x, -1.0);
        assert_eq!(s.y.to_bits(), (-0.0f32).to_bits());
        assert!(s.z.is_nan());
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(0.25, -1.0, 8.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g), v);
        assert_eq!(g.cross(glam::Vec3::Y), glam::Vec3::from(v.cross(Vec3::Y)));
    }

    #[test]
    fn test_vec3_rotate() {
        let r = Vec3::X.rotate_deg(Vec3::Z, 90.0);
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = 1e-6);
    }
}

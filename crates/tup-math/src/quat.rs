//! Rotation quaternions.
//!
//! [`Quat`] is a minimal `(x, y, z, w)` quaternion, enough to build
//! rotations and feed them to [`crate::ops3::transform_quat`]. Anything
//! implementing [`QuatTransform`] can be used there, including
//! [`glam::Quat`].
//!
//! # Usage
//!
//! ```rust
//! use std::f32::consts::FRAC_PI_2;
//! use tup_math::{Quat, Vec3};
//!
//! let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
//! let v = q.rotate(Vec3::X);
//! assert!((v - Vec3::Y).length() < 1e-6);
//! ```

use std::ops::Mul;

use tup_core::sink::new;
use tup_core::Tup3fR;

use crate::ops3;

/// Anything that can rotate a 3-component vector like a quaternion does.
pub trait QuatTransform {
    /// Rotates `v`.
    fn transform(&self, v: [f32; 3]) -> [f32; 3];
}

impl<Q: QuatTransform + ?Sized> QuatTransform for &Q {
    #[inline]
    fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        (**self).transform(v)
    }
}

/// Quaternion with vector part `(x, y, z)` and scalar part `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// X of the vector part.
    pub x: f32,
    /// Y of the vector part.
    pub y: f32,
    /// Z of the vector part.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis yields NaN components.
    pub fn from_axis_angle<A: Tup3fR>(axis: A, angle: f32) -> Self {
        let [ax, ay, az]: [f32; 3] = ops3::normalize(axis, new());
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(ax * s, ay * s, az * s, c)
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Negated vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Unit-norm copy. Returns [`Quat::IDENTITY`] for a zero quaternion.
    pub fn normalize(self) -> Self {
        let len = self.length_squared().sqrt();
        if len > 0.0 {
            let inv = 1.0 / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotates a vector by this quaternion.
    ///
    /// Any input accepted by the kernel works; the result keeps the input
    /// type when it can be constructed from components.
    #[inline]
    pub fn rotate<V: Tup3fR + tup_core::Tup3fNew>(self, v: V) -> V {
        ops3::transform_quat_components(v, self.x, self.y, self.z, self.w, new())
    }
}

// Hamilton product, `a * b` applies `b` first
impl Mul for Quat {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl QuatTransform for Quat {
    #[inline]
    fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        ops3::transform_quat_components(v, self.x, self.y, self.z, self.w, new())
    }
}

impl QuatTransform for glam::Quat {
    #[inline]
    fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        self.mul_vec3(glam::Vec3::from_array(v)).to_array()
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_rotation() {
        let v = [1.5f32, -2.0, 0.25];
        assert_eq!(Quat::IDENTITY.rotate(v), v);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let q = Quat::from_axis_angle([0.0f32, 0.0, 2.0], FRAC_PI_2);
        let r = q.rotate([1.0f32, 0.0, 0.0]);
        assert_abs_diff_eq!(r[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r[1], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_composition() {
        let a = Quat::from_axis_angle([0.0f32, 0.0, 1.0], FRAC_PI_2);
        let b = Quat::from_axis_angle([1.0f32, 0.0, 0.0], FRAC_PI_2);
        let v = [0.0f32, 1.0, 0.0];
        let two_step = a.rotate(b.rotate(v));
        let combined = (a * b).rotate(v);
        for i in 0..3 {
            assert_abs_diff_eq!(two_step[i], combined[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_non_unit_uses_inverse() {
        // scaling q must not scale the rotated vector
        let q = Quat::from_axis_angle([0.0f32, 1.0, 0.0], 0.7);
        let scaled = Quat::new(q.x * 3.0, q.y * 3.0, q.z * 3.0, q.w * 3.0);
        let v = [1.0f32, 2.0, 3.0];
        let a = q.rotate(v);
        let b = scaled.rotate(v);
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_matches_glam() {
        let q = Quat::from_axis_angle([1.0f32, 1.0, 0.0], PI / 3.0);
        let g: glam::Quat = q.into();
        let v = [0.3f32, -1.0, 2.0];
        let ours = q.transform(v);
        let theirs = g.transform(v);
        for i in 0..3 {
            assert_abs_diff_eq!(ours[i], theirs[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_normalize_and_conjugate() {
        let q = Quat::new(0.0, 0.0, 3.0, 4.0).normalize();
        assert_abs_diff_eq!(q.length_squared(), 1.0, epsilon = 1e-6);
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);

        let p = q * q.conjugate();
        assert_abs_diff_eq!(p.w, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-6);
    }
}

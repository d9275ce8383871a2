//! 4x4 affine transform matrix.
//!
//! # Convention
//!
//! Matrices are stored **column-major** and multiply **column vectors**,
//! the same layout as [`glam::Mat4`]. The fourth column holds the
//! translation:
//!
//! ```text
//! | c0.x c1.x c2.x c3.x |   | x |
//! | c0.y c1.y c2.y c3.y | * | y |
//! | c0.z c1.z c2.z c3.z |   | z |
//! | c0.w c1.w c2.w c3.w |   | w |
//! ```
//!
//! [`Mat4Transform::transform3d`] uses `w = 1` for points and `w = 0` for
//! directions and drops the resulting `w` without a perspective divide.
//!
//! ```rust
//! use tup_math::{Mat4, Mat4Transform};
//!
//! let m = Mat4::from_translation([1.0, 2.0, 3.0]);
//! assert_eq!(m.transform3d([0.0, 0.0, 0.0], true), [1.0, 2.0, 3.0]);
//! assert_eq!(m.transform3d([0.0, 0.0, 1.0], false), [0.0, 0.0, 1.0]);
//! ```

use std::ops::Mul;

use tup_core::Tup3fR;

use crate::quat::Quat;

/// Anything that can transform 3-component points and directions like a
/// 4x4 matrix.
pub trait Mat4Transform {
    /// Transforms `v` as a point (`is_point`, translation applied) or as a
    /// direction.
    fn transform3d(&self, v: [f32; 3], is_point: bool) -> [f32; 3];
}

impl<M: Mat4Transform + ?Sized> Mat4Transform for &M {
    #[inline]
    fn transform3d(&self, v: [f32; 3], is_point: bool) -> [f32; 3] {
        (**self).transform3d(v, is_point)
    }
}

/// Column-major 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Columns, each `[x, y, z, w]`.
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Pure translation.
    pub fn from_translation<T: Tup3fR>(t: T) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x(), t.y(), t.z(), 1.0];
        m
    }

    /// Non-uniform scale.
    pub fn from_scale<T: Tup3fR>(s: T) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = s.x();
        m.cols[1][1] = s.y();
        m.cols[2][2] = s.z();
        m
    }

    /// Rotation matrix equivalent to the unit quaternion `q`.
    pub fn from_quat(q: Quat) -> Self {
        let Quat { x, y, z, w } = q;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Self::from_cols([
            [1.0 - (yy + zz), xy + wz, xz - wy, 0.0],
            [xy - wz, 1.0 - (xx + zz), yz + wx, 0.0],
            [xz + wy, yz - wx, 1.0 - (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `angle` radians about `axis` (normalized internally).
    pub fn from_axis_angle<A: Tup3fR>(axis: A, angle: f32) -> Self {
        Self::from_quat(Quat::from_axis_angle(axis, angle))
    }

    /// Row `i` as an array.
    #[inline]
    fn row(&self, i: usize) -> [f32; 4] {
        [self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i]]
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Self::from_cols([self.row(0), self.row(1), self.row(2), self.row(3)])
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut cols = [[0.0f32; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            for (r, out) in col.iter_mut().enumerate() {
                let row = self.row(r);
                let rc = rhs.cols[c];
                *out = row[0] * rc[0] + row[1] * rc[1] + row[2] * rc[2] + row[3] * rc[3];
            }
        }
        Self { cols }
    }
}

impl Mat4Transform for Mat4 {
    fn transform3d(&self, v: [f32; 3], is_point: bool) -> [f32; 3] {
        let [c0, c1, c2, c3] = &self.cols;
        let w = if is_point { 1.0 } else { 0.0 };
        let mut out = [0.0f32; 3];
        for (i, o) in out.iter_mut().enumerate() {
            *o = c0[i] * v[0] + c1[i] * v[1] + c2[i] * v[2] + c3[i] * w;
        }
        out
    }
}

impl Mat4Transform for glam::Mat4 {
    #[inline]
    fn transform3d(&self, v: [f32; 3], is_point: bool) -> [f32; 3] {
        let v = glam::Vec3::from_array(v);
        if is_point {
            self.transform_point3(v).to_array()
        } else {
            self.transform_vector3(v).to_array()
        }
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array_2d(&m.cols)
    }
}

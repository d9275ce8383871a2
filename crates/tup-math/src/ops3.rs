//! 3D kernel operations.
//!
//! Every operation is written once, generic over its inputs ([`Tup3fR`])
//! and its destination ([`Sink3`]). Inputs are read into scalars before
//! the sink is touched, so the result may be assigned back to a copy of an
//! input without interference.
//!
//! # Usage
//!
//! ```rust
//! use tup_core::sink::{new, Assign, Emit};
//! use tup_math::{ops3, Vec3};
//!
//! let a = Vec3::new(0.0, 0.0, 0.0);
//! let b = Vec3::new(2.0, 4.0, 6.0);
//!
//! // New value of any constructible type
//! let mid: Vec3 = ops3::lerp(a, b, 0.5, new());
//! assert_eq!(mid, Vec3::new(1.0, 2.0, 3.0));
//!
//! // In-place update
//! let mut v = a;
//! ops3::lerp(v, b, 0.5, Assign(&mut v));
//! assert_eq!(v, mid);
//!
//! // Flat float buffer
//! let mut buf = [0.0f32; 6];
//! ops3::lerp(a, b, 0.5, &mut buf[3..]);
//! assert_eq!(buf, [0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
//!
//! // Arbitrary result through a callback
//! let sum = ops3::lerp(a, b, 0.5, Emit(|x: f32, y: f32, z: f32| x + y + z));
//! assert_eq!(sum, 6.0);
//! ```

use tup_core::{Sink3, Tup3fR};

use crate::interp::{self, DEG_TO_RAD};
use crate::mat4::Mat4Transform;
use crate::provider::{MathProvider, StdMath};
use crate::quat::QuatTransform;
use crate::round::RoundMethod;

#[inline]
fn map<A: Tup3fR, S: Sink3>(v: A, f: impl Fn(f32) -> f32, out: S) -> S::Output {
    let (x, y, z) = (v.x(), v.y(), v.z());
    out.put3(f(x), f(y), f(z))
}

#[inline]
fn zip<A: Tup3fR, B: Tup3fR, S: Sink3>(
    a: A,
    b: B,
    f: impl Fn(f32, f32) -> f32,
    out: S,
) -> S::Output {
    let (ax, ay, az) = (a.x(), a.y(), a.z());
    let (bx, by, bz) = (b.x(), b.y(), b.z());
    out.put3(f(ax, bx), f(ay, by), f(az, bz))
}

// ============================================================================
// Interpolation & integration
// ============================================================================

/// Linear interpolation, `(1 - alpha) * v1 + alpha * v2`.
///
/// `alpha == 0.0` yields `v1` and `alpha == 1.0` yields `v2` bit-exact.
#[inline]
pub fn lerp<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, alpha: f32, out: S) -> S::Output {
    zip(v1, v2, |a, b| interp::lerp(a, b, alpha), out)
}

/// Cheaper linear interpolation, `v1 + alpha * (v2 - v1)`.
///
/// Same exact endpoints as [`lerp`].
#[inline]
pub fn fast_lerp<A: Tup3fR, B: Tup3fR, S: Sink3>(
    v1: A,
    v2: B,
    alpha: f32,
    out: S,
) -> S::Output {
    zip(v1, v2, |a, b| interp::fast_lerp(a, b, alpha), out)
}

/// Linear integration step, `v1 + alpha * v2`, without clamping.
#[inline]
pub fn integrate_linear<A: Tup3fR, B: Tup3fR, S: Sink3>(
    v1: A,
    v2: B,
    alpha: f32,
    out: S,
) -> S::Output {
    zip(v1, v2, |a, b| interp::integrate_linear(a, b, alpha), out)
}

// ============================================================================
// Arithmetic
// ============================================================================

/// `v1 + v2`.
#[inline]
pub fn add<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a + b, out)
}

/// `v + s` for every component.
#[inline]
pub fn add_scalar<A: Tup3fR, S: Sink3>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a + s, out)
}

/// `v1 - v2`.
#[inline]
pub fn sub<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a - b, out)
}

/// `v - s` for every component.
#[inline]
pub fn sub_scalar<A: Tup3fR, S: Sink3>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a - s, out)
}

/// Reverse subtraction, `v2 - v1`.
#[inline]
pub fn rev_sub<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| b - a, out)
}

/// Reverse scalar subtraction, `s - v` for every component.
#[inline]
pub fn rev_sub_scalar<A: Tup3fR, S: Sink3>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| s - a, out)
}

/// Componentwise `v1 * v2`.
#[inline]
pub fn mul<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a * b, out)
}

/// `v * s` for every component.
#[inline]
pub fn mul_scalar<A: Tup3fR, S: Sink3>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a * s, out)
}

/// Componentwise `v1 / v2`. Zero divisors give infinities or NaN.
#[inline]
pub fn div<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a / b, out)
}

/// `v / s` for every component.
#[inline]
pub fn div_scalar<A: Tup3fR, S: Sink3>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a / s, out)
}

/// Reverse division, `v2 / v1`.
#[inline]
pub fn rev_div<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| b / a, out)
}

/// Reverse scalar division, `s / v` for every component.
#[inline]
pub fn rev_div_scalar<A: Tup3fR, S: Sink3>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| s / a, out)
}

/// Unary minus.
#[inline]
pub fn negate<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, |a| -a, out)
}

/// Componentwise reciprocal, `1 / v`.
#[inline]
pub fn inverse<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, |a| 1.0 / a, out)
}

/// Componentwise absolute value.
#[inline]
pub fn abs<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, f32::abs, out)
}

/// Componentwise sign: -1, 1, or the (signed) zero / NaN itself.
#[inline]
pub fn signum<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, interp::signum, out)
}

// ============================================================================
// Metrics
// ============================================================================

/// Dot product.
#[inline]
pub fn dot<A: Tup3fR, B: Tup3fR>(v1: A, v2: B) -> f32 {
    v1.x() * v2.x() + v1.y() * v2.y() + v1.z() * v2.z()
}

/// Squared Euclidean length.
#[inline]
pub fn length_squared<A: Tup3fR>(v: A) -> f32 {
    let (x, y, z) = (v.x(), v.y(), v.z());
    x * x + y * y + z * z
}

/// Euclidean length using the given provider's `sqrt`.
#[inline]
pub fn length_with<A: Tup3fR, P: MathProvider>(v: A, math: &P) -> f32 {
    math.sqrt(length_squared(v))
}

/// Euclidean length.
#[inline]
pub fn length<A: Tup3fR>(v: A) -> f32 {
    length_with(v, &StdMath)
}

/// `v / |v|` using the given provider's `sqrt`.
///
/// The zero vector is not guarded against and yields NaN components.
#[inline]
pub fn normalize_with<A: Tup3fR, P: MathProvider, S: Sink3>(
    v: A,
    math: &P,
    out: S,
) -> S::Output {
    let (x, y, z) = (v.x(), v.y(), v.z());
    let len = math.sqrt(x * x + y * y + z * z);
    out.put3(x / len, y / len, z / len)
}

/// `v / |v|`. The zero vector yields NaN components.
#[inline]
pub fn normalize<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    normalize_with(v, &StdMath, out)
}

// ============================================================================
// Rounding
// ============================================================================

/// Componentwise ceiling.
#[inline]
pub fn ceil<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, f32::ceil, out)
}

/// Componentwise floor.
#[inline]
pub fn floor<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, f32::floor, out)
}

/// Componentwise rounding to nearest, ties away from zero.
#[inline]
pub fn round<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, f32::round, out)
}

/// Componentwise truncation toward zero.
#[inline]
pub fn trunc<A: Tup3fR, S: Sink3>(v: A, out: S) -> S::Output {
    map(v, f32::trunc, out)
}

/// Componentwise rounding with a selectable policy.
#[inline]
pub fn round_with<A: Tup3fR, S: Sink3>(v: A, method: RoundMethod, out: S) -> S::Output {
    map(v, |a| method.apply(a), out)
}

// ============================================================================
// Geometry
// ============================================================================

/// Cross product `v1 × v2`. Not normalized.
#[inline]
pub fn cross<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    let (ax, ay, az) = (v1.x(), v1.y(), v1.z());
    let (bx, by, bz) = (v2.x(), v2.y(), v2.z());
    out.put3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
}

/// Projection of `v` onto `target`, `target * (v · target)`.
///
/// `target` must be unit length; it is not normalized here.
#[inline]
pub fn project<A: Tup3fR, B: Tup3fR, S: Sink3>(v: A, target: B, out: S) -> S::Output {
    let (tx, ty, tz) = (target.x(), target.y(), target.z());
    let d = v.x() * tx + v.y() * ty + v.z() * tz;
    out.put3(tx * d, ty * d, tz * d)
}

/// Reflection of `v` about the surface with unit `normal`,
/// `v - 2 (v · n) n`.
#[inline]
pub fn reflect<A: Tup3fR, B: Tup3fR, S: Sink3>(v: A, normal: B, out: S) -> S::Output {
    let (vx, vy, vz) = (v.x(), v.y(), v.z());
    let (nx, ny, nz) = (normal.x(), normal.y(), normal.z());
    let d2 = 2.0 * (vx * nx + vy * ny + vz * nz);
    out.put3(vx - nx * d2, vy - ny * d2, vz - nz * d2)
}

/// Half of the vector from `v1` to `v2`, `(v2 - v1) / 2`.
#[inline]
pub fn half_vector_to<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| (b - a) * 0.5, out)
}

/// Midpoint of `v1` and `v2`, `(v1 + v2) / 2`.
#[inline]
pub fn half_point_between<A: Tup3fR, B: Tup3fR, S: Sink3>(
    v1: A,
    v2: B,
    out: S,
) -> S::Output {
    zip(v1, v2, |a, b| (a + b) * 0.5, out)
}

/// Componentwise minimum.
///
/// Follows [`f32::min`]: where one side is NaN the other side wins, so
/// NaN only comes out when both components are NaN.
#[inline]
pub fn min_vector<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, f32::min, out)
}

/// Componentwise maximum.
///
/// Follows [`f32::max`]: where one side is NaN the other side wins, so
/// NaN only comes out when both components are NaN.
#[inline]
pub fn max_vector<A: Tup3fR, B: Tup3fR, S: Sink3>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, f32::max, out)
}

// ============================================================================
// Rotation
// ============================================================================

/// Rotates `v` about the unit `axis` by `angle` radians (Rodrigues):
///
/// ```text
/// v cosθ + (axis × v) sinθ + axis (axis · v)(1 - cosθ)
/// ```
///
/// Trigonometry comes from `math`. The axis is not normalized here.
pub fn rotate_rad_with<A, B, P, S>(v: A, axis: B, angle: f32, math: &P, out: S) -> S::Output
where
    A: Tup3fR,
    B: Tup3fR,
    P: MathProvider,
    S: Sink3,
{
    let (vx, vy, vz) = (v.x(), v.y(), v.z());
    let (ax, ay, az) = (axis.x(), axis.y(), axis.z());
    let (sin, cos) = math.sin_cos(angle);

    let k = (ax * vx + ay * vy + az * vz) * (1.0 - cos);
    let (cx, cy, cz) = (ay * vz - az * vy, az * vx - ax * vz, ax * vy - ay * vx);

    out.put3(
        vx * cos + cx * sin + ax * k,
        vy * cos + cy * sin + ay * k,
        vz * cos + cz * sin + az * k,
    )
}

/// [`rotate_rad_with`] using [`StdMath`].
#[inline]
pub fn rotate_rad<A: Tup3fR, B: Tup3fR, S: Sink3>(
    v: A,
    axis: B,
    angle: f32,
    out: S,
) -> S::Output {
    rotate_rad_with(v, axis, angle, &StdMath, out)
}

/// Degree variant of [`rotate_rad_with`]; converts with `angle * π / 180`.
#[inline]
pub fn rotate_deg_with<A, B, P, S>(v: A, axis: B, angle: f32, math: &P, out: S) -> S::Output
where
    A: Tup3fR,
    B: Tup3fR,
    P: MathProvider,
    S: Sink3,
{
    rotate_rad_with(v, axis, angle * DEG_TO_RAD, math, out)
}

/// [`rotate_deg_with`] using [`StdMath`].
#[inline]
pub fn rotate_deg<A: Tup3fR, B: Tup3fR, S: Sink3>(
    v: A,
    axis: B,
    angle: f32,
    out: S,
) -> S::Output {
    rotate_rad_with(v, axis, angle * DEG_TO_RAD, &StdMath, out)
}

// ============================================================================
// Transform delegation
// ============================================================================

/// Rotates `v` by a quaternion through its [`QuatTransform`] contract.
#[inline]
pub fn transform_quat<A: Tup3fR, Q: QuatTransform + ?Sized, S: Sink3>(
    v: A,
    q: &Q,
    out: S,
) -> S::Output {
    let [x, y, z] = q.transform(v.to_array());
    out.put3(x, y, z)
}

/// Rotates `v` by the quaternion `(qx, qy, qz, qw)` given as raw components.
///
/// Evaluates the sandwich product `q * (v, 0) * q⁻¹`, with the vector
/// expanded to a pure quaternion. For a unit quaternion the inverse is the
/// conjugate and the vector length is preserved.
pub fn transform_quat_components<A: Tup3fR, S: Sink3>(
    v: A,
    qx: f32,
    qy: f32,
    qz: f32,
    qw: f32,
    out: S,
) -> S::Output {
    let (vx, vy, vz) = (v.x(), v.y(), v.z());

    // p = q * (v, 0)
    let px = qw * vx + qy * vz - qz * vy;
    let py = qw * vy + qz * vx - qx * vz;
    let pz = qw * vz + qx * vy - qy * vx;
    let pw = -qx * vx - qy * vy - qz * vz;

    // r = p * conj(q) / |q|²
    let inv_norm = 1.0 / (qx * qx + qy * qy + qz * qz + qw * qw);
    let rx = px * qw - pw * qx - py * qz + pz * qy;
    let ry = py * qw - pw * qy - pz * qx + px * qz;
    let rz = pz * qw - pw * qz - px * qy + py * qx;

    out.put3(rx * inv_norm, ry * inv_norm, rz * inv_norm)
}

/// Transforms `v` as a direction (w = 0, translation ignored).
#[inline]
pub fn transform_vector_mat4<A: Tup3fR, M: Mat4Transform + ?Sized, S: Sink3>(
    v: A,
    m: &M,
    out: S,
) -> S::Output {
    let [x, y, z] = m.transform3d(v.to_array(), false);
    out.put3(x, y, z)
}

/// Transforms `v` as a point (w = 1, translation applied).
#[inline]
pub fn transform_point_mat4<A: Tup3fR, M: Mat4Transform + ?Sized, S: Sink3>(
    v: A,
    m: &M,
    out: S,
) -> S::Output {
    let [x, y, z] = m.transform3d(v.to_array(), true);
    out.put3(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;
    use tup_core::sink::{new, Assign, Emit};

    type A3 = [f32; 3];

    #[test]
    fn test_lerp_endpoints() {
        let a = [0.1f32, -7.25, 1.0e-3];
        let b = [3.0f32, 9.5, -2.0];
        let r0: A3 = lerp(a, b, 0.0, new());
        let r1: A3 = lerp(a, b, 1.0, new());
        assert_eq!(r0.map(f32::to_bits), a.map(f32::to_bits));
        assert_eq!(r1.map(f32::to_bits), b.map(f32::to_bits));
    }

    #[test]
    fn test_integrate_linear_extrapolates() {
        let r: A3 = integrate_linear([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], 2.0, new());
        assert_eq!(r, [5.0, 5.0, 5.0]);
        let r: A3 = integrate_linear([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], -1.0, new());
        assert_eq!(r, [-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_reverse_ops() {
        let a = [1.0f32, 2.0, 4.0];
        let b = [8.0f32, 6.0, 2.0];
        let rs: A3 = rev_sub(a, b, new());
        let s: A3 = sub(b, a, new());
        assert_eq!(rs, s);
        let rd: A3 = rev_div(a, b, new());
        let d: A3 = div(b, a, new());
        assert_eq!(rd, d);
        let r: A3 = rev_sub_scalar(a, 10.0, new());
        assert_eq!(r, [9.0, 8.0, 6.0]);
        let r: A3 = rev_div_scalar(a, 8.0, new());
        assert_eq!(r, [8.0, 4.0, 2.0]);
    }

    #[test]
    fn test_division_by_zero() {
        let r: A3 = div_scalar([1.0, -1.0, 0.0], 0.0, new());
        assert_eq!(r[0], f32::INFINITY);
        assert_eq!(r[1], f32::NEG_INFINITY);
        assert!(r[2].is_nan());
        let r: A3 = inverse([0.0, 2.0, -4.0], new());
        assert_eq!(r, [f32::INFINITY, 0.5, -0.25]);
    }

    #[test]
    fn test_normalize() {
        let n: A3 = normalize([3.0, 0.0, 4.0], new());
        assert_abs_diff_eq!(length(n), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n[0], 0.6, epsilon = 1e-6);

        let z: A3 = normalize([0.0, 0.0, 0.0], new());
        assert!(z.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = [1.5f32, -2.0, 0.25];
        let b = [-3.0f32, 0.5, 4.0];
        let ab: A3 = cross(a, b, new());
        let ba: A3 = cross(b, a, new());
        assert_eq!(ab, ba.map(|c| -c));

        let z: A3 = cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], new());
        assert_eq!(z, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_project_and_reflect() {
        let p: A3 = project([3.0, 4.0, 5.0], [0.0, 1.0, 0.0], new());
        assert_eq!(p, [0.0, 4.0, 0.0]);

        // target is not normalized, so the result scales with |t|²
        let p: A3 = project([3.0, 4.0, 5.0], [0.0, 2.0, 0.0], new());
        assert_eq!(p, [0.0, 16.0, 0.0]);

        let r: A3 = reflect([1.0, -1.0, 0.5], [0.0, 1.0, 0.0], new());
        assert_eq!(r, [1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_half_helpers() {
        let h: A3 = half_vector_to([1.0, 1.0, 1.0], [3.0, 5.0, -1.0], new());
        assert_eq!(h, [1.0, 2.0, -1.0]);
        let m: A3 = half_point_between([1.0, 1.0, 1.0], [3.0, 5.0, -1.0], new());
        assert_eq!(m, [2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_min_max_componentwise() {
        let lo: A3 = min_vector([1.0, 5.0, -2.0], [2.0, 3.0, -1.0], new());
        let hi: A3 = max_vector([1.0, 5.0, -2.0], [2.0, 3.0, -1.0], new());
        assert_eq!(lo, [1.0, 3.0, -2.0]);
        assert_eq!(hi, [2.0, 5.0, -1.0]);
    }

    #[test]
    fn test_min_max_nan_loses() {
        let lo: A3 = min_vector([f32::NAN, 1.0, f32::NAN], [2.0, f32::NAN, f32::NAN], new());
        let hi: A3 = max_vector([f32::NAN, 1.0, 0.0], [2.0, f32::NAN, -1.0], new());
        assert_eq!(lo[..2], [2.0, 1.0]);
        assert!(lo[2].is_nan());
        assert_eq!(hi, [2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_ceil_floor_trunc_mixed_sign() {
        let v = [2.5f32, -2.5, -0.4];
        let c: A3 = ceil(v, new());
        let f: A3 = floor(v, new());
        let t: A3 = trunc(v, new());
        assert_eq!(c, [3.0, -2.0, 0.0]);
        assert!(c[2].is_sign_negative());
        assert_eq!(f, [2.0, -3.0, -1.0]);
        assert_eq!(t, [2.0, -2.0, 0.0]);
        assert!(t[2].is_sign_negative());
    }

    #[test]
    fn test_signum_keeps_zero_and_nan() {
        let s: A3 = signum([-3.0, -0.0, f32::NAN], new());
        assert_eq!(s[0].to_bits(), (-1.0f32).to_bits());
        assert_eq!(s[1].to_bits(), (-0.0f32).to_bits());
        assert!(s[2].is_nan());

        let s: A3 = signum([0.0, 7.5, -f32::INFINITY], new());
        assert_eq!(s[0].to_bits(), 0.0f32.to_bits());
        assert_eq!(s[1..], [1.0, -1.0]);
    }

    #[test]
    fn test_rotate_identity_and_quarter_turn() {
        let v = [0.3f32, -1.2, 2.5];
        let axis = [0.0f32, 0.6, 0.8];
        let same: A3 = rotate_rad(v, axis, 0.0, new());
        assert_eq!(same, v);

        let r: A3 = rotate_rad([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], FRAC_PI_2, new());
        assert_abs_diff_eq!(r[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r[1], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r[2], 0.0, epsilon = 1e-6);

        let d: A3 = rotate_deg([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], 90.0, new());
        for i in 0..3 {
            assert_abs_diff_eq!(d[i], r[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_rotate_with_table() {
        let table = crate::TableMath::default();
        let r: A3 = rotate_rad_with([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], 0.4, &table, new());
        let e: A3 = rotate_rad([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], 0.4, new());
        for i in 0..3 {
            assert_abs_diff_eq!(r[i], e[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_quat_components_matches_rodrigues() {
        let axis = [0.0f32, 0.6, 0.8];
        let angle = 1.1f32;
        let (s, c) = (angle * 0.5).sin_cos();
        let v = [0.5f32, -2.0, 1.5];

        let q: A3 = transform_quat_components(v, axis[0] * s, axis[1] * s, axis[2] * s, c, new());
        let r: A3 = rotate_rad(v, axis, angle, new());
        for i in 0..3 {
            assert_abs_diff_eq!(q[i], r[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sinks_agree() {
        let a = [0.3f32, 0.7, -1.1];
        let b = [2.9f32, -0.4, 5.5];

        let built: A3 = fast_lerp(a, b, 0.37, new());

        let mut assigned = a;
        fast_lerp(assigned, b, 0.37, Assign(&mut assigned));

        let mut flat = [0.0f32; 3];
        fast_lerp(a, b, 0.37, &mut flat[..]);

        let emitted = fast_lerp(a, b, 0.37, Emit(|x, y, z| [x, y, z]));

        assert_eq!(built, assigned);
        assert_eq!(built, flat);
        assert_eq!(built, emitted);
    }
}

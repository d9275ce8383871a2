//! 2D kernel operations.
//!
//! The 2D counterpart of [`crate::ops3`]: one generic function per
//! operation, reading through [`Tup2fR`] and writing through [`Sink2`].
//!
//! ```rust
//! use tup_core::sink::new;
//! use tup_math::ops2;
//!
//! let p: [f32; 2] = ops2::fast_lerp([0.0, 0.0], [2.0, 4.0], 0.5, new());
//! assert_eq!(p, [1.0, 2.0]);
//! ```

use tup_core::{Sink2, Tup2fR};

use crate::interp::{self, DEG_TO_RAD};
use crate::provider::{MathProvider, StdMath};
use crate::round::RoundMethod;

#[inline]
fn map<A: Tup2fR, S: Sink2>(v: A, f: impl Fn(f32) -> f32, out: S) -> S::Output {
    let (x, y) = (v.x(), v.y());
    out.put2(f(x), f(y))
}

#[inline]
fn zip<A: Tup2fR, B: Tup2fR, S: Sink2>(
    a: A,
    b: B,
    f: impl Fn(f32, f32) -> f32,
    out: S,
) -> S::Output {
    let (ax, ay) = (a.x(), a.y());
    let (bx, by) = (b.x(), b.y());
    out.put2(f(ax, bx), f(ay, by))
}

// ============================================================================
// Interpolation & integration
// ============================================================================

/// Linear interpolation, `(1 - alpha) * v1 + alpha * v2`, exact at 0 and 1.
#[inline]
pub fn lerp<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, alpha: f32, out: S) -> S::Output {
    zip(v1, v2, |a, b| interp::lerp(a, b, alpha), out)
}

/// Cheaper linear interpolation, `v1 + alpha * (v2 - v1)`, exact at 0 and 1.
#[inline]
pub fn fast_lerp<A: Tup2fR, B: Tup2fR, S: Sink2>(
    v1: A,
    v2: B,
    alpha: f32,
    out: S,
) -> S::Output {
    zip(v1, v2, |a, b| interp::fast_lerp(a, b, alpha), out)
}

/// Linear integration step, `v1 + alpha * v2`.
#[inline]
pub fn integrate_linear<A: Tup2fR, B: Tup2fR, S: Sink2>(
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
pub fn add<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a + b, out)
}

/// `v + s`.
#[inline]
pub fn add_scalar<A: Tup2fR, S: Sink2>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a + s, out)
}

/// `v1 - v2`.
#[inline]
pub fn sub<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a - b, out)
}

/// `v - s`.
#[inline]
pub fn sub_scalar<A: Tup2fR, S: Sink2>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a - s, out)
}

/// `v2 - v1`.
#[inline]
pub fn rev_sub<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| b - a, out)
}

/// `s - v`.
#[inline]
pub fn rev_sub_scalar<A: Tup2fR, S: Sink2>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| s - a, out)
}

/// Componentwise `v1 * v2`.
#[inline]
pub fn mul<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a * b, out)
}

/// `v * s`.
#[inline]
pub fn mul_scalar<A: Tup2fR, S: Sink2>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a * s, out)
}

/// Componentwise `v1 / v2`.
#[inline]
pub fn div<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| a / b, out)
}

/// `v / s`.
#[inline]
pub fn div_scalar<A: Tup2fR, S: Sink2>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| a / s, out)
}

/// `v2 / v1`.
#[inline]
pub fn rev_div<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| b / a, out)
}

/// `s / v`.
#[inline]
pub fn rev_div_scalar<A: Tup2fR, S: Sink2>(v: A, s: f32, out: S) -> S::Output {
    map(v, |a| s / a, out)
}

/// Unary minus.
#[inline]
pub fn negate<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, |a| -a, out)
}

/// `1 / v`.
#[inline]
pub fn inverse<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, |a| 1.0 / a, out)
}

/// Componentwise absolute value.
#[inline]
pub fn abs<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, f32::abs, out)
}

/// Componentwise sign with zero and NaN passthrough.
#[inline]
pub fn signum<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, interp::signum, out)
}

// ============================================================================
// Metrics
// ============================================================================

/// Dot product.
#[inline]
pub fn dot<A: Tup2fR, B: Tup2fR>(v1: A, v2: B) -> f32 {
    v1.x() * v2.x() + v1.y() * v2.y()
}

/// Squared Euclidean length.
#[inline]
pub fn length_squared<A: Tup2fR>(v: A) -> f32 {
    let (x, y) = (v.x(), v.y());
    x * x + y * y
}

/// Euclidean length using the given provider's `sqrt`.
#[inline]
pub fn length_with<A: Tup2fR, P: MathProvider>(v: A, math: &P) -> f32 {
    math.sqrt(length_squared(v))
}

/// Euclidean length.
#[inline]
pub fn length<A: Tup2fR>(v: A) -> f32 {
    length_with(v, &StdMath)
}

/// `v / |v|` using the given provider's `sqrt`. The zero vector yields NaN.
#[inline]
pub fn normalize_with<A: Tup2fR, P: MathProvider, S: Sink2>(
    v: A,
    math: &P,
    out: S,
) -> S::Output {
    let (x, y) = (v.x(), v.y());
    let len = math.sqrt(x * x + y * y);
    out.put2(x / len, y / len)
}

/// `v / |v|`. The zero vector yields NaN.
#[inline]
pub fn normalize<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    normalize_with(v, &StdMath, out)
}

// ============================================================================
// Rounding
// ============================================================================

/// Componentwise ceiling.
#[inline]
pub fn ceil<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, f32::ceil, out)
}

/// Componentwise floor.
#[inline]
pub fn floor<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, f32::floor, out)
}

/// Componentwise rounding, ties away from zero.
#[inline]
pub fn round<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, f32::round, out)
}

/// Componentwise truncation.
#[inline]
pub fn trunc<A: Tup2fR, S: Sink2>(v: A, out: S) -> S::Output {
    map(v, f32::trunc, out)
}

/// Componentwise rounding with a selectable policy.
#[inline]
pub fn round_with<A: Tup2fR, S: Sink2>(v: A, method: RoundMethod, out: S) -> S::Output {
    map(v, |a| method.apply(a), out)
}

// ============================================================================
// Geometry
// ============================================================================

/// Projection onto unit `target`, `target * (v · target)`.
#[inline]
pub fn project<A: Tup2fR, B: Tup2fR, S: Sink2>(v: A, target: B, out: S) -> S::Output {
    let (tx, ty) = (target.x(), target.y());
    let d = v.x() * tx + v.y() * ty;
    out.put2(tx * d, ty * d)
}

/// Reflection about the unit `normal`, `v - 2 (v · n) n`.
#[inline]
pub fn reflect<A: Tup2fR, B: Tup2fR, S: Sink2>(v: A, normal: B, out: S) -> S::Output {
    let (vx, vy) = (v.x(), v.y());
    let (nx, ny) = (normal.x(), normal.y());
    let d2 = 2.0 * (vx * nx + vy * ny);
    out.put2(vx - nx * d2, vy - ny * d2)
}

/// `(v2 - v1) / 2`.
#[inline]
pub fn half_vector_to<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, |a, b| (b - a) * 0.5, out)
}

/// `(v1 + v2) / 2`.
#[inline]
pub fn half_point_between<A: Tup2fR, B: Tup2fR, S: Sink2>(
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
pub fn min_vector<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, f32::min, out)
}

/// Componentwise maximum.
///
/// Follows [`f32::max`]: where one side is NaN the other side wins, so
/// NaN only comes out when both components are NaN.
#[inline]
pub fn max_vector<A: Tup2fR, B: Tup2fR, S: Sink2>(v1: A, v2: B, out: S) -> S::Output {
    zip(v1, v2, f32::max, out)
}

// ============================================================================
// Rotation
// ============================================================================

/// Counter-clockwise rotation about the origin by `angle` radians.
#[inline]
pub fn rotate_rad_with<A: Tup2fR, P: MathProvider, S: Sink2>(
    v: A,
    angle: f32,
    math: &P,
    out: S,
) -> S::Output {
    let (x, y) = (v.x(), v.y());
    let (sin, cos) = math.sin_cos(angle);
    out.put2(x * cos - y * sin, x * sin + y * cos)
}

/// [`rotate_rad_with`] using [`StdMath`].
#[inline]
pub fn rotate_rad<A: Tup2fR, S: Sink2>(v: A, angle: f32, out: S) -> S::Output {
    rotate_rad_with(v, angle, &StdMath, out)
}

/// Degree variant of [`rotate_rad_with`].
#[inline]
pub fn rotate_deg_with<A: Tup2fR, P: MathProvider, S: Sink2>(
    v: A,
    angle: f32,
    math: &P,
    out: S,
) -> S::Output {
    rotate_rad_with(v, angle * DEG_TO_RAD, math, out)
}

/// [`rotate_deg_with`] using [`StdMath`].
#[inline]
pub fn rotate_deg<A: Tup2fR, S: Sink2>(v: A, angle: f32, out: S) -> S::Output {
    rotate_rad_with(v, angle * DEG_TO_RAD, &StdMath, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tup_core::sink::{new, Assign, Emit};

    type A2 = [f32; 2];

    #[test]
    fn test_lerp_midpoint() {
        let l: A2 = lerp([0.0, 0.0], [2.0, 4.0], 0.5, new());
        let f: A2 = fast_lerp([0.0, 0.0], [2.0, 4.0], 0.5, new());
        assert_eq!(l, [1.0, 2.0]);
        assert_eq!(f, [1.0, 2.0]);
    }

    #[test]
    fn test_integrate_linear() {
        let r: A2 = integrate_linear([1.0, 1.0], [2.0, 2.0], 0.0, new());
        assert_eq!(r, [1.0, 1.0]);
        let r: A2 = integrate_linear([1.0, 1.0], [2.0, 2.0], 2.0, new());
        assert_eq!(r, [5.0, 5.0]);
    }

    #[test]
    fn test_identities() {
        let v = [1.25f32, -3.5];
        let r: A2 = add_scalar(v, 0.0, new());
        assert_eq!(r, v);
        let r: A2 = sub(v, v, new());
        assert_eq!(r, [0.0, 0.0]);
        let r: A2 = div_scalar(v, 1.0, new());
        assert_eq!(r, v);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r: A2 = rotate_deg([1.0, 0.0], 90.0, new());
        assert_abs_diff_eq!(r[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r[1], 1.0, epsilon = 1e-6);

        let same: A2 = rotate_rad([2.0, -7.0], 0.0, new());
        assert_eq!(same, [2.0, -7.0]);
    }

    #[test]
    fn test_reflect_and_project() {
        let r: A2 = reflect([1.0, -2.0], [0.0, 1.0], new());
        assert_eq!(r, [1.0, 2.0]);
        let p: A2 = project([3.0, 4.0], [1.0, 0.0], new());
        assert_eq!(p, [3.0, 0.0]);
    }

    #[test]
    fn test_round_with() {
        let r: A2 = round_with([2.5, -2.5], RoundMethod::HalfEven, new());
        assert_eq!(r, [2.0, -2.0]);
        let r: A2 = round([2.5, -2.5], new());
        assert_eq!(r, [3.0, -3.0]);
    }

    #[test]
    fn test_ceil_floor_trunc() {
        let v = [2.5f32, -2.5];
        let c: A2 = ceil(v, new());
        let f: A2 = floor(v, new());
        let t: A2 = trunc(v, new());
        assert_eq!(c, [3.0, -2.0]);
        assert_eq!(f, [2.0, -3.0]);
        assert_eq!(t, [2.0, -2.0]);

        let z: A2 = ceil([-0.4, 0.4], new());
        assert_eq!(z[0].to_bits(), (-0.0f32).to_bits());
        assert_eq!(z[1], 1.0);
    }

    #[test]
    fn test_signum() {
        let s: A2 = signum([-0.0, -3.0], new());
        assert_eq!(s[0].to_bits(), (-0.0f32).to_bits());
        assert_eq!(s[1], -1.0);
        let s: A2 = signum([f32::NAN, 0.25], new());
        assert!(s[0].is_nan());
        assert_eq!(s[1], 1.0);
    }

    #[test]
    fn test_reverse_ops() {
        let a = [1.5f32, -4.0];
        let b = [0.5f32, 2.0];
        let rs: A2 = rev_sub(a, b, new());
        let s: A2 = sub(b, a, new());
        assert_eq!(rs, s);
        let rd: A2 = rev_div(a, b, new());
        let d: A2 = div(b, a, new());
        assert_eq!(rd, d);
        let r: A2 = rev_sub_scalar(a, 10.0, new());
        assert_eq!(r, [8.5, 14.0]);
        let r: A2 = rev_div_scalar([2.0, -4.0], 1.0, new());
        assert_eq!(r, [0.5, -0.25]);
    }

    #[test]
    fn test_negate_inverse_abs() {
        let n: A2 = negate([1.0, -0.0], new());
        assert_eq!(n[0], -1.0);
        assert!(n[1].is_sign_positive());
        let i: A2 = inverse([4.0, 0.0], new());
        assert_eq!(i, [0.25, f32::INFINITY]);
        let a: A2 = abs([-2.0, 3.0], new());
        assert_eq!(a, [2.0, 3.0]);
    }

    #[test]
    fn test_half_helpers_and_min_max() {
        let h: A2 = half_vector_to([1.0, 1.0], [3.0, -1.0], new());
        let m: A2 = half_point_between([1.0, 1.0], [3.0, -1.0], new());
        assert_eq!(h, [1.0, -1.0]);
        assert_eq!(m, [2.0, 0.0]);

        let lo: A2 = min_vector([1.0, 5.0], [2.0, 3.0], new());
        let hi: A2 = max_vector([1.0, 5.0], [2.0, 3.0], new());
        assert_eq!(lo, [1.0, 3.0]);
        assert_eq!(hi, [2.0, 5.0]);
        let lo: A2 = min_vector([f32::NAN, 1.0], [2.0, f32::NAN], new());
        assert_eq!(lo, [2.0, 1.0]);
    }

    #[test]
    fn test_normalize() {
        let n: A2 = normalize([3.0, 4.0], new());
        assert_abs_diff_eq!(length(n), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sinks_agree() {
        let a = (0.1f32, 0.9);
        let b = (-4.0f32, 2.5);

        let built: A2 = lerp(a, b, 0.61, new());
        let mut assigned = a;
        lerp(assigned, b, 0.61, Assign(&mut assigned));
        let mut flat = vec![0.0f32; 2];
        lerp(a, b, 0.61, flat.as_mut_slice());
        let emitted = lerp(a, b, 0.61, Emit(|x, y| [x, y]));

        assert_eq!(built, [assigned.0, assigned.1]);
        assert_eq!(built.as_slice(), flat.as_slice());
        assert_eq!(built, emitted);
    }
}

//! Scalar interpolation and integration.
//!
//! These are the canonical per-component formulas. The 2D/3D kernel
//! operations in [`crate::ops2`] and [`crate::ops3`] apply them to each
//! component, and [`crate::simd`] reproduces them lane by lane.
//!
//! - [`lerp`] - boundary-exact, `(1 - t) * a + t * b`
//! - [`fast_lerp`] - boundary-exact, `a + t * (b - a)`
//! - [`integrate_linear`] - unbounded, `a + t * b`
//!
//! # Usage
//!
//! ```rust
//! use tup_math::{fast_lerp, integrate_linear, lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(fast_lerp(0.0, 10.0, 0.5), 5.0);
//!
//! // Integration extrapolates, `b` is a rate rather than an endpoint
//! assert_eq!(integrate_linear(1.0, 2.0, 2.0), 5.0);
//! ```

/// Multiplier converting degrees to radians (`π / 180`).
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Linear interpolation between two values.
///
/// Returns `a` bit-exact when `t == 0.0` and `b` bit-exact when `t == 1.0`,
/// without touching the arithmetic path. Any other `t` evaluates
///
/// ```text
/// (1 - t) * a + t * b
/// ```
///
/// which rounds differently from [`fast_lerp`].
///
/// # Example
///
/// ```rust
/// use tup_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    let one_minus_t = 1.0 - t;
    one_minus_t * a + t * b
}

/// Cheaper linear interpolation between two values.
///
/// Same exact endpoints as [`lerp`], interior values use
///
/// ```text
/// a + t * (b - a)
/// ```
///
/// One multiplication fewer, at the cost of a less precise result when
/// `a` and `b` differ greatly in magnitude.
#[inline]
pub fn fast_lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    a + t * (b - a)
}

/// Linear integration step: `a + t * b`.
///
/// `b` is a delta or rate and `t` a scale factor with no implied range.
/// No short-circuit is taken, so `t == 1.0` still performs the addition.
///
/// # Example
///
/// ```rust
/// use tup_math::integrate_linear;
///
/// assert_eq!(integrate_linear(1.0, 2.0, 0.0), 1.0);
/// assert_eq!(integrate_linear(1.0, 2.0, -1.5), -2.0);
/// ```
#[inline]
pub fn integrate_linear(a: f32, b: f32, t: f32) -> f32 {
    a + t * b
}

/// Float signum with zero and NaN passthrough.
///
/// Unlike [`f32::signum`], zero maps to zero (keeping its sign bit).
///
/// ```rust
/// use tup_math::signum;
///
/// assert_eq!(signum(-3.5), -1.0);
/// assert_eq!(signum(0.0), 0.0);
/// assert!(signum(-0.0).is_sign_negative());
/// assert!(signum(f32::NAN).is_nan());
/// ```
#[inline]
pub fn signum(x: f32) -> f32 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        1.0f32.copysign(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let (a, b) = (0.1f32, 1.0e8f32);
        assert_eq!(lerp(a, b, 0.0).to_bits(), a.to_bits());
        assert_eq!(lerp(a, b, 1.0).to_bits(), b.to_bits());
        assert_eq!(fast_lerp(a, b, 0.0).to_bits(), a.to_bits());
        assert_eq!(fast_lerp(a, b, 1.0).to_bits(), b.to_bits());

        // NaN at the unused endpoint never leaks through
        assert_eq!(lerp(1.0, f32::NAN, 0.0), 1.0);
        assert_eq!(fast_lerp(f32::NAN, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_lerp_formulas_differ() {
        // (1-t)*a + t*b vs a + t*(b-a) take different rounding paths
        let (a, b, t) = (1.0e8f32, 1.0f32, 0.3f32);
        let precise = (1.0 - t) * a + t * b;
        let cheap = a + t * (b - a);
        assert_eq!(lerp(a, b, t), precise);
        assert_eq!(fast_lerp(a, b, t), cheap);
    }

    #[test]
    fn test_integrate_linear() {
        assert_eq!(integrate_linear(1.0, 2.0, 0.0), 1.0);
        assert_eq!(integrate_linear(1.0, 2.0, 1.0), 3.0);
        assert_eq!(integrate_linear(1.0, 2.0, 2.0), 5.0);
    }

    #[test]
    fn test_signum() {
        assert_eq!(signum(2.0), 1.0);
        assert_eq!(signum(-0.25), -1.0);
        assert_eq!(signum(f32::INFINITY), 1.0);
        assert_eq!(signum(0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(signum(-0.0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_deg_to_rad() {
        assert!((180.0 * DEG_TO_RAD - std::f32::consts::PI).abs() < 1e-6);
    }
}

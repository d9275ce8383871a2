//! Pluggable math functions.
//!
//! Rotation and normalization obtain `sin`, `cos` and `sqrt` from a
//! [`MathProvider`] instead of calling the float intrinsics directly, so
//! callers can trade precision for speed without touching the kernel.
//!
//! - [`StdMath`] - the standard library functions (default)
//! - [`TableMath`] - sine/cosine from a precomputed table with linear
//!   interpolation between entries
//!
//! # Usage
//!
//! ```rust
//! use tup_math::{MathProvider, StdMath, TableMath};
//!
//! let table = TableMath::new(1024);
//! let x = 0.7f32;
//! assert!((table.sin(x) - StdMath.sin(x)).abs() < 1e-4);
//! ```

use std::f64::consts::TAU;

use crate::interp::lerp;

/// Source of the transcendental functions used by the kernel.
pub trait MathProvider {
    /// Sine of `x` (radians).
    fn sin(&self, x: f32) -> f32;

    /// Cosine of `x` (radians).
    fn cos(&self, x: f32) -> f32;

    /// Square root of `x`.
    fn sqrt(&self, x: f32) -> f32;

    /// Sine and cosine of `x` together.
    #[inline]
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        (self.sin(x), self.cos(x))
    }
}

impl<P: MathProvider + ?Sized> MathProvider for &P {
    #[inline]
    fn sin(&self, x: f32) -> f32 {
        (**self).sin(x)
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        (**self).cos(x)
    }

    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        (**self).sqrt(x)
    }

    #[inline]
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        (**self).sin_cos(x)
    }
}

/// Standard library math.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdMath;

impl MathProvider for StdMath {
    #[inline]
    fn sin(&self, x: f32) -> f32 {
        x.sin()
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        x.cos()
    }

    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        x.sin_cos()
    }
}

/// Lookup-table sine and cosine.
///
/// One full period is sampled at `resolution` points (rounded up to a
/// multiple of four so that the quarter-period offset used for cosine is
/// an exact index). Values between samples are linearly interpolated.
///
/// Exact at the table samples, in particular `sin(0) == 0` and
/// `cos(0) == 1`. With the default 4096 entries the absolute error is
/// around `1e-6` over the first period. `sqrt` is not tabulated.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMath {
    // resolution + 1 entries, the last one repeating the first
    table: Vec<f32>,
    resolution: usize,
    steps_per_radian: f32,
}

impl TableMath {
    /// Default number of samples per period.
    pub const DEFAULT_RESOLUTION: usize = 4096;

    /// Builds a table with (at least) `resolution` samples per period.
    pub fn new(resolution: usize) -> Self {
        let resolution = resolution.max(4).next_multiple_of(4);
        let table = (0..=resolution)
            .map(|i| ((i % resolution) as f64 * TAU / resolution as f64).sin() as f32)
            .collect();

        Self {
            table,
            resolution,
            steps_per_radian: (resolution as f64 / TAU) as f32,
        }
    }

    /// Number of samples per period.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Interpolated table value at fractional index `t` (wrapped into one period).
    #[inline]
    fn lookup(&self, t: f32) -> f32 {
        let n = self.resolution as f32;
        let t = t.rem_euclid(n);
        let base = t.floor();
        let frac = t - base;
        let i = (base as usize) % self.resolution;
        lerp(self.table[i], self.table[i + 1], frac)
    }
}

impl Default for TableMath {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESOLUTION)
    }
}

impl MathProvider for TableMath {
    #[inline]
    fn sin(&self, x: f32) -> f32 {
        self.lookup(x * self.steps_per_radian)
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        let quarter = (self.resolution / 4) as f32;
        self.lookup(x * self.steps_per_radian + quarter)
    }

    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        x.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_std_math() {
        assert_eq!(StdMath.sin(0.0), 0.0);
        assert_eq!(StdMath.cos(0.0), 1.0);
        assert_eq!(StdMath.sqrt(16.0), 4.0);
    }

    #[test]
    fn test_table_exact_at_zero() {
        let table = TableMath::default();
        assert_eq!(table.sin(0.0), 0.0);
        assert_eq!(table.cos(0.0), 1.0);
        assert_eq!(table.sin_cos(0.0), (0.0, 1.0));
    }

    #[test]
    fn test_table_accuracy() {
        let table = TableMath::default();
        for i in -200..=200 {
            let x = i as f32 * 0.05;
            assert!((table.sin(x) - x.sin()).abs() < 1e-5, "sin({x})");
            assert!((table.cos(x) - x.cos()).abs() < 1e-5, "cos({x})");
        }
        assert!((table.sin(FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!((table.cos(PI) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_table_resolution_rounding() {
        assert_eq!(TableMath::new(0).resolution(), 4);
        assert_eq!(TableMath::new(10).resolution(), 12);
        assert_eq!(TableMath::new(4096).resolution(), 4096);
    }

    #[test]
    fn test_table_nan() {
        let table = TableMath::new(64);
        assert!(table.sin(f32::NAN).is_nan());
    }

    #[test]
    fn test_provider_by_reference() {
        fn half_angle_sin<P: MathProvider>(p: P, x: f32) -> f32 {
            p.sin(x * 0.5)
        }
        let table = TableMath::new(256);
        assert_eq!(half_angle_sin(&table, 0.0), 0.0);
        assert!((half_angle_sin(StdMath, PI) - 1.0).abs() < 1e-6);
    }
}

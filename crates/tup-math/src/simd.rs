//! SIMD batch interpolation over flat buffers.
//!
//! The functions here apply the scalar formulas from [`crate::interp`] to
//! whole buffers, 8 lanes at a time via `wide::f32x8`, with a scalar tail.
//! Buffers are plain `&[f32]`, so packed `xyzxyz...` point clouds and
//! `xyxy...` 2D data work unchanged.
//!
//! Each lane evaluates exactly the same operations as the scalar function
//! (no fused multiply-add), so results are bit-identical to calling
//! [`crate::lerp`] per element. The `alpha == 0` and `alpha == 1`
//! endpoints copy the matching input.
//!
//! # Example
//!
//! ```rust
//! use tup_math::simd::batch_lerp;
//!
//! let a = vec![0.0; 10];
//! let b = vec![2.0; 10];
//! let mid = batch_lerp(&a, &b, 0.5).unwrap();
//! assert!(mid.iter().all(|&v| v == 1.0));
//! ```

use tup_core::{Error, Result};
use tracing::trace;
use wide::f32x8;

use crate::interp;

const LANES: usize = 8;

#[inline]
fn load(chunk: &[f32]) -> f32x8 {
    let mut buf = [0.0f32; LANES];
    buf.copy_from_slice(chunk);
    f32x8::from(buf)
}

fn check_lengths(a: &[f32], b: &[f32], out: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::length_mismatch(a.len(), b.len()));
    }
    if out.len() != a.len() {
        return Err(Error::length_mismatch(a.len(), out.len()));
    }
    Ok(())
}

/// Runs `wide_fn` over full 8-lane chunks and `scalar_fn` over the tail.
fn zip_into(
    a: &[f32],
    b: &[f32],
    out: &mut [f32],
    wide_fn: impl Fn(f32x8, f32x8) -> f32x8,
    scalar_fn: impl Fn(f32, f32) -> f32,
) {
    let full = a.len() - a.len() % LANES;

    for ((ca, cb), co) in a[..full]
        .chunks_exact(LANES)
        .zip(b[..full].chunks_exact(LANES))
        .zip(out[..full].chunks_exact_mut(LANES))
    {
        co.copy_from_slice(&wide_fn(load(ca), load(cb)).to_array());
    }

    for ((&x, &y), o) in a[full..].iter().zip(&b[full..]).zip(&mut out[full..]) {
        *o = scalar_fn(x, y);
    }
}

/// Copies the exact endpoint for `alpha` 0 or 1. Returns false otherwise.
fn copy_endpoint(a: &[f32], b: &[f32], alpha: f32, out: &mut [f32]) -> bool {
    if alpha == 0.0 {
        out.copy_from_slice(a);
        true
    } else if alpha == 1.0 {
        out.copy_from_slice(b);
        true
    } else {
        false
    }
}

/// Element-wise [`crate::lerp`] of `a` and `b` into `out`.
///
/// # Errors
///
/// [`Error::LengthMismatch`] unless all three buffers have the same length.
pub fn batch_lerp_into(a: &[f32], b: &[f32], alpha: f32, out: &mut [f32]) -> Result<()> {
    check_lengths(a, b, out)?;
    trace!(len = a.len(), alpha, "batch lerp");
    if copy_endpoint(a, b, alpha, out) {
        return Ok(());
    }

    let t = f32x8::splat(alpha);
    let one_minus_t = f32x8::splat(1.0 - alpha);
    zip_into(
        a,
        b,
        out,
        |va, vb| one_minus_t * va + t * vb,
        |x, y| interp::lerp(x, y, alpha),
    );
    Ok(())
}

/// Element-wise [`crate::lerp`], allocating the result.
pub fn batch_lerp(a: &[f32], b: &[f32], alpha: f32) -> Result<Vec<f32>> {
    let mut out = vec![0.0; a.len()];
    batch_lerp_into(a, b, alpha, &mut out)?;
    Ok(out)
}

/// Element-wise [`crate::fast_lerp`] of `a` and `b` into `out`.
pub fn batch_fast_lerp_into(a: &[f32], b: &[f32], alpha: f32, out: &mut [f32]) -> Result<()> {
    check_lengths(a, b, out)?;
    trace!(len = a.len(), alpha, "batch fast lerp");
    if copy_endpoint(a, b, alpha, out) {
        return Ok(());
    }

    let t = f32x8::splat(alpha);
    zip_into(
        a,
        b,
        out,
        |va, vb| va + t * (vb - va),
        |x, y| interp::fast_lerp(x, y, alpha),
    );
    Ok(())
}

/// Element-wise [`crate::fast_lerp`], allocating the result.
pub fn batch_fast_lerp(a: &[f32], b: &[f32], alpha: f32) -> Result<Vec<f32>> {
    let mut out = vec![0.0; a.len()];
    batch_fast_lerp_into(a, b, alpha, &mut out)?;
    Ok(out)
}

/// Element-wise [`crate::integrate_linear`], `out = a + alpha * b`.
///
/// No endpoint shortcut is taken.
pub fn batch_integrate_linear_into(
    a: &[f32],
    b: &[f32],
    alpha: f32,
    out: &mut [f32],
) -> Result<()> {
    check_lengths(a, b, out)?;
    trace!(len = a.len(), alpha, "batch integrate");

    let t = f32x8::splat(alpha);
    zip_into(
        a,
        b,
        out,
        |va, vb| va + t * vb,
        |x, y| interp::integrate_linear(x, y, alpha),
    );
    Ok(())
}

/// Element-wise [`crate::integrate_linear`], allocating the result.
pub fn batch_integrate_linear(a: &[f32], b: &[f32], alpha: f32) -> Result<Vec<f32>> {
    let mut out = vec![0.0; a.len()];
    batch_integrate_linear_into(a, b, alpha, &mut out)?;
    Ok(out)
}

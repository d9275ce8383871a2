//! In-place transforms of packed 3D buffers.
//!
//! Buffers hold `x, y, z` triples back to back. Each triple is read, run
//! through the [`crate::ops3`] kernel and written back through the slice
//! sink. With the `parallel` feature, [`par_transform_points`] and
//! [`par_rotate`] split the work across the Rayon pool.
//!
//! Every function rejects a buffer whose length is not a multiple of three
//! with [`Error::NotPacked`] before touching it.
//!
//! ```rust
//! use tup_math::{batch, Mat4};
//!
//! let mut pts = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! batch::transform_points(&mut pts, &Mat4::from_translation([1.0, 0.0, 0.0])).unwrap();
//! assert_eq!(pts, [1.0, 0.0, 0.0, 2.0, 1.0, 1.0]);
//! ```

use tracing::debug;
use tup_core::{Error, Result};

use crate::mat4::Mat4Transform;
use crate::ops3;
use crate::quat::QuatTransform;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn check_packed(buf: &[f32]) -> Result<()> {
    if buf.len() % 3 != 0 {
        return Err(Error::not_packed(buf.len(), 3));
    }
    Ok(())
}

#[inline]
fn triple(chunk: &[f32]) -> [f32; 3] {
    [chunk[0], chunk[1], chunk[2]]
}

/// Transforms every triple as a point (translation applied).
///
/// # Errors
///
/// [`Error::NotPacked`] if the length is not a multiple of three.
pub fn transform_points<M: Mat4Transform + ?Sized>(buf: &mut [f32], m: &M) -> Result<()> {
    check_packed(buf)?;
    debug!(points = buf.len() / 3, "transform points");
    for chunk in buf.chunks_exact_mut(3) {
        ops3::transform_point_mat4(triple(chunk), m, chunk);
    }
    Ok(())
}

/// Transforms every triple as a direction (translation ignored).
pub fn transform_vectors<M: Mat4Transform + ?Sized>(buf: &mut [f32], m: &M) -> Result<()> {
    check_packed(buf)?;
    debug!(vectors = buf.len() / 3, "transform vectors");
    for chunk in buf.chunks_exact_mut(3) {
        ops3::transform_vector_mat4(triple(chunk), m, chunk);
    }
    Ok(())
}

/// Rotates every triple by a quaternion.
///
/// # Errors
///
/// [`Error::NotPacked`] if the length is not a multiple of three.
pub fn rotate<Q: QuatTransform + ?Sized>(buf: &mut [f32], q: &Q) -> Result<()> {
    check_packed(buf)?;
    debug!(vectors = buf.len() / 3, "rotate");
    for chunk in buf.chunks_exact_mut(3) {
        ops3::transform_quat(triple(chunk), q, chunk);
    }
    Ok(())
}

/// Parallel [`transform_points`].
#[cfg(feature = "parallel")]
pub fn par_transform_points<M: Mat4Transform + Sync + ?Sized>(
    buf: &mut [f32],
    m: &M,
) -> Result<()> {
    check_packed(buf)?;
    debug!(points = buf.len() / 3, "parallel transform points");
    buf.par_chunks_exact_mut(3).for_each(|chunk| {
        ops3::transform_point_mat4(triple(chunk), m, chunk);
    });
    Ok(())
}

/// Parallel [`rotate`].
#[cfg(feature = "parallel")]
pub fn par_rotate<Q: QuatTransform + Sync + ?Sized>(buf: &mut [f32], q: &Q) -> Result<()> {
    check_packed(buf)?;
    debug!(vectors = buf.len() / 3, "parallel rotate");
    buf.par_chunks_exact_mut(3).for_each(|chunk| {
        ops3::transform_quat(triple(chunk), q, chunk);
    });
    Ok(())
}

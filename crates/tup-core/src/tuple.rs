//! Component accessor traits for 2- and 3-float tuples.
//!
//! Kernel functions never require a concrete vector type. They read inputs
//! through [`Tup2fR`]/[`Tup3fR`], and results are written through the
//! [`crate::sink`] adapters, which in turn use [`Tup2fW`]/[`Tup3fW`] for
//! in-place updates and [`Tup2fNew`]/[`Tup3fNew`] for fresh values.
//!
//! # Implementors
//!
//! | Type | Read | Write | New |
//! |------|------|-------|-----|
//! | `[f32; 2]`, `[f32; 3]` | yes | yes | yes |
//! | `(f32, f32)`, `(f32, f32, f32)` | yes | yes | yes |
//! | `glam::Vec2`, `glam::Vec3`, `glam::Vec3A` | yes | yes | yes |
//! | [`SliceTup`] | yes | no | no |
//! | [`SliceTupMut`] | yes | yes | no |
//!
//! # Usage
//!
//! ```rust
//! use tup_core::{SliceTup, Tup3fR, Tup3fW};
//!
//! let points = [0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let second = SliceTup::<3>::at(&points, 3).unwrap();
//! assert_eq!(second.to_array(), [3.0, 4.0, 5.0]);
//!
//! let mut v = [0.0f32; 3];
//! v.set_component(1, 7.0).unwrap();
//! assert_eq!(v, [0.0, 7.0, 0.0]);
//! ```

use crate::error::{check_index, check_len, check_window, Result};

/// Read access to a 2-component float tuple.
pub trait Tup2fR {
    /// X component.
    fn x(&self) -> f32;

    /// Y component.
    fn y(&self) -> f32;

    /// Copies the components into an array.
    #[inline]
    fn to_array(&self) -> [f32; 2] {
        [self.x(), self.y()]
    }

    /// Returns the component at `index` (0 = x, 1 = y).
    ///
    /// Fails with [`crate::Error::InvalidComponent`] for any other index.
    #[inline]
    fn component(&self, index: usize) -> Result<f32> {
        check_index(index, 2)?;
        Ok(if index == 0 { self.x() } else { self.y() })
    }
}

/// Write access to a 2-component float tuple.
pub trait Tup2fW: Tup2fR {
    /// Overwrites both components.
    fn set(&mut self, x: f32, y: f32);

    /// Overwrites the x component.
    #[inline]
    fn set_x(&mut self, x: f32) {
        let y = self.y();
        self.set(x, y);
    }

    /// Overwrites the y component.
    #[inline]
    fn set_y(&mut self, y: f32) {
        let x = self.x();
        self.set(x, y);
    }

    /// Overwrites the component at `index` (0 = x, 1 = y).
    #[inline]
    fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
        check_index(index, 2)?;
        if index == 0 {
            self.set_x(value);
        } else {
            self.set_y(value);
        }
        Ok(())
    }
}

/// Construction of a fresh 2-component value.
pub trait Tup2fNew: Sized {
    /// Builds a value from components.
    fn from_components(x: f32, y: f32) -> Self;
}

/// Read access to a 3-component float tuple.
pub trait Tup3fR {
    /// X component.
    fn x(&self) -> f32;

    /// Y component.
    fn y(&self) -> f32;

    /// Z component.
    fn z(&self) -> f32;

    /// Copies the components into an array.
    #[inline]
    fn to_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// Fails with [`crate::Error::InvalidComponent`] for any other index.
    #[inline]
    fn component(&self, index: usize) -> Result<f32> {
        check_index(index, 3)?;
        Ok(match index {
            0 => self.x(),
            1 => self.y(),
            _ => self.z(),
        })
    }
}

/// Write access to a 3-component float tuple.
pub trait Tup3fW: Tup3fR {
    /// Overwrites all three components.
    fn set(&mut self, x: f32, y: f32, z: f32);

    /// Overwrites the x component.
    #[inline]
    fn set_x(&mut self, x: f32) {
        let (y, z) = (self.y(), self.z());
        self.set(x, y, z);
    }

    /// Overwrites the y component.
    #[inline]
    fn set_y(&mut self, y: f32) {
        let (x, z) = (self.x(), self.z());
        self.set(x, y, z);
    }

    /// Overwrites the z component.
    #[inline]
    fn set_z(&mut self, z: f32) {
        let (x, y) = (self.x(), self.y());
        self.set(x, y, z);
    }

    /// Overwrites the component at `index` (0 = x, 1 = y, 2 = z).
    #[inline]
    fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
        check_index(index, 3)?;
        match index {
            0 => self.set_x(value),
            1 => self.set_y(value),
            _ => self.set_z(value),
        }
        Ok(())
    }
}

/// Construction of a fresh 3-component value.
pub trait Tup3fNew: Sized {
    /// Builds a value from components.
    fn from_components(x: f32, y: f32, z: f32) -> Self;
}

// ============================================================================
// References
// ============================================================================

impl<T: Tup2fR + ?Sized> Tup2fR for &T {
    #[inline]
    fn x(&self) -> f32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f32 {
        (**self).y()
    }
}

impl<T: Tup2fR + ?Sized> Tup2fR for &mut T {
    #[inline]
    fn x(&self) -> f32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f32 {
        (**self).y()
    }
}

impl<T: Tup3fR + ?Sized> Tup3fR for &T {
    #[inline]
    fn x(&self) -> f32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f32 {
        (**self).y()
    }

    #[inline]
    fn z(&self) -> f32 {
        (**self).z()
    }
}

impl<T: Tup3fR + ?Sized> Tup3fR for &mut T {
    #[inline]
    fn x(&self) -> f32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f32 {
        (**self).y()
    }

    #[inline]
    fn z(&self) -> f32 {
        (**self).z()
    }
}

// ============================================================================
// Arrays
// ============================================================================

impl Tup2fR for [f32; 2] {
    #[inline]
    fn x(&self) -> f32 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self[1]
    }
}

impl Tup2fW for [f32; 2] {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        *self = [x, y];
    }
}

impl Tup2fNew for [f32; 2] {
    #[inline]
    fn from_components(x: f32, y: f32) -> Self {
        [x, y]
    }
}

impl Tup3fR for [f32; 3] {
    #[inline]
    fn x(&self) -> f32 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self[1]
    }

    #[inline]
    fn z(&self) -> f32 {
        self[2]
    }
}

impl Tup3fW for [f32; 3] {
    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        *self = [x, y, z];
    }
}

impl Tup3fNew for [f32; 3] {
    #[inline]
    fn from_components(x: f32, y: f32, z: f32) -> Self {
        [x, y, z]
    }
}

// ============================================================================
// Tuples
// ============================================================================

impl Tup2fR for (f32, f32) {
    #[inline]
    fn x(&self) -> f32 {
        self.0
    }

    #[inline]
    fn y(&self) -> f32 {
        self.1
    }
}

impl Tup2fW for (f32, f32) {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        *self = (x, y);
    }
}

impl Tup2fNew for (f32, f32) {
    #[inline]
    fn from_components(x: f32, y: f32) -> Self {
        (x, y)
    }
}

impl Tup3fR for (f32, f32, f32) {
    #[inline]
    fn x(&self) -> f32 {
        self.0
    }

    #[inline]
    fn y(&self) -> f32 {
        self.1
    }

    #[inline]
    fn z(&self) -> f32 {
        self.2
    }
}

impl Tup3fW for (f32, f32, f32) {
    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        *self = (x, y, z);
    }
}

impl Tup3fNew for (f32, f32, f32) {
    #[inline]
    fn from_components(x: f32, y: f32, z: f32) -> Self {
        (x, y, z)
    }
}

// ============================================================================
// glam
// ============================================================================

impl Tup2fR for glam::Vec2 {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }
}

impl Tup2fW for glam::Vec2 {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        *self = glam::Vec2::new(x, y);
    }
}

impl Tup2fNew for glam::Vec2 {
    #[inline]
    fn from_components(x: f32, y: f32) -> Self {
        glam::Vec2::new(x, y)
    }
}

macro_rules! impl_glam_vec3 {
    ($($ty:ty),*) => {$(
        impl Tup3fR for $ty {
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

        impl Tup3fW for $ty {
            #[inline]
            fn set(&mut self, x: f32, y: f32, z: f32) {
                *self = <$ty>::new(x, y, z);
            }
        }

        impl Tup3fNew for $ty {
            #[inline]
            fn from_components(x: f32, y: f32, z: f32) -> Self {
                <$ty>::new(x, y, z)
            }
        }
    )*};
}

// Vec3A is 16-byte aligned but reads and writes the same three lanes
impl_glam_vec3!(glam::Vec3, glam::Vec3A);

// ============================================================================
// Slice views
// ============================================================================

/// Read-only view of `N` consecutive floats inside a flat buffer.
///
/// The length is checked once on construction, so component reads never
/// go out of bounds afterwards.
#[derive(Debug, Clone, Copy)]
pub struct SliceTup<'a, const N: usize> {
    data: &'a [f32],
}

impl<'a, const N: usize> SliceTup<'a, N> {
    /// Views the first `N` floats of `data`.
    #[inline]
    pub fn new(data: &'a [f32]) -> Result<Self> {
        check_len(data.len(), N)?;
        Ok(Self { data: &data[..N] })
    }

    /// Views `N` floats of `data` starting at `offset`.
    ///
    /// A window past the end reports `offset + N` as the required length.
    #[inline]
    pub fn at(data: &'a [f32], offset: usize) -> Result<Self> {
        check_window(data.len(), offset, N)?;
        Ok(Self {
            data: &data[offset..offset + N],
        })
    }
}

impl Tup2fR for SliceTup<'_, 2> {
    #[inline]
    fn x(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self.data[1]
    }
}

impl Tup3fR for SliceTup<'_, 3> {
    #[inline]
    fn x(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self.data[1]
    }

    #[inline]
    fn z(&self) -> f32 {
        self.data[2]
    }
}

/// Mutable view of `N` consecutive floats inside a flat buffer.
#[derive(Debug)]
pub struct SliceTupMut<'a, const N: usize> {
    data: &'a mut [f32],
}

impl<'a, const N: usize> SliceTupMut<'a, N> {
    /// Views the first `N` floats of `data`.
    #[inline]
    pub fn new(data: &'a mut [f32]) -> Result<Self> {
        check_len(data.len(), N)?;
        Ok(Self {
            data: &mut data[..N],
        })
    }

    /// Views `N` floats of `data` starting at `offset`.
    ///
    /// A window past the end reports `offset + N` as the required length.
    #[inline]
    pub fn at(data: &'a mut [f32], offset: usize) -> Result<Self> {
        check_window(data.len(), offset, N)?;
        Ok(Self {
            data: &mut data[offset..offset + N],
        })
    }
}

impl Tup2fR for SliceTupMut<'_, 2> {
    #[inline]
    fn x(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self.data[1]
    }
}

impl Tup2fW for SliceTupMut<'_, 2> {
    #[inline]
    fn set(&mut self, x: f32, y: f32) {
        self.data[0] = x;
        self.data[1] = y;
    }
}

impl Tup3fR for SliceTupMut<'_, 3> {
    #[inline]
    fn x(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self.data[1]
    }

    #[inline]
    fn z(&self) -> f32 {
        self.data[2]
    }
}

impl Tup3fW for SliceTupMut<'_, 3> {
    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        self.data[0] = x;
        self.data[1] = y;
        self.data[2] = z;
    }
}

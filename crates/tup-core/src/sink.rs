//! Result sinks: where a kernel operation delivers its components.
//!
//! Every kernel function computes its result as plain scalars and then hands
//! them to a sink. The sink decides what the call returns:
//!
//! | Sink | Effect | Returns |
//! |------|--------|---------|
//! | [`Assign`] | overwrites an existing value through [`Tup3fW`] | the reference |
//! | [`New<T>`] (see [`new`]) | builds a fresh `T` through [`Tup3fNew`] | `T` |
//! | `&mut [f32]` | overwrites the leading floats of a slice | `()` |
//! | [`Emit`] | calls a closure with the components | closure result |
//!
//! All sinks receive exactly the same components for the same inputs.
//!
//! # Usage
//!
//! ```rust
//! use tup_core::sink::{new, Assign, Emit, Sink3};
//!
//! let mut target = [0.0f32; 3];
//! Assign(&mut target).put3(1.0, 2.0, 3.0);
//! assert_eq!(target, [1.0, 2.0, 3.0]);
//!
//! let fresh: (f32, f32, f32) = new().put3(1.0, 2.0, 3.0);
//! assert_eq!(fresh, (1.0, 2.0, 3.0));
//!
//! let sum = Emit(|x: f32, y: f32, z: f32| x + y + z).put3(1.0, 2.0, 3.0);
//! assert_eq!(sum, 6.0);
//! ```

use std::marker::PhantomData;

use crate::tuple::{Tup2fNew, Tup2fW, Tup3fNew, Tup3fW};

/// Destination for a 2-component result.
pub trait Sink2 {
    /// Value returned once the components are delivered.
    type Output;

    /// Delivers the components.
    fn put2(self, x: f32, y: f32) -> Self::Output;
}

/// Destination for a 3-component result.
pub trait Sink3 {
    /// Value returned once the components are delivered.
    type Output;

    /// Delivers the components.
    fn put3(self, x: f32, y: f32, z: f32) -> Self::Output;
}

/// Writes the result into an existing value.
#[derive(Debug)]
pub struct Assign<'a, T: ?Sized>(pub &'a mut T);

impl<'a, T: Tup2fW + ?Sized> Sink2 for Assign<'a, T> {
    type Output = &'a mut T;

    #[inline]
    fn put2(self, x: f32, y: f32) -> &'a mut T {
        self.0.set(x, y);
        self.0
    }
}

impl<'a, T: Tup3fW + ?Sized> Sink3 for Assign<'a, T> {
    type Output = &'a mut T;

    #[inline]
    fn put3(self, x: f32, y: f32, z: f32) -> &'a mut T {
        self.0.set(x, y, z);
        self.0
    }
}

/// Builds a new value of type `T` from the result.
///
/// Construct with [`new`].
pub struct New<T>(PhantomData<fn() -> T>);

impl<T> std::fmt::Debug for New<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("New")
    }
}

impl<T> Clone for New<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for New<T> {}

impl<T> Default for New<T> {
    fn default() -> Self {
        new()
    }
}

/// Sink that builds a fresh `T`.
///
/// ```rust
/// use tup_core::sink::{new, Sink2};
///
/// let v: [f32; 2] = new().put2(3.0, 4.0);
/// assert_eq!(v, [3.0, 4.0]);
/// ```
#[inline]
pub const fn new<T>() -> New<T> {
    New(PhantomData)
}

impl<T: Tup2fNew> Sink2 for New<T> {
    type Output = T;

    #[inline]
    fn put2(self, x: f32, y: f32) -> T {
        T::from_components(x, y)
    }
}

impl<T: Tup3fNew> Sink3 for New<T> {
    type Output = T;

    #[inline]
    fn put3(self, x: f32, y: f32, z: f32) -> T {
        T::from_components(x, y, z)
    }
}

/// Hands the result to a closure and returns whatever it returns.
#[derive(Debug, Clone, Copy)]
pub struct Emit<F>(pub F);

impl<F, R> Sink2 for Emit<F>
where
    F: FnOnce(f32, f32) -> R,
{
    type Output = R;

    #[inline]
    fn put2(self, x: f32, y: f32) -> R {
        (self.0)(x, y)
    }
}

impl<F, R> Sink3 for Emit<F>
where
    F: FnOnce(f32, f32, f32) -> R,
{
    type Output = R;

    #[inline]
    fn put3(self, x: f32, y: f32, z: f32) -> R {
        (self.0)(x, y, z)
    }
}

// Flat slices: the caller guarantees `len >= dimension`, shorter slices
// panic on the native bounds check.
impl Sink2 for &mut [f32] {
    type Output = ();

    #[inline]
    fn put2(self, x: f32, y: f32) {
        self[0] = x;
        self[1] = y;
    }
}

impl Sink3 for &mut [f32] {
    type Output = ();

    #[inline]
    fn put3(self, x: f32, y: f32, z: f32) {
        self[0] = x;
        self[1] = y;
        self[2] = z;
    }
}

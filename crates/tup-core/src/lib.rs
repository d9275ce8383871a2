//! # tup-core
//!
//! Container contracts for the tup-rs vector math kernel.
//!
//! This crate provides the types every kernel operation is written against:
//!
//! - [`Tup2fR`], [`Tup3fR`] - Read access to float components
//! - [`Tup2fW`], [`Tup3fW`] - In-place component updates
//! - [`Tup2fNew`], [`Tup3fNew`] - Construction of fresh values
//! - [`sink`] - Result sinks (assign, new value, flat slice, callback)
//! - [`Error`] - Contract violations detectable at the container boundary
//!
//! ## Crate Structure
//!
//! ```text
//! tup-core (this crate)
//!    ^
//!    |
//!    +-- tup-math (vectors, kernel operations, quaternions, matrices)
//!           ^
//!           +-- tup-cli
//!           +-- tup-bench
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tup_core::prelude::*;
//!
//! fn midpoint<A: Tup3fR, B: Tup3fR, S: Sink3>(a: &A, b: &B, out: S) -> S::Output {
//!     out.put3(
//!         (a.x() + b.x()) * 0.5,
//!         (a.y() + b.y()) * 0.5,
//!         (a.z() + b.z()) * 0.5,
//!     )
//! }
//!
//! let m: [f32; 3] = midpoint(&[0.0f32, 0.0, 0.0], &(2.0f32, 4.0f32, 6.0f32), new());
//! assert_eq!(m, [1.0, 2.0, 3.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod sink;
pub mod tuple;

// Re-exports for convenience
pub use error::{check_len, check_window, Error, Result};
pub use sink::{Assign, Emit, New, Sink2, Sink3};
pub use tuple::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tup_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sink::{new, Assign, Emit, New, Sink2, Sink3};
    pub use crate::tuple::{
        SliceTup, SliceTupMut, Tup2fNew, Tup2fR, Tup2fW, Tup3fNew, Tup3fR, Tup3fW,
    };
}

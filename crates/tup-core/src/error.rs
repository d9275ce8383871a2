//! Error types for tup-core operations.
//!
//! Arithmetic in this workspace never fails: division by zero and other
//! degenerate inputs follow IEEE-754 and produce infinities or NaN. The
//! [`Error`] enum only covers contract violations that can be detected
//! cheaply at the container boundary:
//!
//! - Indexed component access with an index past the tuple dimension
//! - Building a tuple view over a slice that is too short
//! - Batch operations over flat buffers of different lengths
//! - Packed buffers that do not split into whole tuples
//! - Parsing a rounding method name
//!
//! # Usage
//!
//! ```rust
//! use tup_core::{Error, Result, Tup3fR};
//!
//! fn third(v: &impl Tup3fR) -> Result<f32> {
//!     v.component(2)
//! }
//!
//! assert_eq!(third(&[1.0f32, 2.0, 3.0]).unwrap(), 3.0);
//! assert!(matches!(
//!     [1.0f32, 2.0, 3.0].component(3),
//!     Err(Error::InvalidComponent { index: 3, dim: 3 })
//! ));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::tuple`] - Indexed getters and setters, slice views
//! - `tup-math` - Rounding method parsing

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by tuple containers.
///
/// # Categories
///
/// - **Index errors**: [`InvalidComponent`](Error::InvalidComponent)
/// - **Length errors**: [`SliceTooShort`](Error::SliceTooShort), [`LengthMismatch`](Error::LengthMismatch),
///   [`NotPacked`](Error::NotPacked)
/// - **Parse errors**: [`UnknownRoundMethod`](Error::UnknownRoundMethod)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Component index is not valid for the tuple dimension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tup_core::Error;
    ///
    /// let err = Error::InvalidComponent { index: 4, dim: 3 };
    /// assert!(err.to_string().contains("4"));
    /// ```
    #[error("component index {index} is invalid for a {dim}-component tuple")]
    InvalidComponent {
        /// Requested index
        index: usize,
        /// Tuple dimension
        dim: usize,
    },

    /// Flat slice ends before the requested tuple does.
    ///
    /// `required` is the absolute end of the tuple, `offset + dim`.
    #[error("slice of length {got} is too short, at least {required} components required")]
    SliceTooShort {
        /// Minimum required length
        required: usize,
        /// Actual slice length
        got: usize,
    },

    /// Flat buffers passed to a batch operation differ in length.
    #[error("buffer length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first buffer
        left: usize,
        /// Length of the second buffer
        right: usize,
    },

    /// Packed buffer length is not a whole number of tuples.
    #[error("buffer of length {len} does not split into {stride}-component tuples")]
    NotPacked {
        /// Buffer length
        len: usize,
        /// Tuple dimension
        stride: usize,
    },

    /// Rounding method name was not recognized.
    #[error("unknown rounding method: {name}")]
    UnknownRoundMethod {
        /// Name that failed to parse
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidComponent`] error.
    #[inline]
    pub fn invalid_component(index: usize, dim: usize) -> Self {
        Self::InvalidComponent { index, dim }
    }

    /// Creates an [`Error::SliceTooShort`] error.
    #[inline]
    pub fn slice_too_short(required: usize, got: usize) -> Self {
        Self::SliceTooShort { required, got }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Creates an [`Error::NotPacked`] error.
    #[inline]
    pub fn not_packed(len: usize, stride: usize) -> Self {
        Self::NotPacked { len, stride }
    }

    /// Creates an [`Error::UnknownRoundMethod`] error.
    #[inline]
    pub fn unknown_round_method(name: impl Into<String>) -> Self {
        Self::UnknownRoundMethod { name: name.into() }
    }
}

/// Checks that `index` addresses one of `dim` components.
#[inline]
pub(crate) fn check_index(index: usize, dim: usize) -> Result<()> {
    if index < dim {
        Ok(())
    } else {
        Err(Error::invalid_component(index, dim))
    }
}

/// Checks that a slice of `len` floats can back a `dim`-component tuple.
#[inline]
pub fn check_len(len: usize, dim: usize) -> Result<()> {
    check_window(len, 0, dim)
}

/// Checks that `dim` floats starting at `offset` lie inside `len`.
#[inline]
pub fn check_window(len: usize, offset: usize, dim: usize) -> Result<()> {
    let required = offset.saturating_add(dim);
    if len >= required {
        Ok(())
    } else {
        Err(Error::slice_too_short(required, len))
    }
}

//! # tup-math
//!
//! Vector math kernel over 2D and 3D float tuples.
//!
//! Every operation is a single generic function, written once against the
//! accessor traits and result sinks from [`tup_core`]:
//!
//! - [`ops2`], [`ops3`] - interpolation, arithmetic, rounding, geometry
//!   and rotation
//! - [`lerp`], [`fast_lerp`], [`integrate_linear`] - the scalar formulas
//!   behind them
//! - [`MathProvider`] - pluggable `sin`/`cos`/`sqrt` ([`StdMath`],
//!   [`TableMath`])
//! - [`RoundMethod`] - selectable rounding policy
//! - [`Vec2`], [`Vec3`], [`Quat`], [`Mat4`] - concrete value types
//! - [`simd`], [`batch`] - flat-buffer batch processing
//!
//! # Design
//!
//! Inputs are anything implementing [`tup_core::Tup3fR`] (arrays, tuples,
//! slice views, the vector types here), taken by value or by reference.
//! The destination decides what the call returns:
//!
//! ```text
//! Assign(&mut v)  -> &mut v     (in place)
//! new::<T>()      -> T          (fresh value)
//! &mut [f32]      -> ()         (first N slots of a buffer)
//! Emit(|x, y, z|) -> R          (callback result)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tup_math::prelude::*;
//!
//! let v = Vec3::new(1.0, 0.0, 0.0);
//! let r: [f32; 3] = ops3::rotate_deg(v, Vec3::Z, 90.0, new());
//! assert!((r[1] - 1.0).abs() < 1e-6);
//!
//! let table = TableMath::default();
//! let fast = v.rotate_rad_with(Vec3::Z, 0.5, &table);
//! assert!((fast - v.rotate_rad(Vec3::Z, 0.5)).length() < 1e-5);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for the value types and [`RoundMethod`]
//! - `parallel` - Rayon-backed [`batch`] variants
//!
//! # Dependencies
//!
//! - `glam` - interop for `Vec2`/`Vec3`/`Quat`/`Mat4`
//! - `wide` - portable SIMD for [`simd`]
//! - `tracing` - batch diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat4;
mod provider;
mod quat;
mod round;
mod vec2;
mod vec3;

pub mod batch;
pub mod ops2;
pub mod ops3;
pub mod simd;

pub use interp::*;
pub use mat4::{Mat4, Mat4Transform};
pub use provider::{MathProvider, StdMath, TableMath};
pub use quat::{Quat, QuatTransform};
pub use round::RoundMethod;
pub use vec2::Vec2;
pub use vec3::Vec3;

pub use tup_core;

/// Prelude module for convenient imports.
///
/// Brings in the value types, the kernel modules and the `tup_core`
/// traits and sinks needed to call them.
pub mod prelude {
    pub use crate::{
        Mat4, Mat4Transform, MathProvider, Quat, QuatTransform, RoundMethod, StdMath,
        TableMath, Vec2, Vec3, ops2, ops3,
    };
    pub use tup_core::prelude::*;
}

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec2 as GlamVec2, Vec3 as GlamVec3};
}

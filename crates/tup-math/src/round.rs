//! Selectable rounding policies.
//!
//! [`RoundMethod`] is a strategy applied uniformly to every component by
//! `round_with` in [`crate::ops2`]/[`crate::ops3`] and on the vector types.
//!
//! # Methods
//!
//! | Method | 2.5 | -2.5 | 2.4 |
//! |--------|-----|------|-----|
//! | `Ceil` | 3 | -2 | 3 |
//! | `Floor` | 2 | -3 | 2 |
//! | `Trunc` | 2 | -2 | 2 |
//! | `Away` | 3 | -3 | 3 |
//! | `HalfUp` | 3 | -2 | 2 |
//! | `HalfAway` | 3 | -3 | 2 |
//! | `HalfEven` | 2 | -2 | 2 |
//!
//! # Usage
//!
//! ```rust
//! use tup_math::RoundMethod;
//!
//! let method: RoundMethod = "half-even".parse().unwrap();
//! assert_eq!(method.apply(2.5), 2.0);
//! assert_eq!(RoundMethod::HalfUp.apply(-2.5), -2.0);
//! ```

use std::fmt;
use std::str::FromStr;

use tup_core::{Error, Result};

/// Rounding policy for float components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoundMethod {
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
    /// Toward zero.
    Trunc,
    /// Away from zero.
    Away,
    /// Nearest, ties toward positive infinity.
    HalfUp,
    /// Nearest, ties away from zero ([`f32::round`]).
    #[default]
    HalfAway,
    /// Nearest, ties to even ([`f32::round_ties_even`]).
    HalfEven,
}

impl RoundMethod {
    /// All methods, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Ceil,
        Self::Floor,
        Self::Trunc,
        Self::Away,
        Self::HalfUp,
        Self::HalfAway,
        Self::HalfEven,
    ];

    /// Rounds a single value.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Ceil => x.ceil(),
            Self::Floor => x.floor(),
            Self::Trunc => x.trunc(),
            Self::Away => {
                if x < 0.0 {
                    x.floor()
                } else {
                    x.ceil()
                }
            }
            Self::HalfUp => {
                // x - floor(x) is exact, unlike floor(x + 0.5)
                let f = x.floor();
                if x - f >= 0.5 { f + 1.0 } else { f }
            }
            Self::HalfAway => x.round(),
            Self::HalfEven => x.round_ties_even(),
        }
    }

    /// Canonical name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Trunc => "trunc",
            Self::Away => "away",
            Self::HalfUp => "half-up",
            Self::HalfAway => "half-away",
            Self::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for RoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let method = match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "ceil" | "ceiling" => Self::Ceil,
            "floor" => Self::Floor,
            "trunc" | "truncate" => Self::Trunc,
            "away" | "up" => Self::Away,
            "half-up" => Self::HalfUp,
            "half-away" | "round" | "nearest" => Self::HalfAway,
            "half-even" | "even" => Self::HalfEven,
            _ => return Err(Error::unknown_round_method(s)),
        };
        Ok(method)
    }
}

//! Geometry commands: `normalize`, `cross`, `project`, `reflect`.

use anyhow::{bail, Result};
use clap::Args;
use tracing::debug;
use tup_core::sink::new;
use tup_math::{ops2, ops3};

use super::{parse_pair, parse_tuple, Pair, Tuple};

/// Arguments for single-operand commands.
#[derive(Args, Debug)]
pub struct UnaryArgs {
    /// Input tuple
    #[arg(allow_hyphen_values = true)]
    pub v: String,
}

/// Arguments for two-operand commands.
#[derive(Args, Debug)]
pub struct BinaryArgs {
    /// Input tuple
    #[arg(allow_hyphen_values = true)]
    pub v: String,

    /// Second tuple (axis, target or normal; unit length expected)
    #[arg(allow_hyphen_values = true)]
    pub other: String,
}

/// Run the `normalize` command. The zero vector yields NaN.
pub fn normalize(args: &UnaryArgs) -> Result<Vec<f32>> {
    let out = match parse_tuple(&args.v)? {
        Tuple::Two(v) => {
            let r: [f32; 2] = ops2::normalize(v, new());
            r.to_vec()
        }
        Tuple::Three(v) => {
            let r: [f32; 3] = ops3::normalize(v, new());
            r.to_vec()
        }
    };
    debug!(?out, "normalize");
    Ok(out)
}

/// Run the `cross` command (3D only).
pub fn cross(args: &BinaryArgs) -> Result<Vec<f32>> {
    match parse_pair(&args.v, &args.other)? {
        Pair::Three(a, b) => {
            let r: [f32; 3] = ops3::cross(a, b, new());
            Ok(r.to_vec())
        }
        Pair::Two(..) => bail!("cross requires 3-component tuples"),
    }
}

/// Run the `project` command.
pub fn project(args: &BinaryArgs) -> Result<Vec<f32>> {
    let out = match parse_pair(&args.v, &args.other)? {
        Pair::Two(v, t) => {
            let r: [f32; 2] = ops2::project(v, t, new());
            r.to_vec()
        }
        Pair::Three(v, t) => {
            let r: [f32; 3] = ops3::project(v, t, new());
            r.to_vec()
        }
    };
    Ok(out)
}

/// Run the `reflect` command.
pub fn reflect(args: &BinaryArgs) -> Result<Vec<f32>> {
    let out = match parse_pair(&args.v, &args.other)? {
        Pair::Two(v, n) => {
            let r: [f32; 2] = ops2::reflect(v, n, new());
            r.to_vec()
        }
        Pair::Three(v, n) => {
            let r: [f32; 3] = ops3::reflect(v, n, new());
            r.to_vec()
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(v: &str, other: &str) -> BinaryArgs {
        BinaryArgs {
            v: v.into(),
            other: other.into(),
        }
    }

    #[test]
    fn test_normalize() {
        let r = normalize(&UnaryArgs { v: "3,4".into() }).unwrap();
        assert_eq!(r, [0.6, 0.8]);
    }

    #[test]
    fn test_cross() {
        assert_eq!(cross(&binary("1,0,0", "0,1,0")).unwrap(), [0.0, 0.0, 1.0]);
        assert!(cross(&binary("1,0", "0,1")).is_err());
    }

    #[test]
    fn test_project_and_reflect() {
        assert_eq!(project(&binary("3,4,5", "0,1,0")).unwrap(), [0.0, 4.0, 0.0]);
        assert_eq!(reflect(&binary("1,-1", "0,1")).unwrap(), [1.0, 1.0]);
    }
}

//! `rotate` command.
//!
//! 2D tuples rotate counter-clockwise about the origin; 3D tuples need an
//! `--axis`. The angle is in radians unless `--degrees` is given.

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::debug;
use tup_core::sink::new;
use tup_math::{ops2, ops3, MathProvider, StdMath, TableMath, DEG_TO_RAD};

use super::{parse_tuple, Tuple};

/// Arguments for the `rotate` command.
#[derive(Args, Debug)]
pub struct RotateArgs {
    /// Input tuple
    #[arg(allow_hyphen_values = true)]
    pub v: String,

    /// Rotation angle (radians, or degrees with --degrees)
    #[arg(short, long, allow_hyphen_values = true)]
    pub angle: f32,

    /// Rotation axis for 3D tuples (unit length expected)
    #[arg(long, allow_hyphen_values = true)]
    pub axis: Option<String>,

    /// Interpret the angle in degrees
    #[arg(short, long)]
    pub degrees: bool,

    /// Use lookup-table sine/cosine instead of the standard library
    #[arg(short, long)]
    pub table: bool,

    /// Samples per period for --table
    #[arg(long, default_value_t = TableMath::DEFAULT_RESOLUTION)]
    pub table_size: usize,
}

/// Run the `rotate` command.
pub fn run(args: &RotateArgs) -> Result<Vec<f32>> {
    let angle = if args.degrees {
        args.angle * DEG_TO_RAD
    } else {
        args.angle
    };
    debug!(angle, table = args.table, "rotate");

    if args.table {
        let table = TableMath::new(args.table_size);
        debug!(resolution = table.resolution(), "built sine table");
        rotate_with(args, angle, &table)
    } else {
        rotate_with(args, angle, &StdMath)
    }
}

fn rotate_with<P: MathProvider>(args: &RotateArgs, angle: f32, math: &P) -> Result<Vec<f32>> {
    match parse_tuple(&args.v)? {
        Tuple::Two(v) => {
            if args.axis.is_some() {
                bail!("--axis only applies to 3-component tuples");
            }
            let r: [f32; 2] = ops2::rotate_rad_with(v, angle, math, new());
            Ok(r.to_vec())
        }
        Tuple::Three(v) => {
            let Some(axis) = args.axis.as_deref() else {
                bail!("3D rotation requires --axis");
            };
            let axis = match parse_tuple(axis).context("Invalid --axis")? {
                Tuple::Three(a) => a,
                Tuple::Two(_) => bail!("--axis must have 3 components"),
            };
            let r: [f32; 3] = ops3::rotate_rad_with(v, axis, angle, math, new());
            Ok(r.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &str, angle: f32, axis: Option<&str>) -> RotateArgs {
        RotateArgs {
            v: v.into(),
            angle,
            axis: axis.map(String::from),
            degrees: true,
            table: false,
            table_size: TableMath::DEFAULT_RESOLUTION,
        }
    }

    fn close(a: &[f32], b: &[f32]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_rotate_3d() {
        let r = run(&args("1,0,0", 90.0, Some("0,0,1"))).unwrap();
        assert!(close(&r, &[0.0, 1.0, 0.0]), "{r:?}");
    }

    #[test]
    fn test_rotate_2d_with_table() {
        let mut a = args("1,0", 90.0, None);
        a.table = true;
        let r = run(&a).unwrap();
        assert!(close(&r, &[0.0, 1.0]), "{r:?}");
    }

    #[test]
    fn test_axis_errors() {
        assert!(run(&args("1,0,0", 90.0, None)).is_err());
        assert!(run(&args("1,0", 90.0, Some("0,0,1"))).is_err());
        assert!(run(&args("1,0,0", 90.0, Some("0,1"))).is_err());
    }
}

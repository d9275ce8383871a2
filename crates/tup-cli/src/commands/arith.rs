//! `arith` command: componentwise arithmetic.
//!
//! The right operand may be a tuple of the same dimension or a single
//! scalar, e.g. `tup arith mul 1,2,3 2`.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;
use tup_core::sink::new;
use tup_math::{ops2, ops3};

use super::{parse_pair, parse_tuple, Pair, Tuple};

/// Arithmetic operator.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// b - a
    RevSub,
    /// a * b
    Mul,
    /// a / b
    Div,
    /// b / a
    RevDiv,
}

/// Arguments for the `arith` command.
#[derive(Args, Debug)]
pub struct ArithArgs {
    /// Operator
    #[arg(value_enum)]
    pub op: Op,

    /// Left tuple
    #[arg(allow_hyphen_values = true)]
    pub left: String,

    /// Right tuple or scalar
    #[arg(allow_hyphen_values = true)]
    pub right: String,
}

macro_rules! apply {
    ($ops:ident, $op:expr, $a:expr, $b:expr) => {
        match $op {
            Op::Add => $ops::add($a, $b, new()),
            Op::Sub => $ops::sub($a, $b, new()),
            Op::RevSub => $ops::rev_sub($a, $b, new()),
            Op::Mul => $ops::mul($a, $b, new()),
            Op::Div => $ops::div($a, $b, new()),
            Op::RevDiv => $ops::rev_div($a, $b, new()),
        }
    };
}

macro_rules! apply_scalar {
    ($ops:ident, $op:expr, $a:expr, $s:expr) => {
        match $op {
            Op::Add => $ops::add_scalar($a, $s, new()),
            Op::Sub => $ops::sub_scalar($a, $s, new()),
            Op::RevSub => $ops::rev_sub_scalar($a, $s, new()),
            Op::Mul => $ops::mul_scalar($a, $s, new()),
            Op::Div => $ops::div_scalar($a, $s, new()),
            Op::RevDiv => $ops::rev_div_scalar($a, $s, new()),
        }
    };
}

/// Run the `arith` command.
pub fn run(args: &ArithArgs) -> Result<Vec<f32>> {
    debug!(op = ?args.op, "arith");

    if !args.right.contains(',') {
        let s: f32 = args
            .right
            .trim()
            .parse()
            .with_context(|| format!("Invalid scalar '{}'", args.right))?;
        let out = match parse_tuple(&args.left)? {
            Tuple::Two(a) => {
                let r: [f32; 2] = apply_scalar!(ops2, args.op, a, s);
                r.to_vec()
            }
            Tuple::Three(a) => {
                let r: [f32; 3] = apply_scalar!(ops3, args.op, a, s);
                r.to_vec()
            }
        };
        return Ok(out);
    }

    let out = match parse_pair(&args.left, &args.right)? {
        Pair::Two(a, b) => {
            let r: [f32; 2] = apply!(ops2, args.op, a, b);
            r.to_vec()
        }
        Pair::Three(a, b) => {
            let r: [f32; 3] = apply!(ops3, args.op, a, b);
            r.to_vec()
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arith(op: Op, left: &str, right: &str) -> Result<Vec<f32>> {
        run(&ArithArgs {
            op,
            left: left.into(),
            right: right.into(),
        })
    }

    #[test]
    fn test_tuple_operands() {
        assert_eq!(arith(Op::Add, "1,2,3", "1,1,1").unwrap(), [2.0, 3.0, 4.0]);
        assert_eq!(arith(Op::RevSub, "1,2", "4,4").unwrap(), [3.0, 2.0]);
        assert_eq!(arith(Op::RevDiv, "2,4", "1,1").unwrap(), [0.5, 0.25]);
    }

    #[test]
    fn test_scalar_operand() {
        assert_eq!(arith(Op::Mul, "1,2,3", "2").unwrap(), [2.0, 4.0, 6.0]);
        assert_eq!(arith(Op::RevSub, "1,2", "10").unwrap(), [9.0, 8.0]);
        assert!(arith(Op::Div, "1,2", "two").is_err());
    }
}

//! CLI command implementations.
//!
//! Every command parses its tuples, runs one kernel operation and returns
//! the resulting components; printing is shared in [`print_result`].

pub mod arith;
pub mod geometry;
pub mod interp;
pub mod rotate;
pub mod round;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// A parsed command-line tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tuple {
    /// `x,y`
    Two([f32; 2]),
    /// `x,y,z`
    Three([f32; 3]),
}

impl Tuple {
    /// Number of components.
    pub fn dim(&self) -> usize {
        match self {
            Tuple::Two(_) => 2,
            Tuple::Three(_) => 3,
        }
    }
}

/// Parses `"x,y"` or `"x,y,z"`; whitespace around components is ignored.
pub fn parse_tuple(s: &str) -> Result<Tuple> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid component '{}' in '{}'", part.trim(), s))
        })
        .collect::<Result<Vec<f32>>>()?;

    match values.as_slice() {
        &[x, y] => Ok(Tuple::Two([x, y])),
        &[x, y, z] => Ok(Tuple::Three([x, y, z])),
        _ => bail!("Expected 2 or 3 components, got {} in '{}'", values.len(), s),
    }
}

/// Two operands of the same dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pair {
    /// Two 2D operands.
    Two([f32; 2], [f32; 2]),
    /// Two 3D operands.
    Three([f32; 3], [f32; 3]),
}

/// Parses two tuples that must share a dimension.
pub fn parse_pair(a: &str, b: &str) -> Result<Pair> {
    let ta = parse_tuple(a).context("First operand")?;
    let tb = parse_tuple(b).context("Second operand")?;
    debug!(left = ta.dim(), right = tb.dim(), "parsed operands");
    match (ta, tb) {
        (Tuple::Two(x), Tuple::Two(y)) => Ok(Pair::Two(x, y)),
        (Tuple::Three(x), Tuple::Three(y)) => Ok(Pair::Three(x, y)),
        _ => bail!(
            "Dimension mismatch: '{}' has {} components, '{}' has {}",
            a,
            ta.dim(),
            b,
            tb.dim()
        ),
    }
}

/// Prints a result as `x, y[, z]` or, with `json`, as a JSON object.
pub fn print_result(op: &str, values: &[f32], json: bool) -> Result<()> {
    println!("{}", format_result(op, values, json)?);
    Ok(())
}

fn format_result(op: &str, values: &[f32], json: bool) -> Result<String> {
    if json {
        let doc = serde_json::json!({ "op": op, "result": values });
        return serde_json::to_string(&doc).context("Failed to encode JSON");
    }
    Ok(values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tuple() {
        assert_eq!(parse_tuple("1,2").unwrap(), Tuple::Two([1.0, 2.0]));
        assert_eq!(parse_tuple(" 1.5, -2 ,3e2").unwrap(), Tuple::Three([1.5, -2.0, 300.0]));
        assert!(parse_tuple("1").is_err());
        assert!(parse_tuple("1,2,3,4").is_err());
        assert!(parse_tuple("1,x").is_err());
    }

    #[test]
    fn test_parse_pair_dimension_mismatch() {
        assert!(parse_pair("1,2", "1,2,3").is_err());
        assert_eq!(parse_pair("1,2", "3,4").unwrap(), Pair::Two([1.0, 2.0], [3.0, 4.0]));
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result("add", &[1.0, 2.5], false).unwrap(), "1, 2.5");
        assert_eq!(
            format_result("add", &[1.0, 2.5], true).unwrap(),
            r#"{"op":"add","result":[1.0,2.5]}"#
        );
    }
}

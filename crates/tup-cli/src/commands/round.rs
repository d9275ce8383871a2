//! `round` command.

use anyhow::Result;
use clap::Args;
use tracing::debug;
use tup_core::sink::new;
use tup_math::{ops2, ops3, RoundMethod};

use super::{parse_tuple, Tuple};

/// Arguments for the `round` command.
#[derive(Args, Debug)]
pub struct RoundArgs {
    /// Input tuple
    #[arg(allow_hyphen_values = true)]
    pub v: String,

    /// Rounding method: ceil, floor, trunc, away, half-up, half-away, half-even
    #[arg(short, long, default_value_t = RoundMethod::HalfAway)]
    pub method: RoundMethod,
}

/// Run the `round` command.
pub fn run(args: &RoundArgs) -> Result<Vec<f32>> {
    debug!(method = %args.method, "round");
    let out = match parse_tuple(&args.v)? {
        Tuple::Two(v) => {
            let r: [f32; 2] = ops2::round_with(v, args.method, new());
            r.to_vec()
        }
        Tuple::Three(v) => {
            let r: [f32; 3] = ops3::round_with(v, args.method, new());
            r.to_vec()
        }
    };
    Ok(out)
}

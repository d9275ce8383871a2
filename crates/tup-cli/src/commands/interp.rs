//! Interpolation commands: `lerp`, `fast-lerp`, `integrate`.

use anyhow::Result;
use clap::Args;
use tracing::debug;
use tup_core::sink::new;
use tup_math::{ops2, ops3};

use super::{parse_pair, Pair};

/// Arguments shared by the interpolation commands.
#[derive(Args, Debug)]
pub struct InterpArgs {
    /// Start tuple (or base for `integrate`), e.g. `0,0,0`
    #[arg(allow_hyphen_values = true)]
    pub from: String,

    /// End tuple (or rate for `integrate`)
    #[arg(allow_hyphen_values = true)]
    pub to: String,

    /// Interpolation factor
    #[arg(short, long, allow_hyphen_values = true)]
    pub alpha: f32,
}

/// Which interpolation formula to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `(1 - a) * from + a * to`
    Lerp,
    /// `from + a * (to - from)`
    FastLerp,
    /// `from + a * to`
    Integrate,
}

/// Run an interpolation command.
pub fn run(args: &InterpArgs, mode: Mode) -> Result<Vec<f32>> {
    let pair = parse_pair(&args.from, &args.to)?;
    debug!(?mode, alpha = args.alpha, "interpolate");
    let t = args.alpha;

    let out = match pair {
        Pair::Two(a, b) => {
            let r: [f32; 2] = match mode {
                Mode::Lerp => ops2::lerp(a, b, t, new()),
                Mode::FastLerp => ops2::fast_lerp(a, b, t, new()),
                Mode::Integrate => ops2::integrate_linear(a, b, t, new()),
            };
            r.to_vec()
        }
        Pair::Three(a, b) => {
            let r: [f32; 3] = match mode {
                Mode::Lerp => ops3::lerp(a, b, t, new()),
                Mode::FastLerp => ops3::fast_lerp(a, b, t, new()),
                Mode::Integrate => ops3::integrate_linear(a, b, t, new()),
            };
            r.to_vec()
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: &str, to: &str, alpha: f32) -> InterpArgs {
        InterpArgs {
            from: from.into(),
            to: to.into(),
            alpha,
        }
    }

    #[test]
    fn test_lerp_modes() {
        let a = args("0,0", "2,4", 0.5);
        assert_eq!(run(&a, Mode::Lerp).unwrap(), [1.0, 2.0]);
        assert_eq!(run(&a, Mode::FastLerp).unwrap(), [1.0, 2.0]);

        let a = args("1,1,1", "2,2,2", 2.0);
        assert_eq!(run(&a, Mode::Integrate).unwrap(), [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_mismatched_dims() {
        assert!(run(&args("0,0", "1,1,1", 0.5), Mode::Lerp).is_err());
    }
}

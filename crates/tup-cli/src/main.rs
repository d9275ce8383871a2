//! tup - evaluate vector kernel operations from the shell
//!
//! Tuples are written as comma-separated components, `x,y` or `x,y,z`.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::arith::ArithArgs;
use commands::geometry::{BinaryArgs, UnaryArgs};
use commands::interp::{InterpArgs, Mode};
use commands::rotate::RotateArgs;
use commands::round::RoundArgs;

#[derive(Parser)]
#[command(name = "tup")]
#[command(author, version, about = "Vector math kernel CLI")]
#[command(long_about = "
Evaluates 2D/3D vector operations and prints the resulting components.

Examples:
  tup lerp 0,0,0 2,4,6 -a 0.5           # 1, 2, 3
  tup integrate 1,1 2,2 -a 2            # 5, 5
  tup arith mul 1,2,3 2                 # scalar right operand
  tup cross 1,0,0 0,1,0
  tup rotate 1,0,0 --axis 0,0,1 -a 90 --degrees
  tup rotate 1,0 -a 1.5708 --table      # lookup-table sin/cos
  tup round 2.5,-2.5 --method half-even
  tup --json normalize 3,4
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Boundary-exact linear interpolation, (1-a)*from + a*to
    #[command(visible_alias = "l")]
    Lerp(InterpArgs),

    /// Cheaper linear interpolation, from + a*(to-from)
    #[command(name = "fast-lerp", visible_alias = "fl")]
    FastLerp(InterpArgs),

    /// Linear integration step, from + a*to
    #[command(visible_alias = "int")]
    Integrate(InterpArgs),

    /// Componentwise arithmetic
    #[command(visible_alias = "a")]
    Arith(ArithArgs),

    /// Scale to unit length
    #[command(visible_alias = "n")]
    Normalize(UnaryArgs),

    /// Cross product (3D)
    #[command(visible_alias = "x")]
    Cross(BinaryArgs),

    /// Project onto a unit target
    Project(BinaryArgs),

    /// Reflect about a unit normal
    Reflect(BinaryArgs),

    /// Rotate by an angle (about --axis in 3D)
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Round components with a selectable method
    Round(RoundArgs),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (op, values) = match &cli.command {
        Commands::Lerp(args) => ("lerp", commands::interp::run(args, Mode::Lerp)?),
        Commands::FastLerp(args) => ("fast-lerp", commands::interp::run(args, Mode::FastLerp)?),
        Commands::Integrate(args) => ("integrate", commands::interp::run(args, Mode::Integrate)?),
        Commands::Arith(args) => ("arith", commands::arith::run(args)?),
        Commands::Normalize(args) => ("normalize", commands::geometry::normalize(args)?),
        Commands::Cross(args) => ("cross", commands::geometry::cross(args)?),
        Commands::Project(args) => ("project", commands::geometry::project(args)?),
        Commands::Reflect(args) => ("reflect", commands::geometry::reflect(args)?),
        Commands::Rotate(args) => ("rotate", commands::rotate::run(args)?),
        Commands::Round(args) => ("round", commands::round::run(args)?),
    };

    commands::print_result(op, &values, cli.json)
}

//! pixkit - command-line front end for the pixkit toolkit
//!
//! Exercises the image model, the stage engine and fixed-point complex math
//! on small synthetic inputs.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pixkit_core::Rect;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixkit")]
#[command(author, version, about = "Image toolkit core: fills, pipelines, fixed-point complex math")]
#[command(long_about = "
Small driver for the pixkit libraries.

Examples:
  pixkit fill -W 4 -H 4 -b 5 -r 1,1,2,2 -v 9     # Fill a rectangle, print the grid
  pixkit complex mul 1.5,0.5 2,-1                 # Fixed-point complex product
  pixkit complex magnitude 768,1024 --raw         # Raw scaled operands
  pixkit pipeline -r 1,1,2,2 --mask               # Fill then mask, print result
  RUST_LOG=trace pixkit pipeline                  # Trace every stage push
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug-level logging)
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a rectangle of a Gray8 image and print it
    Fill(FillArgs),

    /// Evaluate a fixed-point complex operation
    #[command(visible_alias = "cx")]
    Complex(ComplexArgs),

    /// Run a demo stage sequence over a synthetic image
    #[command(visible_alias = "p")]
    Pipeline(PipelineArgs),
}

/// Arguments for the `fill` command.
#[derive(Args)]
struct FillArgs {
    /// Image width
    #[arg(short = 'W', long, default_value = "8")]
    width: i32,

    /// Image height
    #[arg(short = 'H', long, default_value = "8")]
    height: i32,

    /// Background value
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    background: i8,

    /// Rectangle to fill: left,top,width,height
    #[arg(short, long, value_parser = parse_rect)]
    rect: Rect,

    /// Fill value
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    value: i8,
}

/// Complex operation selector.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ComplexOp {
    Add,
    Sub,
    Mul,
    Div,
    Magnitude,
    Square,
    Conj,
}

impl ComplexOp {
    fn is_binary(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

/// Arguments for the `complex` command.
#[derive(Args)]
struct ComplexArgs {
    /// Operation
    #[arg(value_enum)]
    op: ComplexOp,

    /// First operand: re,im
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second operand for add/sub/mul/div: re,im
    #[arg(allow_hyphen_values = true)]
    b: Option<String>,

    /// Operands are already scaled integers
    #[arg(long)]
    raw: bool,
}

/// Image format for the pipeline demo.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum DemoFormat {
    Gray32,
    Rgb,
}

/// Arguments for the `pipeline` command.
#[derive(Args)]
struct PipelineArgs {
    /// Image width
    #[arg(short = 'W', long, default_value = "6")]
    width: i32,

    /// Image height
    #[arg(short = 'H', long, default_value = "4")]
    height: i32,

    /// Input format
    #[arg(short, long, value_enum, default_value = "gray32")]
    format: DemoFormat,

    /// Region to fill and then crop or mask: left,top,width,height
    #[arg(short, long, value_parser = parse_rect, default_value = "1,1,3,2")]
    rect: Rect,

    /// Mask everything outside the region instead of cropping to it
    #[arg(long)]
    mask: bool,
}

/// Parses `left,top,width,height`.
fn parse_rect(s: &str) -> std::result::Result<Rect, String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid rectangle '{}': {}", s, e))?;
    match parts.as_slice() {
        [l, t, w, h] => Ok(Rect::new(*l, *t, *w, *h)),
        _ => Err(format!(
            "invalid rectangle '{}': expected left,top,width,height",
            s
        )),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fill(args) => commands::fill::run(args, cli.verbose),
        Commands::Complex(args) => commands::complex::run(args, cli.verbose),
        Commands::Pipeline(args) => commands::pipeline::run(args, cli.verbose),
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dd_vectors::generator::{self, GeneratorConfig};
use dd_vectors::logging::init_logging;

/// Writes random 16-QAM stimulus for the dispersion-compensation test bench.
#[derive(Parser)]
struct Cli {
    /// Symbols to draw.
    #[arg(short = 'n', long, default_value_t = generator::SAMPLE_COUNT)]
    samples: usize,

    #[arg(short, long, default_value = generator::OUTPUT_PATH)]
    output: PathBuf,

    /// Rotation in radians, 0 to disable.
    #[arg(short, long, default_value_t = generator::ROTATION_ANGLE, allow_negative_numbers = true)]
    rotation: f64,

    /// Skip the Gaussian dispersion kernel.
    #[arg(long)]
    no_smoothing: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Leading samples to drop [default: kernel warm-up]
    #[arg(long)]
    skip: Option<usize>,

    /// Leave off the two trailing newlines.
    #[arg(long)]
    reduced: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(self) -> GeneratorConfig {
        GeneratorConfig {
            sample_count: self.samples,
            output_path: self.output,
            rotation_angle: self.rotation,
            apply_smoothing: !self.no_smoothing,
            seed: self.seed,
            skip: self.skip,
            trailing_newlines: !self.reduced,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config();

    let report = generator::run(&config)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;
    println!("{}", report.mean_error);

    Ok(())
}

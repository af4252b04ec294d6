use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dd_vectors::analyzer::{self, AnalyzerConfig};
use dd_vectors::logging::init_logging;

/// Measures constellation error in the test bench output and plots it.
#[derive(Parser)]
struct Cli {
    #[arg(short, long, default_value = analyzer::INPUT_PATH)]
    input: PathBuf,

    /// Fail unless the file holds exactly this many symbols.
    #[arg(short = 'n', long)]
    expected: Option<usize>,

    #[arg(short, long, default_value_t = analyzer::BATCH_SIZE)]
    batch_size: usize,

    /// Only scatter the first N symbols.
    #[arg(long, conflicts_with = "reduced")]
    scatter_limit: Option<usize>,

    /// Scatter only the first 10 symbols.
    #[arg(long)]
    reduced: bool,

    /// Directory for error_history.svg and constellation.svg.
    #[arg(short, long)]
    plot_dir: Option<PathBuf>,

    /// Write the batch error history as CSV.
    #[arg(long)]
    history_csv: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(self) -> AnalyzerConfig {
        let scatter_limit = if self.reduced {
            Some(analyzer::REDUCED_SCATTER)
        } else {
            self.scatter_limit
        };

        AnalyzerConfig {
            input_path: self.input,
            expected_count: self.expected,
            batch_size: self.batch_size,
            scatter_limit,
            plot_dir: self.plot_dir,
            history_csv: self.history_csv,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config();

    let analysis = analyzer::run(&config)
        .with_context(|| format!("failed to analyze {}", config.input_path.display()))?;
    println!("{}", analysis.mean_error);

    Ok(())
}

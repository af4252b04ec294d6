//! Reads the test bench output back and measures how far the recovered
//! symbols sit from the ideal grid.
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use num_complex::Complex;
use tracing::{debug, info};

use crate::{
    Error, Result, Sample,
    codec::bin_to_int,
    constellation::{CONSTELLATION, nearest_distance},
    iter::Iter,
    mean, plot,
};

pub const INPUT_PATH: &str = "output";
pub const BATCH_SIZE: usize = 100;
/// Scatter limit of the reduced plotting variant.
pub const REDUCED_SCATTER: usize = 10;

pub const HISTORY_PLOT: &str = "error_history.svg";
pub const CONSTELLATION_PLOT: &str = "constellation.svg";

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub input_path: PathBuf,
    /// Require exactly this many symbols in the file. When unset, any even
    /// number of valid tokens is accepted and no count mismatch is reported.
    pub expected_count: Option<usize>,
    /// Symbols per error-history entry.
    pub batch_size: usize,
    /// Only scatter the first `n` symbols.
    pub scatter_limit: Option<usize>,
    /// Where to render the two plots; nothing is drawn when unset.
    pub plot_dir: Option<PathBuf>,
    pub history_csv: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            expected_count: None,
            batch_size: BATCH_SIZE,
            scatter_limit: None,
            plot_dir: None,
            history_csv: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub symbols: Vec<Sample>,
    /// Distance from each symbol to its nearest ideal point.
    pub errors: Vec<f64>,
    pub mean_error: f64,
    /// Summed error of each full batch.
    pub history: Vec<f64>,
}

/// Splits `text` on whitespace and pairs the tokens into symbols.
pub fn parse_tokens(text: &str, expected_count: Option<usize>) -> Result<Vec<Sample>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(Error::odd_token_count(tokens.len()));
    }
    if let Some(count) = expected_count {
        if tokens.len() != 2 * count {
            return Err(Error::token_count_mismatch(2 * count, tokens.len()));
        }
    }

    let values: Vec<i16> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| bin_to_int(token).map_err(|_| Error::bad_token(index, token)))
        .collect::<Result<_>>()?;

    Ok(values
        .into_iter()
        .tuples()
        .map(|(re, im)| Complex::new(re as f64, im as f64))
        .collect())
}

pub fn symbol_errors(symbols: &[Sample]) -> Vec<f64> {
    symbols
        .iter()
        .map(|&s| nearest_distance(s, &CONSTELLATION))
        .collect()
}

/// Sum of each consecutive run of `batch_size` errors. A short tail is not
/// recorded.
pub fn batch_history(errors: &[f64], batch_size: usize) -> Result<Vec<f64>> {
    if batch_size == 0 {
        return Err(Error::Config("batch size must be non-zero".to_string()));
    }
    Ok(errors
        .iter()
        .copied()
        .whole_chunks(batch_size)
        .map(|batch| batch.into_iter().sum())
        .collect())
}

pub fn analyze(text: &str, config: &AnalyzerConfig) -> Result<Analysis> {
    let symbols = parse_tokens(text, config.expected_count)?;
    let errors = symbol_errors(&symbols);
    let history = batch_history(&errors, config.batch_size)?;
    debug!(
        symbols = symbols.len(),
        batches = history.len(),
        "parsed test bench output"
    );

    Ok(Analysis {
        mean_error: mean(&errors),
        symbols,
        errors,
        history,
    })
}

/// Writes `batch,error` rows.
pub fn save_history(path: &Path, history: &[f64]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;

    w.write_record(["batch", "error"])?;

    for (batch, error) in history.iter().enumerate() {
        w.write_record(&[batch.to_string(), error.to_string()])?;
    }
    w.flush()?;

    Ok(())
}

pub fn run(config: &AnalyzerConfig) -> Result<Analysis> {
    debug!(?config, "analyzing test bench output");
    let text = fs::read_to_string(&config.input_path)?;
    let analysis = analyze(&text, config)?;

    info!(
        path = %config.input_path.display(),
        symbols = analysis.symbols.len(),
        mean_error = analysis.mean_error,
        "analysis complete"
    );

    if let Some(dir) = &config.plot_dir {
        fs::create_dir_all(dir)?;
        plot::error_history(&dir.join(HISTORY_PLOT), &analysis.history)?;
        plot::constellation(
            &dir.join(CONSTELLATION_PLOT),
            &analysis.symbols,
            config.scatter_limit,
        )?;
        info!(dir = %dir.display(), "plots rendered");
    }

    if let Some(path) = &config.history_csv {
        save_history(path, &analysis.history)?;
        info!(path = %path.display(), "history saved");
    }

    Ok(analysis)
}

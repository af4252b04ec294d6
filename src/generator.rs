//! Test bench stimulus: random 16-QAM symbols, rotated and smeared by the
//! dispersion kernel, written as a flat stream of binary tokens.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use rand::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    Result, Sample,
    codec::{int_to_bin, quantize},
    constellation::{self, CONSTELLATION},
    filter::{convolve, dispersion_kernel},
    iter::Iter,
    mean,
};

pub const SAMPLE_COUNT: usize = 10_000;
pub const OUTPUT_PATH: &str = "input";
pub const ROTATION_ANGLE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Symbols drawn before filtering.
    pub sample_count: usize,
    /// Truncated on open.
    pub output_path: PathBuf,
    /// Radians; zero leaves the symbols on the grid.
    pub rotation_angle: f64,
    pub apply_smoothing: bool,
    /// Fixed seed for reproducible stimulus; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Leading samples to drop; `None` drops the kernel warm-up.
    pub skip: Option<usize>,
    /// End the file with two newlines.
    pub trailing_newlines: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            output_path: PathBuf::from(OUTPUT_PATH),
            rotation_angle: ROTATION_ANGLE,
            apply_smoothing: true,
            seed: None,
            skip: None,
            trailing_newlines: true,
        }
    }
}

/// Filtered signal plus the kernel that produced it.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub signal: Vec<Sample>,
    pub kernel: Vec<f64>,
}

impl Synthesis {
    /// Samples that go into the file: `skip..sample_count` of the signal.
    pub fn emitted(&self, config: &GeneratorConfig) -> &[Sample] {
        let skip = config.skip.unwrap_or(self.kernel.len() - 1);
        let end = config.sample_count.min(self.signal.len());
        if skip >= end {
            &[]
        } else {
            &self.signal[skip..end]
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorReport {
    pub output_path: PathBuf,
    pub samples_written: usize,
    /// Mean distance to the nearest rotated point, before quantization.
    pub mean_error: f64,
}

/// Draws `n` symbols uniformly, with replacement, from the constellation.
pub fn draw_symbols<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Sample> {
    (0..n)
        .map(|_| CONSTELLATION[rng.random_range(0..CONSTELLATION.len())])
        .collect()
}

pub fn synthesize<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Synthesis {
    let symbols = draw_symbols(rng, config.sample_count);

    let symbols: Vec<Sample> = if config.rotation_angle != 0f64 {
        symbols
            .into_iter()
            .scale(constellation::rotation(config.rotation_angle))
            .collect()
    } else {
        symbols
    };

    let kernel = if config.apply_smoothing {
        dispersion_kernel()
    } else {
        vec![1f64]
    };
    debug!(?kernel, "dispersion kernel");

    Synthesis {
        signal: convolve(&symbols, &kernel),
        kernel,
    }
}

/// Writes each sample as `re_token + " " + im_token + " "`.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    samples: &[Sample],
    trailing_newlines: bool,
) -> std::io::Result<()> {
    for sample in samples {
        write!(writer, "{} ", int_to_bin(quantize(sample.re)))?;
        write!(writer, "{} ", int_to_bin(quantize(sample.im)))?;
    }
    if trailing_newlines {
        writer.write_all(b"\n\n")?;
    }
    Ok(())
}

/// Mean distance from each sample to the closest point of the constellation
/// rotated by `rotation_angle`.
pub fn mean_error(samples: &[Sample], rotation_angle: f64) -> f64 {
    let points = constellation::rotated(rotation_angle);
    let errors: Vec<f64> = samples
        .iter()
        .map(|&s| constellation::nearest_distance(s, &points))
        .collect();
    mean(&errors)
}

pub fn run(config: &GeneratorConfig) -> Result<GeneratorReport> {
    debug!(?config, "generating stimulus");
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let synthesis = synthesize(config, &mut rng);
    let samples = synthesis.emitted(config);
    if samples.is_empty() {
        warn!(
            sample_count = config.sample_count,
            skip = ?config.skip,
            "no samples left after warm-up"
        );
    }

    let mut writer = BufWriter::new(File::create(&config.output_path)?);
    write_tokens(&mut writer, samples, config.trailing_newlines)?;
    writer.flush()?;

    let report = GeneratorReport {
        output_path: config.output_path.clone(),
        samples_written: samples.len(),
        mean_error: mean_error(samples, config.rotation_angle),
    };
    info!(
        path = %report.output_path.display(),
        samples = report.samples_written,
        mean_error = report.mean_error,
        "stimulus written"
    );
    Ok(report)
}

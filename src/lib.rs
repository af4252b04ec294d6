//! Stimulus generation and output analysis for a 16-QAM dispersion
//! compensation test bench.
//!
//! The `generate` binary writes a flat file of 16-bit two's-complement
//! tokens for the bench to consume; the `analyze` binary reads the bench's
//! output back and measures how far the recovered symbols sit from the ideal
//! constellation.
use num_complex::Complex;

pub mod analyzer;
pub mod codec;
pub mod constellation;
mod error;
pub mod filter;
pub mod generator;
pub mod iter;
pub mod logging;
pub mod plot;

pub use error::{Error, Result};

/// One complex baseband sample, in raw fixed-point units.
pub type Sample = Complex<f64>;

#[inline]
pub fn linspace(start: f64, stop: f64, num: usize) -> impl Iterator<Item = f64> {
    let step = if num > 1 {
        (stop - start) / ((num - 1) as f64)
    } else {
        0f64
    };
    (0..num).map(move |i| start + step * (i as f64))
}

#[inline]
/// Mean of a slice, zero when it is empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

//! Gaussian pulse shaping used to emulate fiber dispersion.
use crate::{Sample, linspace};

/// Taps in the dispersion kernel.
pub const KERNEL_LEN: usize = 5;
/// Standard deviation of the dispersion kernel, in samples.
pub const KERNEL_STD: f64 = 0.45;

/// Gaussian window `exp(-(n - (len-1)/2)^2 / (2 std^2))` for `n` in `0..len`.
pub fn gaussian_window(len: usize, std: f64) -> Vec<f64> {
    let half = (len as f64 - 1f64) / 2f64;
    linspace(-half, half, len)
        .map(|n| (-0.5 * (n / std).powi(2)).exp())
        .collect()
}

/// Scales `taps` so they sum to one.
pub fn normalize(taps: &[f64]) -> Vec<f64> {
    let total: f64 = taps.iter().sum();
    taps.iter().map(|&t| t / total).collect()
}

/// The unit-gain kernel applied by the generator.
pub fn dispersion_kernel() -> Vec<f64> {
    normalize(&gaussian_window(KERNEL_LEN, KERNEL_STD))
}

/// Sum of squared taps.
#[inline]
pub fn energy(taps: &[f64]) -> f64 {
    taps.iter().map(|t| t * t).sum()
}

/// Full linear convolution: the output has `signal.len() + taps.len() - 1`
/// samples, the first and last `taps.len() - 1` of which only partially
/// overlap the signal.
pub fn convolve(signal: &[Sample], taps: &[f64]) -> Vec<Sample> {
    if signal.is_empty() || taps.is_empty() {
        return vec![];
    }
    let len = signal.len() + taps.len() - 1;
    (0..len)
        .map(|i| {
            let first = i.saturating_sub(signal.len() - 1);
            let last = i.min(taps.len() - 1);
            (first..=last).map(|k| signal[i - k] * taps[k]).sum()
        })
        .collect()
}

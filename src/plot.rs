//! SVG diagnostics for the analyzer, rendered with plotters.
use std::path::Path;

use plotters::prelude::*;

use crate::{Error, Result, Sample, constellation::CONSTELLATION};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

/// Line plot of batch error against batch index.
pub fn error_history(path: &Path, history: &[f64]) -> Result<()> {
    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(Error::plot)?;

    let x_max = history.len().max(1) as f64;
    let y_max = history.iter().cloned().fold(0f64, f64::max).max(1f64) * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption("Batch error", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(Error::plot)?;

    chart
        .configure_mesh()
        .x_desc("batch")
        .y_desc("error")
        .draw()
        .map_err(Error::plot)?;

    chart
        .draw_series(LineSeries::new(
            history.iter().enumerate().map(|(i, &e)| (i as f64, e)),
            &BLUE,
        ))
        .map_err(Error::plot)?;

    root.present().map_err(Error::plot)?;
    Ok(())
}

/// Scatter of recovered symbols over the ideal grid, optionally only the
/// first `limit` of them.
pub fn constellation(path: &Path, symbols: &[Sample], limit: Option<usize>) -> Result<()> {
    let shown = &symbols[..limit.unwrap_or(symbols.len()).min(symbols.len())];

    let extent = shown
        .iter()
        .chain(CONSTELLATION.iter())
        .map(|s| s.re.abs().max(s.im.abs()))
        .fold(0f64, f64::max)
        * 1.2;

    let root = SVGBackend::new(path, (HEIGHT, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(Error::plot)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Recovered constellation", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(Error::plot)?;

    chart
        .configure_mesh()
        .x_desc("real")
        .y_desc("imaginary")
        .draw()
        .map_err(Error::plot)?;

    chart
        .draw_series(
            shown
                .iter()
                .map(|s| Circle::new((s.re, s.im), 2, BLUE.filled())),
        )
        .map_err(Error::plot)?;

    chart
        .draw_series(
            CONSTELLATION
                .iter()
                .map(|p| Cross::new((p.re, p.im), 6, RED.stroke_width(2))),
        )
        .map_err(Error::plot)?;

    root.present().map_err(Error::plot)?;
    Ok(())
}

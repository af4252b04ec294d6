use std::fs;

use assert_approx_eq::assert_approx_eq;
use dd_vectors::{
    analyzer::{self, AnalyzerConfig},
    constellation::{CONSTELLATION, diameter},
    filter::dispersion_kernel,
    generator::{self, GeneratorConfig},
};
use rstest::rstest;

#[macro_use]
mod util;

use util::{seeded, temp_path};

fn analyzer_for(config: &GeneratorConfig) -> AnalyzerConfig {
    AnalyzerConfig {
        input_path: config.output_path.clone(),
        ..Default::default()
    }
}

#[test]
fn ideal_stimulus_decodes_onto_the_grid() {
    let config = GeneratorConfig {
        rotation_angle: 0f64,
        apply_smoothing: false,
        ..seeded(1000, "ideal")
    };
    let report = generator::run(&config).unwrap();
    assert_eq!(report.samples_written, 1000);
    assert_eq!(report.mean_error, 0f64);

    let analysis = analyzer::run(&AnalyzerConfig {
        expected_count: Some(1000),
        ..analyzer_for(&config)
    })
    .unwrap();

    assert_eq!(analysis.symbols.len(), 1000);
    assert!(analysis.symbols.iter().all(|s| CONSTELLATION.contains(s)));
    assert_eq!(analysis.mean_error, 0f64);
    assert_eq!(analysis.history, vec![0f64; 10]);

    fs::remove_file(&config.output_path).unwrap();
}

#[test]
fn smoothed_stimulus_has_bounded_error() {
    let config = GeneratorConfig {
        rotation_angle: 0f64,
        ..seeded(2000, "smoothed")
    };
    let report = generator::run(&config).unwrap();
    assert_eq!(report.samples_written, 2000 - (dispersion_kernel().len() - 1));

    let analysis = analyzer::run(&analyzer_for(&config)).unwrap();

    let center = dispersion_kernel().iter().cloned().fold(0f64, f64::max);
    // Truncation adds at most one unit per component.
    let bound = (1f64 - center) * diameter() + 2f64.sqrt();
    assert!(analysis.mean_error > 0f64);
    assert!(analysis.mean_error <= bound, "{} > {}", analysis.mean_error, bound);
    assert_approx_eq!(analysis.mean_error, report.mean_error, 2f64.sqrt());

    fs::remove_file(&config.output_path).unwrap();
}

#[test]
fn file_layout_matches_bench_format() {
    let config = seeded(20, "layout");
    generator::run(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();

    assert!(text.ends_with(" \n\n"));
    let data = text.trim_end_matches('\n');
    assert!(!data.contains('\n'));
    let tokens: Vec<&str> = data.split(' ').collect();
    // Every token is followed by a space, leaving one empty field at the end.
    assert_eq!(tokens.last(), Some(&""));
    assert_eq!(tokens.len() - 1, 2 * 16);
    assert!(tokens[..tokens.len() - 1].iter().all(|t| t.len() == 16));

    let reduced = GeneratorConfig {
        trailing_newlines: false,
        ..seeded(20, "layout_reduced")
    };
    generator::run(&reduced).unwrap();
    let reduced_text = fs::read_to_string(&reduced.output_path).unwrap();
    assert_eq!(reduced_text, data);

    fs::remove_file(&config.output_path).unwrap();
    fs::remove_file(&reduced.output_path).unwrap();
}

#[test]
fn output_is_truncated_on_rewrite() {
    let long = seeded(500, "rewrite");
    generator::run(&long).unwrap();
    let short = GeneratorConfig {
        sample_count: 50,
        ..long.clone()
    };
    generator::run(&short).unwrap();

    let analysis = analyzer::run(&analyzer_for(&short)).unwrap();
    assert_eq!(analysis.symbols.len(), 50 - 4);

    fs::remove_file(&long.output_path).unwrap();
}

#[rstest]
#[case(Some(999))]
#[case(Some(1001))]
fn mismatched_count_is_malformed(#[case] expected: Option<usize>) {
    let config = GeneratorConfig {
        apply_smoothing: false,
        ..seeded(1000, &format!("mismatch_{}", expected.unwrap_or(0)))
    };
    generator::run(&config).unwrap();

    assert_malformed!(analyzer::run(&AnalyzerConfig {
        expected_count: expected,
        ..analyzer_for(&config)
    }));

    fs::remove_file(&config.output_path).unwrap();
}

#[test]
fn odd_token_count_is_malformed() {
    let path = temp_path("odd");
    fs::write(&path, "0001000000000000 0001000000000000 0001000000000000 \n\n").unwrap();

    assert_malformed!(analyzer::run(&AnalyzerConfig {
        input_path: path.clone(),
        ..Default::default()
    }));

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_input_is_io_error() {
    let result = analyzer::run(&AnalyzerConfig {
        input_path: temp_path("does_not_exist"),
        ..Default::default()
    });
    assert!(matches!(result, Err(dd_vectors::Error::Io(_))));
}

#[test]
fn plots_and_history_are_written() {
    let config = seeded(450, "artifacts");
    generator::run(&config).unwrap();

    let plot_dir = temp_path("plots");
    let history_csv = temp_path("history.csv");
    let analysis = analyzer::run(&AnalyzerConfig {
        scatter_limit: Some(analyzer::REDUCED_SCATTER),
        plot_dir: Some(plot_dir.clone()),
        history_csv: Some(history_csv.clone()),
        ..analyzer_for(&config)
    })
    .unwrap();

    // 446 symbols after warm-up: four full batches.
    assert_eq!(analysis.history.len(), 4);
    assert!(plot_dir.join(analyzer::HISTORY_PLOT).exists());
    assert!(plot_dir.join(analyzer::CONSTELLATION_PLOT).exists());

    let csv = fs::read_to_string(&history_csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "batch,error");
    assert_eq!(lines.len(), 1 + 4);
    assert!(lines[1].starts_with("0,"));

    fs::remove_dir_all(&plot_dir).unwrap();
    fs::remove_file(&history_csv).unwrap();
    fs::remove_file(&config.output_path).unwrap();
}

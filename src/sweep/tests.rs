// Tests for sweep scanning and aggregation
//
// Each test builds a small results tree in a temp directory with the same
// stats_<threshold>/<run>.txt layout the experiment scripts produce.

use super::*;
use crate::config::{SweepConfig, ZeroDenominatorPolicy};
use crate::record::parse_stats;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config_for(root: &Path, directories: &[&str]) -> SweepConfig {
    let mut config = SweepConfig::with_results_dir(root);
    config.directories = directories.iter().map(|s| s.to_string()).collect();
    config
}

fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < 1e-9)
}

#[test]
fn test_single_directory_scenario() {
    let tmp = TempDir::new().unwrap();
    write_file(
        &tmp.path().join("stats_0"),
        "run1.txt",
        "10 0 5 0 100\n8 2 4 1 100\n",
    );

    let config = config_for(tmp.path(), &["stats_0"]);
    let report = run_sweep(&config, |_| {}).unwrap();

    assert_eq!(report.directories.len(), 1);
    let agg = &report.directories[0];
    assert_eq!(agg.label, "0");
    assert_eq!(agg.files, 1);
    assert_eq!(agg.records, 2);
    assert!(approx(agg.specificity, 0.9));
    assert!(approx(agg.sensitivity, 0.9));
}

#[test]
fn test_files_in_directory_are_pooled() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("stats_0.02");
    write_file(&dir, "a.txt", "10 0 5 0 100\n");
    write_file(&dir, "b.txt", "8 2 4 1 100\n");

    let config = config_for(tmp.path(), &["stats_0.02"]);
    let report = run_sweep(&config, |_| {}).unwrap();

    let agg = &report.directories[0];
    assert_eq!(agg.files, 2);
    assert_eq!(agg.records, 2);
    assert!(approx(agg.specificity, 0.9));
}

#[test]
fn test_mean_is_over_lines_not_files() {
    // One file with three lines and one with a single line: the mean weighs
    // every line equally.
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("stats_0");
    write_file(&dir, "a.txt", "1 0 1 0\n1 0 1 0\n1 0 1 0\n");
    write_file(&dir, "b.txt", "0 1 0 1\n");

    let config = config_for(tmp.path(), &["stats_0"]);
    let report = run_sweep(&config, |_| {}).unwrap();

    assert!(approx(report.directories[0].specificity, 0.75));
    assert!(approx(report.directories[0].sensitivity, 0.75));
}

#[test]
fn test_directories_keep_configured_order() {
    let tmp = TempDir::new().unwrap();
    for name in ["stats_0", "stats_0.1", "stats_0.02"] {
        write_file(&tmp.path().join(name), "r.txt", "1 1 1 1\n");
    }

    let config = config_for(tmp.path(), &["stats_0", "stats_0.02", "stats_0.1"]);
    let report = run_sweep(&config, |_| {}).unwrap();

    assert_eq!(report.labels(), vec!["0", "0.02", "0.1"]);
    assert_eq!(report.total_records(), 3);
}

#[test]
fn test_progress_callback_sees_each_directory() {
    let tmp = TempDir::new().unwrap();
    for name in ["stats_0", "stats_0.02"] {
        write_file(&tmp.path().join(name), "r.txt", "1 1 1 1\n");
    }

    let config = config_for(tmp.path(), &["stats_0", "stats_0.02"]);
    let mut seen = Vec::new();
    run_sweep(&config, |p| seen.push(p.to_path_buf())).unwrap();

    assert_eq!(
        seen,
        vec![tmp.path().join("stats_0"), tmp.path().join("stats_0.02")]
    );
}

#[test]
fn test_wrong_extension_aborts_whole_run() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("stats_0"), "good.txt", "1 1 1 1\n");
    write_file(&tmp.path().join("stats_0.02"), "data.csv", "1,1,1,1\n");

    let config = config_for(tmp.path(), &["stats_0", "stats_0.02"]);
    let mut progress = 0;
    let err = run_sweep(&config, |_| progress += 1).unwrap_err();

    match err {
        SweepError::UnexpectedFile { path, expected } => {
            assert!(path.ends_with("stats_0.02/data.csv"));
            assert_eq!(expected, ".txt");
        }
        other => panic!("expected UnexpectedFile, got {other:?}"),
    }
    // Validation happens before any directory is aggregated
    assert_eq!(progress, 0);
}

#[test]
fn test_nested_directory_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("stats_0");
    write_file(&dir, "r.txt", "1 1 1 1\n");
    fs::create_dir_all(dir.join("nested.txt")).unwrap();

    let config = config_for(tmp.path(), &["stats_0"]);
    assert!(matches!(
        scan_sweep(&config),
        Err(SweepError::UnexpectedFile { .. })
    ));
}

#[test]
fn test_missing_directory_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(tmp.path(), &["stats_0"]);

    let err = run_sweep(&config, |_| {}).unwrap_err();
    assert!(matches!(err, SweepError::Io { .. }));
    assert!(err.to_string().contains("stats_0"));
}

#[test]
fn test_invalid_config_rejected_before_scan() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(tmp.path(), &[]);
    assert!(matches!(
        run_sweep(&config, |_| {}),
        Err(SweepError::Config(_))
    ));
}

#[test]
fn test_empty_directory_has_no_means() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("stats_0")).unwrap();

    let config = config_for(tmp.path(), &["stats_0"]);
    let report = run_sweep(&config, |_| {}).unwrap();

    let agg = &report.directories[0];
    assert_eq!(agg.files, 0);
    assert_eq!(agg.records, 0);
    assert_eq!(agg.specificity, None);
    assert_eq!(agg.sensitivity, None);
}

#[test]
fn test_malformed_line_reports_file_and_line() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("stats_0"), "r.txt", "1 1 1 1\n1 1\n");

    let config = config_for(tmp.path(), &["stats_0"]);
    let err = run_sweep(&config, |_| {}).unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, SweepError::Parse { .. }));
    assert!(message.contains("r.txt"));
    assert!(message.contains("line 2"));
}

#[test]
fn test_zero_denominator_errors_by_default() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("stats_0"), "r.txt", "5 5 5 5\n0 0 3 1\n");

    let config = config_for(tmp.path(), &["stats_0"]);
    match run_sweep(&config, |_| {}).unwrap_err() {
        SweepError::Metric { path, line, .. } => {
            assert!(path.ends_with("r.txt"));
            assert_eq!(line, 2);
        }
        other => panic!("expected Metric error, got {other:?}"),
    }
}

#[test]
fn test_zero_denominator_skip_policy() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("stats_0"), "r.txt", "8 2 4 1\n0 0 1 0\n");

    let mut config = config_for(tmp.path(), &["stats_0"]);
    config.zero_denominator = ZeroDenominatorPolicy::Skip;
    let report = run_sweep(&config, |_| {}).unwrap();

    let agg = &report.directories[0];
    assert_eq!(agg.records, 2);
    assert_eq!(agg.skipped, 1);
    // Specificity only from line 1; sensitivity from both lines
    assert!(approx(agg.specificity, 0.8));
    assert!(approx(agg.sensitivity, 0.9));
}

#[test]
fn test_summarize_records_matches_directory_aggregate() {
    let records = parse_stats("10 0 5 0 100\n8 2 4 1 100\n").unwrap();
    let summary = summarize_records(&records, ZeroDenominatorPolicy::Error).unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(summary.skipped, 0);
    assert!(approx(summary.specificity, 0.9));
    assert!(approx(summary.sensitivity, 0.9));
}

#[test]
fn test_summarize_no_records() {
    let summary = summarize_records(std::iter::empty(), ZeroDenominatorPolicy::Error).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(summary.specificity, None);
}

#[test]
fn test_scan_sorts_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("stats_0");
    write_file(&dir, "b.txt", "1 1 1 1\n");
    write_file(&dir, "a.txt", "1 1 1 1\n");

    let config = config_for(tmp.path(), &["stats_0"]);
    let scanned = scan_directory(&config, "stats_0").unwrap();
    let names: Vec<_> = scanned
        .files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

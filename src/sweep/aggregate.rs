// Per-directory aggregation of specificity and sensitivity
//
// Aggregation is a fold over (file, line) records. Each directory yields one
// immutable DirectoryAggregate; the mean is taken once over every
// contributing line, so file and line order only affect the last bits of
// the floating-point sum.

use crate::config::{SweepConfig, ZeroDenominatorPolicy};
use crate::metrics::{self, MetricError};
use crate::record::{numbered_records, StatRecord};
use crate::sweep::error::SweepError;
use crate::sweep::scan::{scan_sweep, SweepDirectory};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Metric means over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Records that were read
    pub records: usize,

    /// Records that lost at least one metric to a zero denominator
    pub skipped: usize,

    /// Mean specificity, `None` when no record contributed
    pub specificity: Option<f64>,

    /// Mean sensitivity, `None` when no record contributed
    pub sensitivity: Option<f64>,
}

#[derive(Debug, Default)]
struct MetricSamples {
    specificity: Vec<f64>,
    sensitivity: Vec<f64>,
    records: usize,
    skipped: usize,
}

impl MetricSamples {
    fn observe(
        &mut self,
        record: &StatRecord,
        policy: ZeroDenominatorPolicy,
    ) -> Result<(), MetricError> {
        self.records += 1;

        let spec = Self::apply_policy(record.specificity(), policy)?;
        let sens = Self::apply_policy(record.sensitivity(), policy)?;

        if spec.is_none() || sens.is_none() {
            self.skipped += 1;
        }
        self.specificity.extend(spec);
        self.sensitivity.extend(sens);
        Ok(())
    }

    fn apply_policy(
        value: Result<f64, MetricError>,
        policy: ZeroDenominatorPolicy,
    ) -> Result<Option<f64>, MetricError> {
        match (value, policy) {
            (Ok(v), _) => Ok(Some(v)),
            (Err(MetricError::ZeroDenominator { .. }), ZeroDenominatorPolicy::Skip) => Ok(None),
            (Err(e), _) => Err(e),
        }
    }

    fn summary(&self) -> MetricSummary {
        MetricSummary {
            records: self.records,
            skipped: self.skipped,
            specificity: metrics::mean(&self.specificity).ok(),
            sensitivity: metrics::mean(&self.sensitivity).ok(),
        }
    }
}

/// Summarize a set of records under the given zero-denominator policy
pub fn summarize_records<'a, I>(
    records: I,
    policy: ZeroDenominatorPolicy,
) -> Result<MetricSummary, MetricError>
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    let mut samples = MetricSamples::default();
    for record in records {
        samples.observe(record, policy)?;
    }
    Ok(samples.summary())
}

/// Aggregate result for one sweep directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryAggregate {
    pub name: String,
    pub label: String,
    pub files: usize,
    pub records: usize,
    pub skipped: usize,
    pub specificity: Option<f64>,
    pub sensitivity: Option<f64>,
}

/// Read and aggregate every statistics file in a scanned directory
pub fn aggregate_directory(
    directory: &SweepDirectory,
    policy: ZeroDenominatorPolicy,
) -> Result<DirectoryAggregate, SweepError> {
    let mut samples = MetricSamples::default();

    for path in &directory.files {
        let contents = fs::read_to_string(path).map_err(|e| SweepError::io(path, e))?;
        let before = samples.records;

        for entry in numbered_records(&contents) {
            let (line, record) = entry.map_err(|source| SweepError::Parse {
                path: path.clone(),
                source,
            })?;
            let skipped = samples.skipped;
            samples
                .observe(&record, policy)
                .map_err(|source| SweepError::Metric {
                    path: path.clone(),
                    line,
                    source,
                })?;
            if samples.skipped > skipped {
                warn!(file = %path.display(), line, "zero denominator, metric skipped");
            }
        }

        debug!(file = %path.display(), records = samples.records - before, "read statistics file");
    }

    let summary = samples.summary();
    info!(
        directory = %directory.name,
        files = directory.files.len(),
        records = summary.records,
        "aggregated sweep directory"
    );

    Ok(DirectoryAggregate {
        name: directory.name.clone(),
        label: directory.label.clone(),
        files: directory.files.len(),
        records: summary.records,
        skipped: summary.skipped,
        specificity: summary.specificity,
        sensitivity: summary.sensitivity,
    })
}

/// Aggregates for a full sweep, in configured order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub results_dir: PathBuf,
    pub directories: Vec<DirectoryAggregate>,
}

impl SweepReport {
    pub fn labels(&self) -> Vec<&str> {
        self.directories.iter().map(|d| d.label.as_str()).collect()
    }

    pub fn total_records(&self) -> usize {
        self.directories.iter().map(|d| d.records).sum()
    }
}

/// Validate the layout, then aggregate every directory.
///
/// `on_directory` is called with each directory path as processing begins.
/// Nothing is aggregated if any directory holds an unexpected file.
pub fn run_sweep<F>(config: &SweepConfig, mut on_directory: F) -> Result<SweepReport, SweepError>
where
    F: FnMut(&Path),
{
    let scanned = scan_sweep(config)?;

    let directories = scanned
        .iter()
        .map(|dir| {
            on_directory(&dir.path);
            aggregate_directory(dir, config.zero_denominator)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SweepReport {
        results_dir: config.results_dir.clone(),
        directories,
    })
}

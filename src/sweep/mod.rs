// Parameter sweep aggregation
//
// Walks the stats_<threshold> directories of a results tree, validates that
// every entry is a statistics file, and folds the per-line specificity and
// sensitivity into one mean pair per directory.
//
// Pipeline: scan (validate layout) -> aggregate (pure fold) -> SweepReport.

mod aggregate;
mod error;
mod scan;

pub use aggregate::{
    aggregate_directory, run_sweep, summarize_records, DirectoryAggregate, MetricSummary,
    SweepReport,
};
pub use error::SweepError;
pub use scan::{scan_directory, scan_sweep, SweepDirectory};

#[cfg(test)]
mod tests;

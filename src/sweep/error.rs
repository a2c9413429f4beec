// Errors for sweep scanning and aggregation
//
// Every variant carries the offending path so a batch driver can report it
// without re-walking the tree.

use crate::config::ConfigError;
use crate::metrics::MetricError;
use crate::record::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("invalid sweep configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown file type: {path} (expected {expected} statistics files only)")]
    UnexpectedFile { path: PathBuf, expected: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{path} line {line}: {source}")]
    Metric {
        path: PathBuf,
        line: usize,
        #[source]
        source: MetricError,
    },
}

impl SweepError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SweepError::Io {
            path: path.into(),
            source,
        }
    }
}

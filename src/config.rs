//! Sweep layout configuration
//!
//! The results tree is fixed: `$HOME/server_results/likeMaster/` holds one
//! `stats_<threshold>` directory per swept threshold (0 to 0.2 in steps of
//! 0.02). The struct exists so library callers and tests can drive a
//! different root; the binary always uses [`SweepConfig::from_home`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Results tree location relative to the home directory
pub const RESULTS_SUBDIR: &str = "server_results/likeMaster";

/// Prefix stripped from directory names to form plot labels
pub const LABEL_PREFIX: &str = "stats_";

/// Name of the rendered figure inside the results directory
pub const PLOT_FILE: &str = "result.png";

const DEFAULT_DIRECTORIES: [&str; 11] = [
    "stats_0",
    "stats_0.02",
    "stats_0.04",
    "stats_0.06",
    "stats_0.08",
    "stats_0.1",
    "stats_0.12",
    "stats_0.14",
    "stats_0.16",
    "stats_0.18",
    "stats_0.2",
];

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot determine the home directory")]
    HomeDirUnavailable,

    #[error("no sweep directories configured")]
    NoDirectories,

    #[error("sweep directory listed twice: {0}")]
    DuplicateDirectory(String),

    #[error("sweep directory {name} does not start with prefix {prefix:?}")]
    MissingPrefix { name: String, prefix: String },

    #[error("file extension must not be empty")]
    EmptyExtension,
}

/// What to do with a line whose metric denominator is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroDenominatorPolicy {
    /// Abort the run with a typed error naming the file and line
    #[default]
    Error,
    /// Leave the affected metric out of the mean for that line only
    Skip,
}

/// Parameter sweep layout
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Directory holding one subdirectory per swept value
    pub results_dir: PathBuf,

    /// Subdirectory names, in plot order
    pub directories: Vec<String>,

    /// Prefix stripped from each directory name to expose the swept value
    pub label_prefix: String,

    /// Suffix every statistics file must carry (including the dot)
    pub file_extension: String,

    /// Figure file name, written inside `results_dir`
    pub plot_file: String,

    pub zero_denominator: ZeroDenominatorPolicy,
}

impl SweepConfig {
    /// Standard sweep rooted at `results_dir`
    pub fn with_results_dir(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            directories: Self::default_directories(),
            label_prefix: LABEL_PREFIX.to_string(),
            file_extension: ".txt".to_string(),
            plot_file: PLOT_FILE.to_string(),
            zero_denominator: ZeroDenominatorPolicy::default(),
        }
    }

    /// Standard sweep under `$HOME/server_results/likeMaster`
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(Self::with_results_dir(home.join(RESULTS_SUBDIR)))
    }

    /// `stats_0` through `stats_0.2` in steps of 0.02
    pub fn default_directories() -> Vec<String> {
        DEFAULT_DIRECTORIES.iter().map(|s| s.to_string()).collect()
    }

    /// Plot label for a directory name (`stats_0.12` -> `0.12`)
    pub fn label_for<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.label_prefix.as_str()).unwrap_or(name)
    }

    pub fn directory_path(&self, name: &str) -> PathBuf {
        self.results_dir.join(name)
    }

    pub fn plot_path(&self) -> PathBuf {
        self.results_dir.join(&self.plot_file)
    }

    /// True when `path` carries the configured statistics file extension
    pub fn is_stats_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(self.file_extension.as_str()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directories.is_empty() {
            return Err(ConfigError::NoDirectories);
        }

        if self.file_extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        let mut seen = HashSet::new();
        for name in &self.directories {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateDirectory(name.clone()));
            }
            if !name.starts_with(self.label_prefix.as_str()) {
                return Err(ConfigError::MissingPrefix {
                    name: name.clone(),
                    prefix: self.label_prefix.clone(),
                });
            }
        }

        Ok(())
    }
}

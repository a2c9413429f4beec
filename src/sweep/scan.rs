// Sweep layout validation
//
// Every configured directory is listed up front. A single entry without the
// statistics extension rejects the whole sweep, before any file is parsed.

use crate::config::SweepConfig;
use crate::sweep::error::SweepError;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A validated sweep directory and the statistics files it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepDirectory {
    /// Directory name as configured (e.g. `stats_0.12`)
    pub name: String,

    /// Swept value shown on the plot (e.g. `0.12`)
    pub label: String,

    pub path: PathBuf,

    /// Statistics files, sorted by file name
    pub files: Vec<PathBuf>,
}

/// List one directory, rejecting anything that is not a statistics file
pub fn scan_directory(config: &SweepConfig, name: &str) -> Result<SweepDirectory, SweepError> {
    let path = config.directory_path(name);
    let entries = fs::read_dir(&path).map_err(|e| SweepError::io(&path, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SweepError::io(&path, e))?;
        let file_path = entry.path();

        // Symlinks to regular files count as files
        if !file_path.is_file() || !config.is_stats_file(&file_path) {
            return Err(SweepError::UnexpectedFile {
                path: file_path,
                expected: config.file_extension.clone(),
            });
        }
        files.push(file_path);
    }
    files.sort();

    debug!(directory = %path.display(), files = files.len(), "scanned sweep directory");

    Ok(SweepDirectory {
        name: name.to_string(),
        label: config.label_for(name).to_string(),
        path,
        files,
    })
}

/// Validate the whole sweep layout
pub fn scan_sweep(config: &SweepConfig) -> Result<Vec<SweepDirectory>, SweepError> {
    config.validate()?;
    config
        .directories
        .iter()
        .map(|name| scan_directory(config, name))
        .collect()
}

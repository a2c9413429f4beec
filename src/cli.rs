//! CLI argument parsing for stemsweep
//!
//! The results tree is fixed (`~/server_results/likeMaster`); flags only
//! control how the summary is printed and whether the figure is drawn.

use clap::{Parser, ValueEnum};

/// Output format for the sweep summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "stemsweep")]
#[command(version)]
#[command(
    about = "Mean sensitivity and specificity of stem-loop predictions across a threshold sweep",
    long_about = None
)]
pub struct Cli {
    /// Summary format printed after the scan
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Skip rendering result.png
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

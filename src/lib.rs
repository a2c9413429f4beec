//! Stemsweep - sensitivity/specificity across a stem-loop threshold sweep
//!
//! This library reads the per-run classification statistics produced for
//! each threshold of a parameter sweep, averages specificity and sensitivity
//! per threshold directory, and renders the result as a line plot.

pub mod cli;
pub mod config;
pub mod metrics;
pub mod plot;
pub mod record;
pub mod report;
pub mod sweep;

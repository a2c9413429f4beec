//! Sweep plot rendering
//!
//! Draws mean specificity and sensitivity per swept value as two line series
//! with hollow markers on a categorical x axis, y fixed to `[0, 1.1]`.
//! Directories without data leave a gap in the line.

use crate::sweep::SweepReport;
use plotters::coord::types::{RangedCoordf64, RangedCoordi32};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const TITLE: &str = "Sensitivity and Specificity of Stem Loops";

/// Figure size in pixels
pub const SIZE: (u32, u32) = (1200, 800);

pub const Y_MAX: f64 = 1.1;

const MARKER_RADIUS: i32 = 5;

/// Series colors (RGBA), specificity in blue, sensitivity in red
pub const SPECIFICITY_COLOR: RGBAColor = RGBAColor(0, 153, 255, 0.5);
pub const SENSITIVITY_COLOR: RGBAColor = RGBAColor(255, 51, 0, 0.5);

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("nothing to plot: the sweep has no directories")]
    Empty,

    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },
}

/// Split a series into runs of consecutive present values.
///
/// Each point is `(index, value)`, where `index` is the directory position.
pub fn segments(values: &[Option<f64>]) -> Vec<Vec<(i32, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((idx as i32, *v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Tick label for an x position; blank outside the directory range
pub fn tick_label(labels: &[&str], x: i32) -> String {
    usize::try_from(x)
        .ok()
        .and_then(|i| labels.get(i))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn draw_metric<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordi32, RangedCoordf64>>,
    name: &str,
    values: &[Option<f64>],
    color: RGBAColor,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let runs = segments(values);
    for run in &runs {
        chart.draw_series(LineSeries::new(run.iter().copied(), color.stroke_width(2)))?;
    }

    let points: Vec<(i32, f64)> = runs.into_iter().flatten().collect();
    chart.draw_series(
        points
            .iter()
            .map(|&p| Circle::new(p, MARKER_RADIUS, WHITE.filled())),
    )?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, MARKER_RADIUS, color.stroke_width(2))),
        )?
        .label(name)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

    Ok(())
}

fn draw(report: &SweepReport, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let labels = report.labels();
    let n = labels.len() as i32;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            TITLE,
            FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Bold),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-1i32..n, 0.0f64..Y_MAX)?;

    let x_formatter = |x: &i32| tick_label(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len() + 2)
        .x_label_formatter(&x_formatter)
        .y_labels(12)
        .draw()?;

    let specificity: Vec<Option<f64>> =
        report.directories.iter().map(|d| d.specificity).collect();
    let sensitivity: Vec<Option<f64>> =
        report.directories.iter().map(|d| d.sensitivity).collect();

    draw_metric(&mut chart, "Specificity", &specificity, SPECIFICITY_COLOR)?;
    draw_metric(&mut chart, "Sensitivity", &sensitivity, SENSITIVITY_COLOR)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the sweep plot as a PNG at `path`
pub fn render_plot(report: &SweepReport, path: &Path) -> Result<(), PlotError> {
    if report.directories.is_empty() {
        return Err(PlotError::Empty);
    }

    draw(report, path).map_err(|e| PlotError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    info!(plot = %path.display(), "rendered sweep plot");
    Ok(())
}

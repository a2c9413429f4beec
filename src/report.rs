//! Console and machine-readable sweep summaries
//!
//! Text for humans, JSON and CSV for spreadsheets and downstream scripts.
//! Missing means print as `n/a` (text) or an empty field (CSV) or `null` (JSON).

use crate::sweep::SweepReport;

fn fmt_metric(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.3}"))
}

/// Aligned summary table
pub fn format_text(report: &SweepReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Results: {}\n", report.results_dir.display()));
    output.push_str(&format!(
        "{:>10} {:>6} {:>8} {:>12} {:>12}\n",
        "parameter", "files", "lines", "specificity", "sensitivity"
    ));
    output.push_str(&format!("{}\n", "-".repeat(52)));

    for dir in &report.directories {
        output.push_str(&format!(
            "{:>10} {:>6} {:>8} {:>12} {:>12}\n",
            dir.label,
            dir.files,
            dir.records,
            fmt_metric(dir.specificity),
            fmt_metric(dir.sensitivity)
        ));
    }

    output.push_str(&format!("{}\n", "-".repeat(52)));
    output.push_str(&format!(
        "{:>10} {:>6} {:>8}\n",
        "total",
        report.directories.iter().map(|d| d.files).sum::<usize>(),
        report.total_records()
    ));

    output
}

/// Pretty-printed JSON
pub fn format_json(report: &SweepReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// CSV with one row per sweep directory
pub fn format_csv(report: &SweepReport) -> String {
    let mut output = String::from("directory,parameter,files,records,specificity,sensitivity\n");

    for dir in &report.directories {
        let fields = [
            escape_field(&dir.name),
            escape_field(&dir.label),
            dir.files.to_string(),
            dir.records.to_string(),
            dir.specificity.map(|v| v.to_string()).unwrap_or_default(),
            dir.sensitivity.map(|v| v.to_string()).unwrap_or_default(),
        ];
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

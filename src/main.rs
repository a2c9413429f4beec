use anyhow::{Context, Result};
use clap::Parser;
use stemsweep::cli::{Cli, OutputFormat};
use stemsweep::config::SweepConfig;
use stemsweep::{plot, report, sweep};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = SweepConfig::from_home()?;

    // Progress and status go to stderr; stdout carries only the summary
    let sweep_report = sweep::run_sweep(&config, |dir| eprintln!("{}", dir.display()))
        .with_context(|| format!("sweep of {} failed", config.results_dir.display()))?;

    match args.format {
        OutputFormat::Text => print!("{}", report::format_text(&sweep_report)),
        OutputFormat::Json => println!("{}", report::format_json(&sweep_report)?),
        OutputFormat::Csv => print!("{}", report::format_csv(&sweep_report)),
    }

    if !args.no_plot {
        let plot_path = config.plot_path();
        plot::render_plot(&sweep_report, &plot_path)?;
        eprintln!("Plot saved to {}", plot_path.display());
    }

    Ok(())
}

//! Render the report artifacts a results file supports on its own: the
//! cross-environment comparison, per-algorithm stability plots and the
//! LaTeX summary table.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rl_report::config::{DEFAULT_RESULTS_FILE, DEFAULT_TABLE_PATH};
use rl_report::results::load_results;
use rl_report::{ImageFormat, ReportConfig, Reporter};

#[derive(Parser, Debug)]
#[command(name = "rl-report", version, about = "Figures and LaTeX table for DQN/DDQN results")]
struct Args {
    /// Results file written by the training script
    #[arg(long, default_value = DEFAULT_RESULTS_FILE)]
    results: PathBuf,

    /// Directory figures are written to [default: plots]
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Path of the LaTeX summary table
    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    table: PathBuf,

    /// Raster resolution in dots per inch
    #[arg(long)]
    dpi: Option<u32>,

    /// Moving-average window
    #[arg(long)]
    window: Option<usize>,

    /// Image format of the figures: png or svg
    #[arg(long)]
    format: Option<ImageFormat>,

    /// JSON file with report settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn report_config(args: &Args) -> rl_report::Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(save_dir) = &args.save_dir {
        config.save_dir = save_dir.clone();
    }
    if let Some(dpi) = args.dpi {
        config.dpi = dpi;
    }
    if let Some(window) = args.window {
        config.smoothing_window = window;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> rl_report::Result<()> {
    let config = report_config(&args)?;

    let Some(results) = load_results(&args.results)? else {
        warn!("No results found at {}", args.results.display());
        return Ok(());
    };

    let reporter = Reporter::new(config);
    for path in reporter.plot_results(&results)? {
        info!("Saved {}", path.display());
    }
    reporter.create_summary_table(&results, &args.table)?;

    info!("All plots saved in {}", reporter.config().save_dir.display());
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "rl-report", "--format", "svg", "--dpi", "96", "--window", "10",
        ])
        .unwrap();
        let config = report_config(&args).unwrap();
        assert_eq!(config.format, ImageFormat::Svg);
        assert_eq!(config.dpi, 96);
        assert_eq!(config.smoothing_window, 10);
        assert_eq!(config.save_dir, PathBuf::from("plots"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["rl-report", "--format", "gif"]).is_err());
    }
}

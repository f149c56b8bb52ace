//! Miner Catalog
//!
//! Reads a catalog export, classifies its products into miners and
//! non-miners, groups duplicate miner listings and writes an analysis
//! report for manual review.

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use miner_catalog::{render_summary, report, ReportBuilder, Result};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Miner Catalog - classify catalog products and find duplicate miner listings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog export with a top-level `products` list
    #[arg(long, default_value = "products_data.json")]
    input: PathBuf,

    /// Where to write the analysis report
    #[arg(long, default_value = "analysis_report.json")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    info!("Starting Miner Catalog analysis");
    info!("  Version: {}", miner_catalog::VERSION);
    info!("  Input: {}", args.input.display());
    info!("  Output: {}", args.output.display());

    let report = match report::run(&ReportBuilder::new(), &args.input, &args.output) {
        Ok(report) => report,
        Err(e) => {
            if e.is_input_error() {
                error!("Catalog could not be read, no report written: {}", e);
            } else {
                error!("Analysis failed: {}", e);
            }
            return Err(e);
        }
    };

    print!("{}", render_summary(&report, &args.output));
    info!("Analysis complete");
    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr; stdout carries the summary.
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

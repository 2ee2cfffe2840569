//! # Seller Report Generator
//!
//! Reads a sales dataset and prints the ranked seller report.
//!
//! ## Usage
//! ```bash
//! # JSON report on stdout
//! cargo run -p sales-report -- --data ./data/sample_dataset.json
//!
//! # Text table, custom config
//! cargo run -p sales-report -- --data sales.json --config report.toml --format table
//!
//! # Write to a file
//! cargo run -p sales-report -- --data sales.json --output report.json
//!
//! # Show the effective configuration
//! cargo run -p sales-report -- --print-config
//! ```
//!
//! Logs go to stderr so stdout carries only the report.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sales_report::config::{OutputFormat, ReportConfig};
use sales_report::dataset::{build_report, load_dataset};
use sales_report::error::{ReportError, ReportResult};
use sales_report::render::render;

#[derive(Debug, Parser)]
#[command(name = "sales-report", version, about = "Ranked seller performance report")]
struct Args {
    /// Dataset JSON file (customers, products, sellers, purchase_records)
    #[arg(short, long, required_unless_present = "print_config")]
    data: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overrides config and SALES_REPORT_FORMAT
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Report generation failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> ReportResult<()> {
    let mut config = ReportConfig::load(args.config)?;
    if let Some(format) = args.format {
        config.output.format = format;
    }

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let path = args
        .data
        .ok_or_else(|| ReportError::InvalidConfig("--data is required".into()))?;

    let raw = load_dataset(&path)?;
    let report = build_report(&raw, &config)?;
    let rendered = render(&report, &config.output)?;

    match args.output {
        Some(out) => {
            std::fs::write(&out, rendered)?;
            info!(path = ?out, format = %config.output.format, "Report written");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sales_core=trace` - Show per-record accumulation
/// - Default: INFO, DEBUG for the sales crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sales=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

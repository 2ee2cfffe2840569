//! # Dataset Loading
//!
//! Reads a dataset file and runs it through the core analysis.
//!
//! The file is parsed into an untyped JSON value first so the core can tell
//! a missing collection apart from one of the wrong shape.

use sales_core::{analyze_value, AnalysisOptions, ReportEntry, SimpleRevenue};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::ReportResult;

/// Reads and parses a dataset JSON file.
pub fn load_dataset(path: &Path) -> ReportResult<Value> {
    debug!(?path, "Reading dataset");
    let contents = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    info!(?path, bytes = contents.len(), "Dataset loaded");
    Ok(value)
}

/// Builds the analysis options a config describes.
pub fn analysis_options(config: &ReportConfig) -> AnalysisOptions {
    AnalysisOptions::new()
        .with_revenue(SimpleRevenue)
        .with_bonus(config.bonus.to_policy())
}

/// Runs the analysis over a parsed dataset.
pub fn build_report(raw: &Value, config: &ReportConfig) -> ReportResult<Vec<ReportEntry>> {
    let report = analyze_value(raw, &analysis_options(config))?;

    let total_profit: f64 = report.iter().map(|entry| entry.profit).sum();
    let total_bonus: f64 = report.iter().map(|entry| entry.bonus).sum();
    info!(
        sellers = report.len(),
        top_seller = report.first().map(|entry| entry.name.as_str()).unwrap_or(""),
        total_profit,
        total_bonus,
        "Report built"
    );

    Ok(report)
}

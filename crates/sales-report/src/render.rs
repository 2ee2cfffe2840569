//! # Report Rendering
//!
//! Turns report entries into the text written to stdout or a file.
//!
//! ## Table Layout
//! ```text
//! #   Seller      Name                  Sales     Revenue      Profit     Bonus  Top product
//! 1   seller_1    Alexey Petrov            36   123456.78    54321.00   8148.15  SKU_001 x12
//! 2   seller_3    Ivan Sidorov             20    99000.10    41000.00   4100.00  SKU_014 x9
//! ```

use sales_core::ReportEntry;

use crate::config::{OutputFormat, OutputSettings};
use crate::error::ReportResult;

/// Renders `report` in the configured format.
pub fn render(report: &[ReportEntry], settings: &OutputSettings) -> ReportResult<String> {
    match settings.format {
        OutputFormat::Json => render_json(report, settings.pretty),
        OutputFormat::Table => Ok(render_table(report)),
    }
}

/// Serializes the report as a JSON array.
pub fn render_json(report: &[ReportEntry], pretty: bool) -> ReportResult<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    out.push('\n');
    Ok(out)
}

/// Formats the report as a fixed-width table, one row per seller.
pub fn render_table(report: &[ReportEntry]) -> String {
    let mut out = format!(
        "{:<3} {:<11} {:<20} {:>6} {:>11} {:>11} {:>9}  {}\n",
        "#", "Seller", "Name", "Sales", "Revenue", "Profit", "Bonus", "Top product"
    );

    for (rank, entry) in report.iter().enumerate() {
        let top = entry
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!(
            "{:<3} {:<11} {:<20} {:>6} {:>11.2} {:>11.2} {:>9.2}  {}\n",
            rank + 1,
            entry.seller_id.as_str(),
            entry.name,
            entry.sales_count,
            entry.revenue,
            entry.profit,
            entry.bonus,
            top
        ));
    }

    out
}

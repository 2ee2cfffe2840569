//! # Analysis Module
//!
//! The seller performance pipeline.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        analyze(data, options)                           │
//! │                                                                         │
//! │  ┌──────────┐   ┌─────────┐   ┌────────────┐   ┌────────┐   ┌─────────┐ │
//! │  │ Validate │──►│  Index  │──►│ Accumulate │──►│  Rank  │──►│ Project │ │
//! │  └──────────┘   └─────────┘   └────────────┘   └────────┘   └─────────┘ │
//! │   empty?         seller id →   per record:      profit ↓     round to   │
//! │   policies?      aggregate     count, total     bonus(i,n)   cents      │
//! │   duplicates?    sku →         per line:        top 10 SKUs             │
//! │                  product       profit, qty                              │
//! │                                                                         │
//! │  All state is local to the call. Any error aborts the whole run.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod accumulate;
mod index;
mod project;
mod rank;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::policy::AnalysisOptions;
use crate::types::{ReportEntry, SalesData};
use crate::validation::{validate_raw_dataset, validate_sales_data};

use accumulate::accumulate;
use index::{ProductIndex, SellerIndex};
use project::project;
use rank::rank;

/// Builds the per-seller performance report.
///
/// Entries come back ordered by profit, highest first.
///
/// ## Errors
/// - `InvalidInput` if a collection is empty or an id/SKU is duplicated
/// - `MissingPolicy` if either policy is unset
/// - `DanglingReference` if a record names an unknown seller or SKU
///
/// ## Example
/// ```rust
/// use sales_core::{analyze, AnalysisOptions};
/// use sales_core::types::SalesData;
///
/// let data: SalesData = serde_json::from_str(r#"{
///     "customers": [{ "id": "c1" }],
///     "products": [{ "sku": "A", "purchase_price": 5, "sale_price": 10 }],
///     "sellers": [{ "id": 1, "first_name": "A", "last_name": "B" }],
///     "purchase_records": [{
///         "seller_id": 1,
///         "total_amount": 10,
///         "items": [{ "sku": "A", "quantity": 2, "discount": 0 }]
///     }]
/// }"#).unwrap();
///
/// let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
/// assert_eq!(report[0].profit, 10.0);
/// assert_eq!(report[0].bonus, 1.5);
/// ```
pub fn analyze(data: &SalesData, options: &AnalysisOptions) -> AnalysisResult<Vec<ReportEntry>> {
    validate_sales_data(data)?;
    let (revenue_policy, bonus_policy) = options.policies()?;

    let mut sellers = SellerIndex::build(&data.sellers)?;
    let products = ProductIndex::build(&data.products)?;
    debug!(
        sellers = sellers.len(),
        products = products.len(),
        records = data.purchase_records.len(),
        "Indexed sales data"
    );

    accumulate(&data.purchase_records, &mut sellers, &products, revenue_policy)?;

    let mut aggregates = sellers.into_aggregates();
    rank(&mut aggregates, bonus_policy);

    let report = project(aggregates);
    debug!(entries = report.len(), "Seller report ready");
    Ok(report)
}

/// Same as [`analyze`], starting from untyped JSON.
///
/// The raw shape is checked first (container present, collections are
/// non-empty arrays), then policies, then the records are decoded.
pub fn analyze_value(raw: &Value, options: &AnalysisOptions) -> AnalysisResult<Vec<ReportEntry>> {
    validate_raw_dataset(raw)?;
    options.policies()?;

    let data = SalesData::deserialize(raw).map_err(AnalysisError::Malformed)?;
    analyze(&data, options)
}

//! # sales-core: Pure Seller Performance Analysis
//!
//! This crate turns four record collections (customers, products, sellers,
//! purchase records) into a ranked per-seller report: revenue, profit, sales
//! count, top-10 products and a rank-based bonus. It has zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Seller Analytics Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    sales-report (CLI)                           │   │
//! │  │    load dataset.json ──► config ──► render JSON / table         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sales-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  policy   │  │ analysis  │  │ validation│  │   │
//! │  │   │  Seller   │  │  Revenue  │  │  index    │  │  shapes   │  │   │
//! │  │   │  Product  │  │  Bonus    │  │  rank     │  │  empties  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input records, seller aggregates, report entries
//! - [`policy`] - Revenue and bonus policies, [`AnalysisOptions`]
//! - [`analysis`] - The pipeline: [`analyze`] and [`analyze_value`]
//! - [`money`] - Cent rounding and bonus rates
//! - [`validation`] - Structural input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_core::{analyze_value, AnalysisOptions};
//! use serde_json::json;
//!
//! let data = json!({
//!     "customers": [{ "id": "c1" }],
//!     "products": [
//!         { "sku": "A", "purchase_price": 5.0, "sale_price": 10.0 },
//!         { "sku": "B", "purchase_price": 1.0, "sale_price": 2.0 }
//!     ],
//!     "sellers": [
//!         { "id": "s1", "first_name": "Ann", "last_name": "Lee" },
//!         { "id": "s2", "first_name": "Bo", "last_name": "Kim" }
//!     ],
//!     "purchase_records": [
//!         { "seller_id": "s2", "total_amount": 20.0,
//!           "items": [{ "sku": "A", "quantity": 2, "sale_price": 10.0, "discount": 0 }] },
//!         { "seller_id": "s1", "total_amount": 2.0,
//!           "items": [{ "sku": "B", "quantity": 1, "sale_price": 2.0, "discount": 0 }] }
//!     ]
//! });
//!
//! let report = analyze_value(&data, &AnalysisOptions::standard()).unwrap();
//! assert_eq!(report[0].name, "Bo Kim");
//! assert_eq!(report[0].bonus, 1.5);  // rank 0: 15% of 10.00
//! assert_eq!(report[1].bonus, 0.1);  // rank 1: 10% of 1.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analysis;
pub mod error;
pub mod money;
pub mod policy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analysis::{analyze, analyze_value};
pub use error::{AnalysisError, AnalysisResult, ReferenceKind, ValidationError};
pub use policy::{AnalysisOptions, BonusPolicy, RevenuePolicy, SimpleRevenue, TieredBonus};
pub use types::{ReportEntry, SalesData, TopProduct};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a seller's best-seller list.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Collections every dataset must carry, in validation order.
pub const REQUIRED_COLLECTIONS: [&str; 4] = ["customers", "products", "sellers", "purchase_records"];

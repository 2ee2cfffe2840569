//! # sales-report: Report Generator Shell
//!
//! Everything around the pure analysis in `sales-core`: reading datasets,
//! loading configuration, rendering output.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Report Run                                       │
//! │                                                                         │
//! │  report.toml + env ──► config::ReportConfig                             │
//! │                               │ bonus tiers                             │
//! │                               ▼                                         │
//! │  dataset.json ──► dataset::load_dataset ──► dataset::build_report       │
//! │                                                    │ sales_core         │
//! │                                                    ▼                    │
//! │                               render::render ──► stdout / file          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod render;

pub use config::{OutputFormat, ReportConfig};
pub use error::{ReportError, ReportResult};

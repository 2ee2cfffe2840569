//! # Report Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io / serde_json / toml errors      AnalysisError (sales-core)    │
//! │               │                                    │                    │
//! │               └──────────────┬─────────────────────┘                    │
//! │                              ▼                                          │
//! │                  ReportError (this module)                              │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                 CLI logs the error, exits non-zero                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sales_core::AnalysisError;
use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Everything that can stop a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading the dataset or config, or writing the report, failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset file is not valid JSON, or the report could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file is not valid TOML for [`crate::config::ReportConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config parsed but holds values out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The analysis itself rejected the dataset.
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

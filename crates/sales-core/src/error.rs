//! # Error Types
//!
//! Domain-specific error types for sales-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sales-core errors (this file)                                         │
//! │  ├── AnalysisError    - Fatal analysis failures                        │
//! │  └── ValidationError  - Input shape failures (wrapped as InvalidInput) │
//! │                                                                         │
//! │  sales-report errors (separate crate)                                  │
//! │  └── ReportError      - File, config and rendering failures            │
//! │                                                                         │
//! │  Flow: ValidationError → AnalysisError → ReportError → CLI exit code   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is fatal: analysis never returns a partial report.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Analysis Error
// =============================================================================

/// Errors raised by [`crate::analysis::analyze`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The dataset failed structural validation.
    ///
    /// ## When This Occurs
    /// - The data container is absent
    /// - A required collection is missing, not an array, or empty
    /// - A seller id or product SKU appears twice
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A required policy was not supplied in [`crate::policy::AnalysisOptions`].
    #[error("Missing policy: {policy}")]
    MissingPolicy { policy: &'static str },

    /// A purchase record or line item points at a record that does not exist.
    ///
    /// ## User Workflow
    /// ```text
    /// Purchase record { seller_id: "seller_9" }
    ///      │
    ///      ▼
    /// Seller index lookup → None
    ///      │
    ///      ▼
    /// DanglingReference { kind: Seller, id: "seller_9" }
    /// ```
    #[error("Unknown {kind} referenced: {id}")]
    DanglingReference { kind: ReferenceKind, id: String },

    /// Raw JSON had the right collections but a record could not be decoded.
    #[error("Malformed dataset: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Which index a dangling reference missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Seller,
    Product,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Seller => write!(f, "seller"),
            ReferenceKind::Product => write!(f, "product"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Checked up front, before any aggregation work runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The top-level data container is absent.
    #[error("data is required")]
    MissingData,

    /// A required collection is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// A required collection is present but is not an array.
    #[error("{field} must be an array")]
    NotASequence { field: String },

    /// A required collection is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// Duplicate identity (seller id or SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AnalysisError.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::DanglingReference {
            kind: ReferenceKind::Product,
            id: "SKU_042".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown product referenced: SKU_042");

        let err = AnalysisError::MissingPolicy {
            policy: "calculate_bonus",
        };
        assert_eq!(err.to_string(), "Missing policy: calculate_bonus");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Empty {
            field: "sellers".to_string(),
        };
        assert_eq!(err.to_string(), "sellers must not be empty");

        let err = ValidationError::NotASequence {
            field: "products".to_string(),
        };
        assert_eq!(err.to_string(), "products must be an array");
    }

    #[test]
    fn test_validation_converts_to_invalid_input() {
        let err: AnalysisError = ValidationError::MissingData.into();
        assert!(matches!(
            err,
            AnalysisError::InvalidInput(ValidationError::MissingData)
        ));
    }
}

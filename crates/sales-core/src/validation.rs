//! # Validation Module
//!
//! Structural checks that run before any aggregation work.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Raw JSON (validate_raw_dataset)                              │
//! │  ├── Container present and an object                                   │
//! │  └── customers / products / sellers / purchase_records are arrays      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Typed data (validate_sales_data)                             │
//! │  └── All four collections non-empty                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Indexing                                                     │
//! │  └── Seller ids and SKUs unique (ensure_unique)                        │
//! │                                                                         │
//! │  All checks complete before the first purchase record is folded.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::validation::validate_raw_dataset;
//! use serde_json::json;
//!
//! assert!(validate_raw_dataset(&json!(null)).is_err());
//! assert!(validate_raw_dataset(&json!({ "customers": [] })).is_err());
//! ```

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::SalesData;
use crate::REQUIRED_COLLECTIONS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Typed Validators
// =============================================================================

/// Checks that every required collection has at least one record.
///
/// Collections are checked in declaration order and the first empty one is
/// reported.
pub fn validate_sales_data(data: &SalesData) -> ValidationResult<()> {
    let lengths = [
        data.customers.len(),
        data.products.len(),
        data.sellers.len(),
        data.purchase_records.len(),
    ];

    for (field, len) in REQUIRED_COLLECTIONS.iter().zip(lengths) {
        if len == 0 {
            return Err(ValidationError::Empty {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

/// Checks that no identity appears twice.
pub fn ensure_unique<'a>(
    field: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: id.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Raw Validators
// =============================================================================

/// Checks the shape of an untyped dataset.
///
/// ## Rules
/// - The container must be a JSON object (`null` counts as absent)
/// - Each required collection must be present
/// - Each must be an array
/// - Each must be non-empty
///
/// ## Example
/// ```rust
/// use sales_core::validation::validate_raw_dataset;
/// use serde_json::json;
///
/// let data = json!({
///     "customers": [{ "id": 1 }],
///     "products": "oops",
///     "sellers": [],
///     "purchase_records": [],
/// });
/// let err = validate_raw_dataset(&data).unwrap_err();
/// assert_eq!(err.to_string(), "products must be an array");
/// ```
pub fn validate_raw_dataset(raw: &Value) -> ValidationResult<()> {
    let object = raw.as_object().ok_or(ValidationError::MissingData)?;

    for field in REQUIRED_COLLECTIONS {
        let collection = object.get(field).ok_or_else(|| ValidationError::Required {
            field: field.to_string(),
        })?;

        let items = collection
            .as_array()
            .ok_or_else(|| ValidationError::NotASequence {
                field: field.to_string(),
            })?;

        if items.is_empty() {
            return Err(ValidationError::Empty {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

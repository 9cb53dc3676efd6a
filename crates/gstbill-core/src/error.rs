//! # Error Types
//!
//! Domain-specific error types for gstbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gstbill-core errors (this file)                                       │
//! │  ├── CoreError        - Document/business rule violations              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Backend client errors (desktop app)                                   │
//! │  └── BackendError     - HTTP/status failures from the REST API         │
//! │                                                                         │
//! │  Tauri API errors (desktop app)                                        │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → BackendError → ApiError → UI      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent document rule violations. They should be caught
/// and translated to user-friendly messages by the command layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Line item cannot be found on the draft invoice.
    #[error("Line item not found: {0}")]
    ItemNotFound(String),

    /// The last remaining line item cannot be removed.
    ///
    /// ## Why
    /// The items table must render at least one row; the editor disables
    /// deletion of the final item and the core enforces the same rule.
    #[error("An invoice must keep at least one line item")]
    LastItemRemoval,

    /// Invoice has exceeded the maximum number of line items.
    #[error("Invoice cannot have more than {max} line items")]
    TooManyItems { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a finalize request is sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is not a finite non-negative number.
    ///
    /// Note: form-level edits coerce bad numbers to zero instead of
    /// producing this error; it only fires on values that arrive through
    /// the JSON contract (e.g. a loaded invoice with a mangled rate).
    #[error("{field} must be a finite non-negative number")]
    InvalidAmount { field: String },

    /// Invalid format (e.g., a date that is not "YYYY-MM-DD").
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TooManyItems { max: 50 };
        assert_eq!(err.to_string(), "Invoice cannot have more than 50 line items");

        let err = CoreError::ItemNotFound("42".to_string());
        assert_eq!(err.to_string(), "Line item not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "invoiceNo".to_string(),
        };
        assert_eq!(err.to_string(), "invoiceNo is required");

        let err = ValidationError::InvalidFormat {
            field: "dated".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(err.to_string(), "dated has invalid format: expected YYYY-MM-DD");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "dated".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

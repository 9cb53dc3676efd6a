//! # Validation Module
//!
//! Input validation rules for GstBill.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Number inputs coerce non-numeric text to 0                        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command boundary (Rust)                                      │
//! │  ├── coerce_amount() zeroes negative/NaN numerics on every edit        │
//! │  └── THIS MODULE: finalize-time document checks                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend REST API                                             │
//! │  └── Server-side checks (external collaborator)                        │
//! │                                                                         │
//! │  Edits are never rejected; only finalize enforces hard rules.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::InvoiceData;
use crate::{DATE_FORMAT, MAX_LINE_ITEMS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an invoice number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_invoice_no(invoice_no: &str) -> ValidationResult<()> {
    let invoice_no = invoice_no.trim();

    if invoice_no.is_empty() {
        return Err(ValidationError::Required {
            field: "invoiceNo".to_string(),
        });
    }

    if invoice_no.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "invoiceNo".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates a date field against the wire format "YYYY-MM-DD".
///
/// ## Example
/// ```rust
/// use gstbill_core::validation::validate_date;
///
/// assert!(validate_date("dated", "2025-03-31").is_ok());
/// assert!(validate_date("dated", "31/03/2025").is_err());
/// ```
pub fn validate_date(field: &str, value: &str) -> ValidationResult<()> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })?;

    Ok(())
}

/// Validates a tax rate in percent.
///
/// ## Rules
/// - Must be a finite non-negative number
/// - Must not exceed 100%
pub fn validate_rate_percent(field: &str, rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(ValidationError::InvalidAmount {
            field: field.to_string(),
        });
    }

    if rate > 100.0 {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "rate cannot exceed 100%".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Document Validator
// =============================================================================

/// Validates a draft before it is finalized to the backend.
///
/// ## Rules
/// - Invoice number present and well-formed
/// - `dated` is a real "YYYY-MM-DD" date
/// - `invoiceTo` present
/// - At least one item, at most [`MAX_LINE_ITEMS`]
/// - CGST/SGST rates finite, 0..=100
pub fn validate_for_finalize(invoice: &InvoiceData) -> ValidationResult<()> {
    validate_invoice_no(&invoice.invoice_no)?;
    validate_date("dated", &invoice.dated)?;

    if invoice.invoice_to.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "invoiceTo".to_string(),
        });
    }

    if invoice.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if invoice.items.len() > MAX_LINE_ITEMS {
        return Err(ValidationError::InvalidFormat {
            field: "items".to_string(),
            reason: format!("at most {} line items", MAX_LINE_ITEMS),
        });
    }

    validate_rate_percent("cgstRate", invoice.cgst_rate)?;
    validate_rate_percent("sgstRate", invoice.sgst_rate)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_invoice_no() {
        assert!(validate_invoice_no("INV-2025-001").is_ok());
        assert!(validate_invoice_no("00000").is_ok());
        assert!(validate_invoice_no("").is_err());
        assert!(validate_invoice_no("   ").is_err());
        assert!(validate_invoice_no(&"9".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("dated", "2025-03-31").is_ok());
        assert!(validate_date("dated", "2025-3-31").is_err());
        assert!(validate_date("dated", "31/03/2025").is_err());
        assert!(validate_date("dated", "NA").is_err());
        assert!(validate_date("dated", "2025-02-30").is_err());
    }

    #[test]
    fn test_validate_rate_percent() {
        assert!(validate_rate_percent("cgstRate", 0.0).is_ok());
        assert!(validate_rate_percent("cgstRate", 9.0).is_ok());
        assert!(validate_rate_percent("cgstRate", 100.0).is_ok());
        assert!(validate_rate_percent("cgstRate", -1.0).is_err());
        assert!(validate_rate_percent("cgstRate", 101.0).is_err());
        assert!(validate_rate_percent("cgstRate", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_for_finalize_defaults_pass() {
        // The default template is a legal (if empty-ish) document.
        let invoice = InvoiceData::default_template();
        assert!(validate_for_finalize(&invoice).is_ok());
    }

    #[test]
    fn test_validate_for_finalize_rejects_bad_drafts() {
        let mut invoice = InvoiceData::default_template();
        invoice.invoice_no = String::new();
        assert!(validate_for_finalize(&invoice).is_err());

        let mut invoice = InvoiceData::default_template();
        invoice.dated = "not-a-date".to_string();
        assert!(validate_for_finalize(&invoice).is_err());

        let mut invoice = InvoiceData::default_template();
        invoice.items.clear();
        assert!(validate_for_finalize(&invoice).is_err());
    }
}

//! # Invoice Computation Module
//!
//! Pure arithmetic for line items and invoice-level totals.
//!
//! ## Why f64 And Not Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRESENTATION-TIME ROUNDING                                             │
//! │                                                                         │
//! │  The backend contract transmits amounts as plain decimal numbers,      │
//! │  and quantities themselves are fractional (e.g. 12.75 KG). No          │
//! │  rounding happens inside the computation chain:                        │
//! │                                                                         │
//! │    quantity ──► taxable ──► taxAmount ──► amount ──► totals            │
//! │                                                                         │
//! │  Only format_amount() rounds, with two decimals, at the very edge      │
//! │  where a figure becomes display text. Every intermediate value keeps   │
//! │  full f64 precision so totals stay internally consistent.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gstbill_core::types::InvoiceItem;
//! use gstbill_core::compute::{recompute, aggregate};
//!
//! let mut item = InvoiceItem::new();
//! item.quantity = 10.0;
//! item.rate = 100.0;
//! item.gst_rate = 18.0;
//! let item = recompute(&item);
//! assert_eq!(item.tax_amount, 180.0);
//! assert_eq!(item.amount, 1180.0);
//!
//! let totals = aggregate(&[item], 9.0, 9.0);
//! assert_eq!(totals.total_amount, 1180.0);
//! ```

use crate::types::{InvoiceData, InvoiceItem, InvoiceTotals, TaxBreakdown, TaxBreakdownRow};

// =============================================================================
// Input Coercion
// =============================================================================

/// Coerces a numeric form value into the domain the computation accepts.
///
/// ## Policy
/// Negative, NaN, and infinite values all become `0.0`. This is the
/// documented edge-case policy for form input: bad numbers are silently
/// zeroed at the boundary, never propagated as NaN and never surfaced as
/// an error mid-keystroke.
#[inline]
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Line-Item Arithmetic
// =============================================================================

/// Recomputes the derived fields of a line item.
///
/// Pure function: returns an updated copy, touching only `tax_amount` and
/// `amount`. Invoked after every mutation of `quantity`, `rate`, or
/// `gst_rate` - an explicit call, not an ambient reactive subscription, so
/// the arithmetic stays deterministic and testable in isolation.
///
/// ## Invariants
/// - `tax_amount = quantity * rate * gst_rate / 100`
/// - `amount = quantity * rate + tax_amount`
///
/// Inputs are expected to have passed [`coerce_amount`] already.
pub fn recompute(item: &InvoiceItem) -> InvoiceItem {
    let taxable = item.quantity * item.rate;
    let tax_amount = taxable * item.gst_rate / 100.0;

    InvoiceItem {
        tax_amount,
        amount: taxable + tax_amount,
        ..item.clone()
    }
}

// =============================================================================
// Invoice Aggregation
// =============================================================================

/// Rolls line items up into invoice-level totals.
///
/// Pure, deterministic, order-independent sum. An empty item list yields
/// all-zero totals - it must not fail.
///
/// ## Note
/// The invoice-level CGST/SGST amounts are computed from the *subtotal*
/// and the invoice-level rates, independent of each item's own `gst_rate`
/// (which only drives the per-item `tax_amount` column).
pub fn aggregate(items: &[InvoiceItem], cgst_rate: f64, sgst_rate: f64) -> InvoiceTotals {
    let subtotal: f64 = items.iter().map(InvoiceItem::taxable_value).sum();
    let cgst_amount = subtotal * cgst_rate / 100.0;
    let sgst_amount = subtotal * sgst_rate / 100.0;

    InvoiceTotals {
        subtotal,
        cgst_amount,
        sgst_amount,
        total_amount: subtotal + cgst_amount + sgst_amount,
    }
}

/// Builds the per-HSN/SAC tax breakdown table.
///
/// ## Grouping Policy
/// One row per line item, even when several items share an HSN code. The
/// printed layout depends on this exact shape; merging rows by code would
/// change the statutory output.
pub fn tax_breakdown(invoice: &InvoiceData) -> TaxBreakdown {
    let rows: Vec<TaxBreakdownRow> = invoice
        .items
        .iter()
        .map(|item| {
            let taxable = item.taxable_value();
            TaxBreakdownRow {
                hsn_sac: item.hsn_sac.clone(),
                taxable_value: taxable,
                cgst_rate: invoice.cgst_rate,
                cgst_amount: taxable * invoice.cgst_rate / 100.0,
                sgst_rate: invoice.sgst_rate,
                sgst_amount: taxable * invoice.sgst_rate / 100.0,
                total_tax: item.tax_amount,
            }
        })
        .collect();

    let total_taxable_value: f64 = rows.iter().map(|r| r.taxable_value).sum();
    let total_cgst_amount: f64 = rows.iter().map(|r| r.cgst_amount).sum();
    let total_sgst_amount: f64 = rows.iter().map(|r| r.sgst_amount).sum();

    TaxBreakdown {
        rows,
        total_taxable_value,
        total_cgst_amount,
        total_sgst_amount,
        total_tax_amount: total_cgst_amount + total_sgst_amount,
    }
}

// =============================================================================
// Default Fallback Resolution
// =============================================================================

/// Resolves an overridable field against its configured default.
///
/// Returns `explicit` when it is non-empty (after trimming), else
/// `fallback`. Applied uniformly at render time, never at mutation time,
/// so the configured default is a fallback and is never overwritten or
/// copied into the document.
#[inline]
pub fn resolve_field<'a>(explicit: &'a str, fallback: &'a str) -> &'a str {
    if explicit.trim().is_empty() {
        fallback
    } else {
        explicit
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Formats an amount for display with exactly two decimal places.
///
/// This is the only place rounding happens; everything upstream keeps full
/// precision.
#[inline]
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn item(quantity: f64, rate: f64, gst_rate: f64) -> InvoiceItem {
        let mut i = InvoiceItem::new();
        i.quantity = quantity;
        i.rate = rate;
        i.gst_rate = gst_rate;
        recompute(&i)
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount(12.5), 12.5);
        assert_eq!(coerce_amount(0.0), 0.0);
        assert_eq!(coerce_amount(-3.0), 0.0);
        assert_eq!(coerce_amount(f64::NAN), 0.0);
        assert_eq!(coerce_amount(f64::INFINITY), 0.0);
        assert_eq!(coerce_amount(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_recompute_formulas() {
        let i = item(10.0, 100.0, 18.0);
        assert!((i.tax_amount - 180.0).abs() < EPS);
        assert!((i.amount - 1180.0).abs() < EPS);
    }

    #[test]
    fn test_recompute_fractional() {
        let i = item(2.5, 99.99, 12.0);
        let taxable = 2.5 * 99.99;
        assert!((i.tax_amount - taxable * 0.12).abs() < EPS);
        assert!((i.amount - (taxable + i.tax_amount)).abs() < EPS);
    }

    #[test]
    fn test_recompute_zero_inputs() {
        let i = item(0.0, 0.0, 18.0);
        assert_eq!(i.tax_amount, 0.0);
        assert_eq!(i.amount, 0.0);
    }

    #[test]
    fn test_aggregate_empty_is_all_zero() {
        let totals = aggregate(&[], 9.0, 9.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.cgst_amount, 0.0);
        assert_eq!(totals.sgst_amount, 0.0);
        assert_eq!(totals.total_amount, 0.0);
    }

    #[test]
    fn test_aggregate_spec_scenario() {
        // items=[{qty:10, rate:100, gstRate:18}], cgst=9, sgst=9
        let i = item(10.0, 100.0, 18.0);
        assert!((i.tax_amount - 180.0).abs() < EPS);
        assert!((i.amount - 1180.0).abs() < EPS);

        let totals = aggregate(&[i], 9.0, 9.0);
        assert!((totals.subtotal - 1000.0).abs() < EPS);
        assert!((totals.cgst_amount - 90.0).abs() < EPS);
        assert!((totals.sgst_amount - 90.0).abs() < EPS);
        assert!((totals.total_amount - 1180.0).abs() < EPS);
    }

    #[test]
    fn test_aggregate_uses_invoice_rates_not_item_rates() {
        // Item gstRate is 28 but invoice-level split is 9 + 9: the
        // invoice totals must follow the invoice-level rates.
        let i = item(4.0, 250.0, 28.0);
        let totals = aggregate(&[i], 9.0, 9.0);
        assert!((totals.subtotal - 1000.0).abs() < EPS);
        assert!((totals.cgst_amount - 90.0).abs() < EPS);
        assert!((totals.sgst_amount - 90.0).abs() < EPS);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let a = item(1.0, 10.0, 18.0);
        let b = item(3.0, 7.5, 12.0);
        let c = item(0.5, 1999.0, 5.0);

        let t1 = aggregate(&[a.clone(), b.clone(), c.clone()], 9.0, 9.0);
        let t2 = aggregate(&[c, a, b], 9.0, 9.0);
        assert!((t1.subtotal - t2.subtotal).abs() < EPS);
        assert!((t1.total_amount - t2.total_amount).abs() < EPS);
    }

    #[test]
    fn test_tax_breakdown_row_per_item() {
        let mut invoice = InvoiceData::default_template();
        let mut first = item(10.0, 100.0, 18.0);
        first.hsn_sac = "3926".to_string();
        let mut second = item(2.0, 50.0, 18.0);
        // Same HSN code on purpose: rows must stay separate.
        second.hsn_sac = "3926".to_string();
        invoice.items = vec![first, second];
        invoice.cgst_rate = 9.0;
        invoice.sgst_rate = 9.0;

        let breakdown = tax_breakdown(&invoice);
        assert_eq!(breakdown.rows.len(), 2);
        assert!((breakdown.rows[0].taxable_value - 1000.0).abs() < EPS);
        assert!((breakdown.rows[0].cgst_amount - 90.0).abs() < EPS);
        assert!((breakdown.rows[1].taxable_value - 100.0).abs() < EPS);
        assert!((breakdown.rows[1].sgst_amount - 9.0).abs() < EPS);

        assert!((breakdown.total_taxable_value - 1100.0).abs() < EPS);
        assert!((breakdown.total_cgst_amount - 99.0).abs() < EPS);
        assert!((breakdown.total_sgst_amount - 99.0).abs() < EPS);
        assert!((breakdown.total_tax_amount - 198.0).abs() < EPS);
    }

    #[test]
    fn test_resolve_field() {
        assert_eq!(resolve_field("TAX INVOICE", "DEFAULT"), "TAX INVOICE");
        assert_eq!(resolve_field("", "DEFAULT"), "DEFAULT");
        assert_eq!(resolve_field("   ", "DEFAULT"), "DEFAULT");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1180.0), "1180.00");
        assert_eq!(format_amount(0.825), "0.83");
        assert_eq!(format_amount(0.0), "0.00");
    }
}

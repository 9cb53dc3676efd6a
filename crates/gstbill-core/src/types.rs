//! # Document Types
//!
//! Core document types used throughout GstBill.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Document Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InvoiceData    │   │  InvoiceItem    │   │ InvoiceSettings │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  header fields  │◄──│  id             │   │  title/copyType │       │
//! │  │  party fields   │   │  hsnSac         │   │  supplier block │       │
//! │  │  items[]        │   │  gstRate        │   │  bank block     │       │
//! │  │  cgst/sgst rate │   │  qty, rate      │   │  logo/signature │       │
//! │  │  bank fields    │   │  tax, amount    │   │  (fallbacks)    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ InvoiceTotals   │   │  TaxBreakdown   │  derived, never stored      │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Contract
//! Every struct serializes camelCase to match the backend JSON contract:
//! monetary values are plain decimal numbers, dates are "YYYY-MM-DD"
//! strings. `taxAmount`/`amount` on items are derived but still transmitted,
//! so they are fields (recomputed on every edit), not methods.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{DATE_FORMAT, DEFAULT_GST_RATE_PERCENT};

// =============================================================================
// Invoice Item
// =============================================================================

/// One row of the invoice items table.
///
/// `tax_amount` and `amount` are derived; [`crate::compute::recompute`]
/// rewrites them whenever `quantity`, `rate`, or `gst_rate` changes. They
/// are never accepted from user edits directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceItem {
    /// Unique within the invoice (UUID v4 for new rows).
    pub id: String,

    /// Description of goods shown in the items table.
    pub description: String,

    /// HSN/SAC classification code.
    pub hsn_sac: String,

    /// Item GST rate in percent (e.g. 18.0).
    pub gst_rate: f64,

    /// Quantity in units.
    pub quantity: f64,

    /// Unit rate in rupees.
    pub rate: f64,

    /// Derived: quantity * rate * gst_rate / 100.
    pub tax_amount: f64,

    /// Derived: quantity * rate + tax_amount.
    pub amount: f64,
}

impl InvoiceItem {
    /// Creates a blank row with a generated id and zeroed numerics.
    ///
    /// This is what the "Add Item" action produces: empty description and
    /// HSN code, the default GST rate, and all amounts at zero.
    pub fn new() -> Self {
        InvoiceItem {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            hsn_sac: String::new(),
            gst_rate: DEFAULT_GST_RATE_PERCENT,
            quantity: 0.0,
            rate: 0.0,
            tax_amount: 0.0,
            amount: 0.0,
        }
    }

    /// The placeholder row carried by the default invoice template.
    pub fn placeholder() -> Self {
        InvoiceItem {
            id: "1".to_string(),
            description: "NA".to_string(),
            hsn_sac: "--".to_string(),
            gst_rate: DEFAULT_GST_RATE_PERCENT,
            quantity: 0.0,
            rate: 0.0,
            tax_amount: 0.0,
            amount: 0.0,
        }
    }

    /// Taxable value of this row (quantity * rate, before tax).
    #[inline]
    pub fn taxable_value(&self) -> f64 {
        self.quantity * self.rate
    }
}

impl Default for InvoiceItem {
    fn default() -> Self {
        InvoiceItem::new()
    }
}

// =============================================================================
// Invoice Document
// =============================================================================

/// The full invoice document as edited, transmitted, and persisted.
///
/// ## Overridable fields
/// `title`, `copy_type`, the supplier identity fields, and the bank fields
/// are *overridable*: an empty string means "use the configured default from
/// [`InvoiceSettings`] at render time". The default is a fallback, never
/// copied into the document, so later settings changes flow through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceData {
    // Header
    pub title: String,
    pub copy_type: String,

    // Basic info
    pub invoice_to: String,
    pub billing_address: String,
    pub invoice_no: String,
    /// "YYYY-MM-DD"
    pub dated: String,
    pub delivery_challen_date: String,
    pub mode_of_payments: String,
    pub reference_no: String,
    pub ref_date: String,

    // GSTIN/UIN
    pub supplier_gstin: String,
    pub supplier_state: String,
    pub supplier_code: String,

    pub buyer_gstin: String,
    pub buyer_order_no: String,
    pub buyer_order_date: String,

    // Dispatch details
    pub shipping_address: String,
    pub dispatch_doc_no: String,
    pub dispatched_through: String,
    pub destination: String,
    pub terms_of_delivery: String,

    // Items
    pub items: Vec<InvoiceItem>,

    // Invoice-level tax rates (percent)
    pub cgst_rate: f64,
    pub sgst_rate: f64,

    // Declaration
    pub declaration: String,
    pub authorized_signatory: String,

    // Bank details (overridable)
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub branch_name: String,
    pub ifsc_code: String,
}

impl InvoiceData {
    /// The fixed default template a fresh editor session starts from.
    ///
    /// One placeholder line item, today's date, "NA" markers for the
    /// free-text logistics fields, 9% + 9% GST split. Overridable fields
    /// are left empty so the settings fallback applies.
    pub fn default_template() -> Self {
        let today = Utc::now().format(DATE_FORMAT).to_string();

        InvoiceData {
            title: String::new(),
            copy_type: String::new(),
            invoice_to: "Data Not Provided".to_string(),
            billing_address: "Data Not Provided".to_string(),
            shipping_address: "Data Not Provided".to_string(),
            reference_no: "NA".to_string(),
            ref_date: "NA".to_string(),
            invoice_no: "00000".to_string(),
            dated: today.clone(),
            delivery_challen_date: "NA".to_string(),
            mode_of_payments: "NA".to_string(),
            supplier_gstin: String::new(),
            supplier_state: String::new(),
            supplier_code: String::new(),
            buyer_gstin: "NA".to_string(),
            buyer_order_no: "0000".to_string(),
            buyer_order_date: today,
            dispatch_doc_no: "NA".to_string(),
            dispatched_through: "NA".to_string(),
            destination: "NA".to_string(),
            terms_of_delivery: "NA".to_string(),
            items: vec![InvoiceItem::placeholder()],
            cgst_rate: 9.0,
            sgst_rate: 9.0,
            declaration: default_declaration(),
            authorized_signatory: String::new(),
            bank_name: String::new(),
            account_name: String::new(),
            account_number: String::new(),
            branch_name: String::new(),
            ifsc_code: String::new(),
        }
    }

    /// Looks up a line item by id.
    pub fn item(&self, id: &str) -> Option<&InvoiceItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

impl Default for InvoiceData {
    fn default() -> Self {
        InvoiceData::default_template()
    }
}

/// Statutory declaration text printed at the foot of every invoice.
fn default_declaration() -> String {
    "Interest @24% will be charged on the bill if not paid on the due date.\n\
     Goods are sent at owner's risk and our responsibility ceases on the goods leaving our premises.\n\
     Goods once sold will not be taken back.\n\
     Certify that the particulars given above are true and correct. Subject to PUNE Jurisdiction, E. & O.E.\n\
     Kindly check your GST Number and inform us in case of a wrong or missing GST Number; we shall not be \
     liable for disallowance of your input tax credit for a wrong or missing GST Number."
        .to_string()
}

// =============================================================================
// Invoice Settings
// =============================================================================

/// Session-wide defaults used as fallbacks for overridable invoice fields,
/// plus the static assets (logo, signature) referenced by path or data-URI.
///
/// Settings are process-wide for the session; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceSettings {
    // Header settings
    pub title: String,
    pub copy_type: String,
    /// Path or data-URI of the company logo; empty = no logo.
    pub company_logo: String,
    /// Path or data-URI of the signature/stamp image; empty = none.
    pub signature: String,

    // Supplier settings
    pub supplier_name: String,
    pub supplier_address: String,
    pub supplier_gstin: String,
    pub supplier_state: String,
    pub supplier_code: String,
    pub supplier_contact: String,

    // Bank settings
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub branch_name: String,
    pub ifsc_code: String,
}

impl Default for InvoiceSettings {
    /// Returns the seeded supplier profile used until the user edits the
    /// settings tab.
    fn default() -> Self {
        InvoiceSettings {
            title: "TAX INVOICE".to_string(),
            copy_type: "(Original Copy)".to_string(),
            company_logo: "/logo.png".to_string(),
            signature: "/sign-and-stamp.jpg".to_string(),
            supplier_name: "Shree Ganesh Enterprises".to_string(),
            supplier_address: "Plot 12, MIDC Industrial Area, Chinchwad, Pune - 411019".to_string(),
            supplier_gstin: "27ABCDE1234F1Z5".to_string(),
            supplier_state: "Maharashtra".to_string(),
            supplier_code: "27".to_string(),
            supplier_contact: "9800000000".to_string(),
            bank_name: "Axis Bank Ltd.".to_string(),
            account_name: "Shree Ganesh Enterprises".to_string(),
            account_number: "923020000000000".to_string(),
            branch_name: "Chinchwad Branch, Pune 411019".to_string(),
            ifsc_code: "UTIB0002654".to_string(),
        }
    }
}

// =============================================================================
// Derived Totals
// =============================================================================

/// Invoice-level totals, computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceTotals {
    /// Σ(quantity * rate) over all items.
    pub subtotal: f64,
    /// subtotal * cgst_rate / 100.
    pub cgst_amount: f64,
    /// subtotal * sgst_rate / 100.
    pub sgst_amount: f64,
    /// subtotal + cgst_amount + sgst_amount.
    pub total_amount: f64,
}

/// One row of the per-HSN tax breakdown table.
///
/// The breakdown is rendered per line item - items sharing an HSN code each
/// keep their own row. This matches the printed output exactly and must not
/// be "improved" by merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaxBreakdownRow {
    pub hsn_sac: String,
    pub taxable_value: f64,
    pub cgst_rate: f64,
    pub cgst_amount: f64,
    pub sgst_rate: f64,
    pub sgst_amount: f64,
    /// The item's own derived tax amount (per-item gstRate), shown in the
    /// "Total Tax Amount" column.
    pub total_tax: f64,
}

/// The full breakdown table: one row per item plus the trailing totals row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaxBreakdown {
    pub rows: Vec<TaxBreakdownRow>,
    /// Trailing row: summed taxable value, CGST, SGST across all items.
    pub total_taxable_value: f64,
    pub total_cgst_amount: f64,
    pub total_sgst_amount: f64,
    /// total_cgst_amount + total_sgst_amount.
    pub total_tax_amount: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_zeroed() {
        let item = InvoiceItem::new();
        assert!(!item.id.is_empty());
        assert_eq!(item.quantity, 0.0);
        assert_eq!(item.rate, 0.0);
        assert_eq!(item.tax_amount, 0.0);
        assert_eq!(item.amount, 0.0);
        assert_eq!(item.gst_rate, DEFAULT_GST_RATE_PERCENT);
    }

    #[test]
    fn test_default_template() {
        let invoice = InvoiceData::default_template();
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.cgst_rate, 9.0);
        assert_eq!(invoice.sgst_rate, 9.0);
        assert_eq!(invoice.invoice_no, "00000");
        // Overridable fields stay empty so the settings fallback applies.
        assert!(invoice.title.is_empty());
        assert!(invoice.bank_name.is_empty());
        // dated is today in YYYY-MM-DD.
        assert_eq!(invoice.dated.len(), 10);
        assert_eq!(invoice.dated, invoice.buyer_order_date);
    }

    #[test]
    fn test_item_lookup() {
        let invoice = InvoiceData::default_template();
        assert!(invoice.item("1").is_some());
        assert!(invoice.item("nope").is_none());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let item = InvoiceItem::placeholder();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("hsnSac").is_some());
        assert!(json.get("gstRate").is_some());
        assert!(json.get("taxAmount").is_some());
        assert!(json.get("hsn_sac").is_none());

        let invoice = InvoiceData::default_template();
        let json = serde_json::to_value(&invoice).unwrap();
        assert!(json.get("invoiceTo").is_some());
        assert!(json.get("cgstRate").is_some());
    }
}

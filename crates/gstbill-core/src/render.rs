//! # Render Model
//!
//! Builds the fully-resolved, print-ready view of an invoice.
//!
//! The editor works on raw [`InvoiceData`]; the printable page needs every
//! fallback resolved, every derived figure computed, and every amount
//! formatted with two decimals. [`render_invoice`] produces that view as
//! plain data - the frontend (and the PDF export) lay it out, they never
//! compute.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   InvoiceData + InvoiceSettings                                         │
//! │        │                                                                │
//! │        ├── resolve_field()  title, copyType, supplier, bank             │
//! │        ├── aggregate()      subtotal, CGST, SGST, total                 │
//! │        ├── tax_breakdown()  per-item HSN rows + totals row              │
//! │        └── amount_in_words() grand total + combined tax                 │
//! │        ▼                                                                │
//! │   RenderedInvoice (serializable, ready to print)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::compute::{aggregate, format_amount, resolve_field, tax_breakdown};
use crate::types::{InvoiceData, InvoiceSettings};
use crate::words::amount_in_words;

// =============================================================================
// Rendered View Types
// =============================================================================

/// Supplier identity block shown in the invoice header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedSupplier {
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub contact: String,
    pub state: String,
    pub code: String,
    /// Path or data-URI; empty = no logo rendered.
    pub company_logo: String,
}

/// One formatted row of the items table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedItem {
    /// 1-based serial number.
    pub sr_no: usize,
    pub description: String,
    pub hsn_sac: String,
    pub gst_rate: f64,
    /// Two-decimal display strings; the numbers live on InvoiceData.
    pub quantity: String,
    pub rate: String,
    pub tax_amount: String,
    pub amount: String,
}

/// Formatted invoice-level totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedTotals {
    pub subtotal: String,
    pub cgst_rate: f64,
    pub cgst_amount: String,
    pub sgst_rate: f64,
    pub sgst_amount: String,
    pub total_amount: String,
}

/// One formatted row of the tax breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedBreakdownRow {
    pub hsn_sac: String,
    pub taxable_value: String,
    pub cgst_rate: f64,
    pub cgst_amount: String,
    pub sgst_rate: f64,
    pub sgst_amount: String,
    pub total_tax: String,
}

/// Resolved bank details block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedBank {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub branch_name: String,
    pub ifsc_code: String,
}

/// The complete print-ready invoice.
///
/// Single printable page region: header, items table, totals, tax
/// breakdown, both in-words lines, bank/declaration/signature sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedInvoice {
    // Header (fallback-resolved)
    pub title: String,
    pub copy_type: String,
    pub supplier: RenderedSupplier,

    // Party / logistics fields (pass-through)
    pub invoice_to: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub invoice_no: String,
    pub dated: String,
    pub buyer_gstin: String,
    pub buyer_order_no: String,
    pub buyer_order_date: String,
    pub mode_of_payments: String,
    pub reference_no: String,
    pub ref_date: String,
    pub dispatch_doc_no: String,
    pub delivery_challen_date: String,
    pub dispatched_through: String,
    pub destination: String,
    pub terms_of_delivery: String,

    // Computed tables
    pub items: Vec<RenderedItem>,
    pub totals: RenderedTotals,
    pub tax_breakdown_rows: Vec<RenderedBreakdownRow>,
    pub tax_breakdown_total_taxable: String,
    pub tax_breakdown_total_cgst: String,
    pub tax_breakdown_total_sgst: String,
    pub tax_breakdown_total_tax: String,

    // Statutory in-words lines
    pub amount_chargeable_in_words: String,
    pub tax_amount_in_words: String,

    // Foot sections
    pub bank: RenderedBank,
    pub declaration: String,
    pub authorized_signatory: String,
    /// Path or data-URI of the signature/stamp image.
    pub signature: String,
}

// =============================================================================
// Rendering
// =============================================================================

/// Resolves and computes everything the printable page needs.
///
/// Fallback resolution happens here, at render time, for every overridable
/// field - the document itself keeps its explicit (possibly empty) values.
pub fn render_invoice(invoice: &InvoiceData, settings: &InvoiceSettings) -> RenderedInvoice {
    let totals = aggregate(&invoice.items, invoice.cgst_rate, invoice.sgst_rate);
    let breakdown = tax_breakdown(invoice);

    let items = invoice
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| RenderedItem {
            sr_no: index + 1,
            description: item.description.clone(),
            hsn_sac: item.hsn_sac.clone(),
            gst_rate: item.gst_rate,
            quantity: format_amount(item.quantity),
            rate: format_amount(item.rate),
            tax_amount: format_amount(item.tax_amount),
            amount: format_amount(item.amount),
        })
        .collect();

    let tax_breakdown_rows = breakdown
        .rows
        .iter()
        .map(|row| RenderedBreakdownRow {
            hsn_sac: row.hsn_sac.clone(),
            taxable_value: format_amount(row.taxable_value),
            cgst_rate: row.cgst_rate,
            cgst_amount: format_amount(row.cgst_amount),
            sgst_rate: row.sgst_rate,
            sgst_amount: format_amount(row.sgst_amount),
            total_tax: format_amount(row.total_tax),
        })
        .collect();

    RenderedInvoice {
        title: resolve_field(&invoice.title, &settings.title).to_string(),
        copy_type: resolve_field(&invoice.copy_type, &settings.copy_type).to_string(),
        supplier: RenderedSupplier {
            name: settings.supplier_name.clone(),
            address: settings.supplier_address.clone(),
            gstin: resolve_field(&invoice.supplier_gstin, &settings.supplier_gstin).to_string(),
            contact: settings.supplier_contact.clone(),
            state: resolve_field(&invoice.supplier_state, &settings.supplier_state).to_string(),
            code: resolve_field(&invoice.supplier_code, &settings.supplier_code).to_string(),
            company_logo: settings.company_logo.clone(),
        },
        invoice_to: invoice.invoice_to.clone(),
        billing_address: invoice.billing_address.clone(),
        shipping_address: invoice.shipping_address.clone(),
        invoice_no: invoice.invoice_no.clone(),
        dated: invoice.dated.clone(),
        buyer_gstin: invoice.buyer_gstin.clone(),
        buyer_order_no: invoice.buyer_order_no.clone(),
        buyer_order_date: invoice.buyer_order_date.clone(),
        mode_of_payments: invoice.mode_of_payments.clone(),
        reference_no: invoice.reference_no.clone(),
        ref_date: invoice.ref_date.clone(),
        dispatch_doc_no: invoice.dispatch_doc_no.clone(),
        delivery_challen_date: invoice.delivery_challen_date.clone(),
        dispatched_through: invoice.dispatched_through.clone(),
        destination: invoice.destination.clone(),
        terms_of_delivery: invoice.terms_of_delivery.clone(),
        items,
        totals: RenderedTotals {
            subtotal: format_amount(totals.subtotal),
            cgst_rate: invoice.cgst_rate,
            cgst_amount: format_amount(totals.cgst_amount),
            sgst_rate: invoice.sgst_rate,
            sgst_amount: format_amount(totals.sgst_amount),
            total_amount: format_amount(totals.total_amount),
        },
        tax_breakdown_rows,
        tax_breakdown_total_taxable: format_amount(breakdown.total_taxable_value),
        tax_breakdown_total_cgst: format_amount(breakdown.total_cgst_amount),
        tax_breakdown_total_sgst: format_amount(breakdown.total_sgst_amount),
        tax_breakdown_total_tax: format_amount(breakdown.total_tax_amount),
        amount_chargeable_in_words: amount_in_words(totals.total_amount),
        tax_amount_in_words: amount_in_words(totals.cgst_amount + totals.sgst_amount),
        bank: RenderedBank {
            account_name: resolve_field(&invoice.account_name, &settings.account_name).to_string(),
            account_number: resolve_field(&invoice.account_number, &settings.account_number)
                .to_string(),
            bank_name: resolve_field(&invoice.bank_name, &settings.bank_name).to_string(),
            branch_name: resolve_field(&invoice.branch_name, &settings.branch_name).to_string(),
            ifsc_code: resolve_field(&invoice.ifsc_code, &settings.ifsc_code).to_string(),
        },
        declaration: invoice.declaration.clone(),
        authorized_signatory: invoice.authorized_signatory.clone(),
        signature: settings.signature.clone(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::recompute;
    use crate::types::InvoiceItem;

    fn scenario_invoice() -> InvoiceData {
        let mut invoice = InvoiceData::default_template();
        let mut item = InvoiceItem::new();
        item.description = "Industrial Gasket".to_string();
        item.hsn_sac = "8484".to_string();
        item.quantity = 10.0;
        item.rate = 100.0;
        item.gst_rate = 18.0;
        invoice.items = vec![recompute(&item)];
        invoice
    }

    #[test]
    fn test_fallbacks_resolve_at_render_time() {
        let invoice = scenario_invoice();
        let settings = InvoiceSettings::default();
        let rendered = render_invoice(&invoice, &settings);

        // Template leaves overridables empty; settings win.
        assert_eq!(rendered.title, settings.title);
        assert_eq!(rendered.bank.bank_name, settings.bank_name);
        assert_eq!(rendered.supplier.gstin, settings.supplier_gstin);
    }

    #[test]
    fn test_explicit_value_beats_default() {
        let mut invoice = scenario_invoice();
        invoice.title = "PROFORMA INVOICE".to_string();
        invoice.bank_name = "HDFC Bank".to_string();
        let rendered = render_invoice(&invoice, &InvoiceSettings::default());

        assert_eq!(rendered.title, "PROFORMA INVOICE");
        assert_eq!(rendered.bank.bank_name, "HDFC Bank");
        // The document itself still holds the explicit values only; the
        // default was never copied in.
        assert_eq!(invoice.copy_type, "");
    }

    #[test]
    fn test_totals_and_words_lines() {
        let rendered = render_invoice(&scenario_invoice(), &InvoiceSettings::default());

        assert_eq!(rendered.totals.subtotal, "1000.00");
        assert_eq!(rendered.totals.cgst_amount, "90.00");
        assert_eq!(rendered.totals.sgst_amount, "90.00");
        assert_eq!(rendered.totals.total_amount, "1180.00");
        assert_eq!(
            rendered.amount_chargeable_in_words,
            "Rupees One Thousand One Hundred Eighty Only"
        );
        assert_eq!(
            rendered.tax_amount_in_words,
            "Rupees One Hundred Eighty Only"
        );
    }

    #[test]
    fn test_item_rows_formatted() {
        let rendered = render_invoice(&scenario_invoice(), &InvoiceSettings::default());

        assert_eq!(rendered.items.len(), 1);
        let row = &rendered.items[0];
        assert_eq!(row.sr_no, 1);
        assert_eq!(row.quantity, "10.00");
        assert_eq!(row.rate, "100.00");
        assert_eq!(row.tax_amount, "180.00");
        assert_eq!(row.amount, "1180.00");
    }

    #[test]
    fn test_breakdown_totals_row() {
        let rendered = render_invoice(&scenario_invoice(), &InvoiceSettings::default());

        assert_eq!(rendered.tax_breakdown_rows.len(), 1);
        assert_eq!(rendered.tax_breakdown_total_taxable, "1000.00");
        assert_eq!(rendered.tax_breakdown_total_tax, "180.00");
    }
}

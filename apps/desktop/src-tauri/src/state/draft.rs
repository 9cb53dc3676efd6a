//! # Draft State
//!
//! Manages the invoice draft currently open in the editor.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the draft
//! 2. Only one command should modify the draft at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft State Operations                               │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Draft State Change    │
//! │  ───────────────          ─────────────           ──────────────────    │
//! │                                                                         │
//! │  Edit Form Field ────────► update_invoice() ────► apply(patch)         │
//! │                                                                         │
//! │  Toggle "Same" Box ──────► set_shipping_same() ─► mirror billing       │
//! │                                                                         │
//! │  Click Add Item ─────────► add_item() ──────────► items.push(blank)    │
//! │                                                                         │
//! │  Edit Item Cell ─────────► update_item() ───────► coerce + recompute   │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  New Invoice ────────────► reset_invoice() ─────► default template     │
//! │                                                                         │
//! │  NOTE: Every patch is applied under one lock acquisition, so the        │
//! │        billing → shipping mirror can never be observed half-done.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use gstbill_core::compute::{aggregate, coerce_amount, recompute};
use gstbill_core::{CoreError, CoreResult, InvoiceData, InvoiceItem, InvoiceTotals, MAX_LINE_ITEMS};

/// Partial update for the invoice document.
///
/// Every field is optional; only present fields are applied. Line items
/// have their own operations and are never patched through this struct,
/// and the derived `taxAmount`/`amount` values are never accepted from
/// the frontend at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    // Header
    pub title: Option<String>,
    pub copy_type: Option<String>,

    // Basic info
    pub invoice_to: Option<String>,
    pub billing_address: Option<String>,
    pub invoice_no: Option<String>,
    pub dated: Option<String>,
    pub delivery_challen_date: Option<String>,
    pub mode_of_payments: Option<String>,
    pub reference_no: Option<String>,
    pub ref_date: Option<String>,

    // GSTIN/UIN
    pub supplier_gstin: Option<String>,
    pub supplier_state: Option<String>,
    pub supplier_code: Option<String>,

    pub buyer_gstin: Option<String>,
    pub buyer_order_no: Option<String>,
    pub buyer_order_date: Option<String>,

    // Dispatch details
    pub shipping_address: Option<String>,
    pub dispatch_doc_no: Option<String>,
    pub dispatched_through: Option<String>,
    pub destination: Option<String>,
    pub terms_of_delivery: Option<String>,

    // Invoice-level tax rates (percent)
    pub cgst_rate: Option<f64>,
    pub sgst_rate: Option<f64>,

    // Declaration
    pub declaration: Option<String>,
    pub authorized_signatory: Option<String>,

    // Bank details
    pub bank_name: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub branch_name: Option<String>,
    pub ifsc_code: Option<String>,
}

/// Partial update for one line item.
///
/// `taxAmount` and `amount` are deliberately absent: they are derived and
/// recomputed after every edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub description: Option<String>,
    pub hsn_sac: Option<String>,
    pub gst_rate: Option<f64>,
    pub quantity: Option<f64>,
    pub rate: Option<f64>,
}

/// The invoice draft being edited.
///
/// ## Invariants
/// - `items` is never empty (removal of the last item is rejected)
/// - At most [`MAX_LINE_ITEMS`] items
/// - While `shipping_same` is true, `shipping_address` always equals
///   `billing_address`
/// - Item `taxAmount`/`amount` are recomputed after every numeric edit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// The document itself.
    pub invoice: InvoiceData,

    /// "Shipping address same as billing" checkbox.
    pub shipping_same: bool,
}

impl Draft {
    /// Creates a fresh draft from the default template.
    ///
    /// The template starts with shipping equal to billing, so the mirror
    /// checkbox starts checked.
    pub fn new() -> Self {
        Draft {
            invoice: InvoiceData::default_template(),
            shipping_same: true,
        }
    }

    /// Applies a partial document update.
    ///
    /// ## Mirroring
    /// When `shipping_same` is true, a patch to `billing_address` also
    /// rewrites `shipping_address` in the same call, and any explicit
    /// `shipping_address` in the patch is ignored (the field is hidden in
    /// the editor while the box is checked).
    ///
    /// ## Numeric Coercion
    /// The tax rates pass through [`coerce_amount`]: negative, NaN, and
    /// infinite values become 0.
    pub fn apply(&mut self, patch: InvoicePatch) {
        let invoice = &mut self.invoice;

        if let Some(v) = patch.title {
            invoice.title = v;
        }
        if let Some(v) = patch.copy_type {
            invoice.copy_type = v;
        }
        if let Some(v) = patch.invoice_to {
            invoice.invoice_to = v;
        }
        if let Some(v) = patch.billing_address {
            if self.shipping_same {
                invoice.shipping_address = v.clone();
            }
            invoice.billing_address = v;
        }
        if let Some(v) = patch.invoice_no {
            invoice.invoice_no = v;
        }
        if let Some(v) = patch.dated {
            invoice.dated = v;
        }
        if let Some(v) = patch.delivery_challen_date {
            invoice.delivery_challen_date = v;
        }
        if let Some(v) = patch.mode_of_payments {
            invoice.mode_of_payments = v;
        }
        if let Some(v) = patch.reference_no {
            invoice.reference_no = v;
        }
        if let Some(v) = patch.ref_date {
            invoice.ref_date = v;
        }
        if let Some(v) = patch.supplier_gstin {
            invoice.supplier_gstin = v;
        }
        if let Some(v) = patch.supplier_state {
            invoice.supplier_state = v;
        }
        if let Some(v) = patch.supplier_code {
            invoice.supplier_code = v;
        }
        if let Some(v) = patch.buyer_gstin {
            invoice.buyer_gstin = v;
        }
        if let Some(v) = patch.buyer_order_no {
            invoice.buyer_order_no = v;
        }
        if let Some(v) = patch.buyer_order_date {
            invoice.buyer_order_date = v;
        }
        if let Some(v) = patch.shipping_address {
            if !self.shipping_same {
                invoice.shipping_address = v;
            }
        }
        if let Some(v) = patch.dispatch_doc_no {
            invoice.dispatch_doc_no = v;
        }
        if let Some(v) = patch.dispatched_through {
            invoice.dispatched_through = v;
        }
        if let Some(v) = patch.destination {
            invoice.destination = v;
        }
        if let Some(v) = patch.terms_of_delivery {
            invoice.terms_of_delivery = v;
        }
        if let Some(v) = patch.cgst_rate {
            invoice.cgst_rate = coerce_amount(v);
        }
        if let Some(v) = patch.sgst_rate {
            invoice.sgst_rate = coerce_amount(v);
        }
        if let Some(v) = patch.declaration {
            invoice.declaration = v;
        }
        if let Some(v) = patch.authorized_signatory {
            invoice.authorized_signatory = v;
        }
        if let Some(v) = patch.bank_name {
            invoice.bank_name = v;
        }
        if let Some(v) = patch.account_name {
            invoice.account_name = v;
        }
        if let Some(v) = patch.account_number {
            invoice.account_number = v;
        }
        if let Some(v) = patch.branch_name {
            invoice.branch_name = v;
        }
        if let Some(v) = patch.ifsc_code {
            invoice.ifsc_code = v;
        }
    }

    /// Toggles the billing → shipping mirror.
    ///
    /// Turning the mirror ON copies the billing address into the shipping
    /// address immediately; turning it OFF leaves the shipping address as
    /// it stands, ready for independent editing.
    pub fn set_shipping_same(&mut self, same: bool) {
        self.shipping_same = same;
        if same {
            self.invoice.shipping_address = self.invoice.billing_address.clone();
        }
    }

    /// Appends a blank line item.
    ///
    /// ## Returns
    /// The new item (with its generated id) so the frontend can focus it.
    pub fn add_item(&mut self) -> CoreResult<InvoiceItem> {
        if self.invoice.items.len() >= MAX_LINE_ITEMS {
            return Err(CoreError::TooManyItems {
                max: MAX_LINE_ITEMS,
            });
        }

        let item = InvoiceItem::new();
        self.invoice.items.push(item.clone());
        Ok(item)
    }

    /// Patches a line item and recomputes its derived amounts.
    ///
    /// Numeric fields pass through [`coerce_amount`] first, then
    /// [`recompute`] rewrites `taxAmount` and `amount`. Edits are never
    /// rejected for their values; only an unknown id is an error.
    pub fn update_item(&mut self, item_id: &str, patch: ItemPatch) -> CoreResult<InvoiceItem> {
        let item = self
            .invoice
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        if let Some(v) = patch.description {
            item.description = v;
        }
        if let Some(v) = patch.hsn_sac {
            item.hsn_sac = v;
        }
        if let Some(v) = patch.gst_rate {
            item.gst_rate = coerce_amount(v);
        }
        if let Some(v) = patch.quantity {
            item.quantity = coerce_amount(v);
        }
        if let Some(v) = patch.rate {
            item.rate = coerce_amount(v);
        }

        *item = recompute(item);
        Ok(item.clone())
    }

    /// Removes a line item by id.
    ///
    /// Removing the last remaining item is rejected: the document always
    /// keeps at least one row.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        if self.invoice.items.len() <= 1 {
            return Err(CoreError::LastItemRemoval);
        }

        let initial_len = self.invoice.items.len();
        self.invoice.items.retain(|i| i.id != item_id);

        if self.invoice.items.len() == initial_len {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Discards the draft and starts over from the default template.
    pub fn reset(&mut self) {
        *self = Draft::new();
    }

    /// Current invoice-level totals.
    pub fn totals(&self) -> InvoiceTotals {
        aggregate(
            &self.invoice.items,
            self.invoice.cgst_rate,
            self.invoice.sgst_rate,
        )
    }
}

impl Default for Draft {
    fn default() -> Self {
        Draft::new()
    }
}

/// Tauri-managed draft state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Draft>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the draft at a time
///
/// ## Why Not RwLock?
/// Draft operations are typically quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct DraftState {
    draft: Arc<Mutex<Draft>>,
}

impl DraftState {
    /// Creates state holding a fresh default draft.
    pub fn new() -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(Draft::new())),
        }
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = draft_state.with_draft(|d| d.totals());
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Draft) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// draft_state.with_draft_mut(|d| d.add_item())?;
    /// ```
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Draft) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_starts_mirrored() {
        let draft = Draft::new();
        assert!(draft.shipping_same);
        assert_eq!(
            draft.invoice.shipping_address,
            draft.invoice.billing_address
        );
        assert_eq!(draft.invoice.items.len(), 1);
    }

    #[test]
    fn test_billing_patch_mirrors_shipping() {
        let mut draft = Draft::new();

        draft.apply(InvoicePatch {
            billing_address: Some("14 MG Road, Pune".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.invoice.billing_address, "14 MG Road, Pune");
        assert_eq!(draft.invoice.shipping_address, "14 MG Road, Pune");
    }

    #[test]
    fn test_shipping_patch_ignored_while_mirrored() {
        let mut draft = Draft::new();

        draft.apply(InvoicePatch {
            shipping_address: Some("Warehouse 7".to_string()),
            ..Default::default()
        });

        // The mirror wins while the checkbox is on.
        assert_eq!(
            draft.invoice.shipping_address,
            draft.invoice.billing_address
        );
    }

    #[test]
    fn test_unmirrored_shipping_is_independent() {
        let mut draft = Draft::new();
        draft.set_shipping_same(false);

        draft.apply(InvoicePatch {
            shipping_address: Some("Warehouse 7".to_string()),
            ..Default::default()
        });
        draft.apply(InvoicePatch {
            billing_address: Some("14 MG Road, Pune".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.invoice.shipping_address, "Warehouse 7");
        assert_eq!(draft.invoice.billing_address, "14 MG Road, Pune");
    }

    #[test]
    fn test_re_enabling_mirror_copies_billing() {
        let mut draft = Draft::new();
        draft.set_shipping_same(false);
        draft.apply(InvoicePatch {
            billing_address: Some("14 MG Road, Pune".to_string()),
            shipping_address: Some("Warehouse 7".to_string()),
            ..Default::default()
        });

        draft.set_shipping_same(true);
        assert_eq!(draft.invoice.shipping_address, "14 MG Road, Pune");
    }

    #[test]
    fn test_rate_patch_is_coerced() {
        let mut draft = Draft::new();

        draft.apply(InvoicePatch {
            cgst_rate: Some(-5.0),
            sgst_rate: Some(f64::NAN),
            ..Default::default()
        });

        assert_eq!(draft.invoice.cgst_rate, 0.0);
        assert_eq!(draft.invoice.sgst_rate, 0.0);
    }

    #[test]
    fn test_item_lifecycle() {
        let mut draft = Draft::new();

        let item = draft.add_item().unwrap();
        assert_eq!(draft.invoice.items.len(), 2);

        let updated = draft
            .update_item(
                &item.id,
                ItemPatch {
                    quantity: Some(10.0),
                    rate: Some(100.0),
                    gst_rate: Some(18.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.tax_amount, 180.0);
        assert_eq!(updated.amount, 1180.0);

        draft.remove_item(&item.id).unwrap();
        assert_eq!(draft.invoice.items.len(), 1);
    }

    #[test]
    fn test_item_edit_coerces_bad_numbers() {
        let mut draft = Draft::new();
        let id = draft.invoice.items[0].id.clone();

        let updated = draft
            .update_item(
                &id,
                ItemPatch {
                    quantity: Some(-3.0),
                    rate: Some(f64::INFINITY),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.quantity, 0.0);
        assert_eq!(updated.rate, 0.0);
        assert_eq!(updated.amount, 0.0);
    }

    #[test]
    fn test_last_item_cannot_be_removed() {
        let mut draft = Draft::new();
        let id = draft.invoice.items[0].id.clone();

        let err = draft.remove_item(&id).unwrap_err();
        assert!(matches!(err, CoreError::LastItemRemoval));
        assert_eq!(draft.invoice.items.len(), 1);
    }

    #[test]
    fn test_unknown_item_errors() {
        let mut draft = Draft::new();
        draft.add_item().unwrap();

        assert!(matches!(
            draft.update_item("nope", ItemPatch::default()),
            Err(CoreError::ItemNotFound(_))
        ));
        assert!(matches!(
            draft.remove_item("nope"),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_item_limit() {
        let mut draft = Draft::new();
        for _ in 0..(MAX_LINE_ITEMS - 1) {
            draft.add_item().unwrap();
        }
        assert_eq!(draft.invoice.items.len(), MAX_LINE_ITEMS);

        let err = draft.add_item().unwrap_err();
        assert!(matches!(err, CoreError::TooManyItems { .. }));
    }

    #[test]
    fn test_reset_restores_template() {
        let mut draft = Draft::new();
        draft.apply(InvoicePatch {
            invoice_no: Some("INV-42".to_string()),
            ..Default::default()
        });
        draft.add_item().unwrap();

        draft.reset();
        assert_eq!(draft.invoice.invoice_no, "00000");
        assert_eq!(draft.invoice.items.len(), 1);
        assert!(draft.shipping_same);
    }

    #[test]
    fn test_totals_follow_edits() {
        let mut draft = Draft::new();
        let id = draft.invoice.items[0].id.clone();

        draft
            .update_item(
                &id,
                ItemPatch {
                    quantity: Some(10.0),
                    rate: Some(100.0),
                    ..Default::default()
                },
            )
            .unwrap();

        let totals = draft.totals();
        assert_eq!(totals.subtotal, 1000.0);
        assert_eq!(totals.cgst_amount, 90.0);
        assert_eq!(totals.sgst_amount, 90.0);
        assert_eq!(totals.total_amount, 1180.0);
    }
}

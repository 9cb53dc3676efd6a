//! # Invoice Commands
//!
//! Tauri commands for editing the draft and building the print preview.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Default  │────►│ Editing  │────►│ Preview  │────►│Finalized │       │
//! │  │ Template │     │          │     │          │     │ Invoice  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   update_invoice    finalize_invoice                   │
//! │                   add_item          (backend.rs)                       │
//! │                   update_item                                           │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   reset_invoice ───────────────────►                   │
//! │                                                      (back to default) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Draft, DraftState, InvoicePatch, ItemPatch, SettingsState};
use gstbill_core::{render_invoice, InvoiceData, InvoiceTotals, RenderedInvoice};

/// Draft response including the document, the mirror flag, and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub invoice: InvoiceData,
    pub shipping_same: bool,
    pub totals: InvoiceTotals,
}

impl From<&Draft> for DraftResponse {
    fn from(draft: &Draft) -> Self {
        DraftResponse {
            invoice: draft.invoice.clone(),
            shipping_same: draft.shipping_same,
            totals: draft.totals(),
        }
    }
}

/// Gets the current draft.
///
/// ## When Used
/// - Editor mount (hydrate the form)
/// - After navigation back to the editor tab
///
/// ## Returns
/// Current draft with the document and calculated totals
#[tauri::command]
pub fn get_invoice(draft: State<'_, DraftState>) -> DraftResponse {
    debug!("get_invoice command");
    draft.with_draft(|d| DraftResponse::from(d))
}

/// Applies a partial update to the draft document.
///
/// ## Behavior
/// - Only fields present in the patch change
/// - While "shipping same as billing" is on, a billing-address change
///   rewrites the shipping address in the same lock acquisition
/// - Tax rates are coerced (negative/NaN/infinite → 0)
///
/// Edits are never rejected; hard rules apply only at finalize time.
///
/// ## Returns
/// Updated draft with recalculated totals
#[tauri::command]
pub fn update_invoice(draft: State<'_, DraftState>, patch: InvoicePatch) -> DraftResponse {
    debug!("update_invoice command");

    draft.with_draft_mut(|d| {
        d.apply(patch);
        DraftResponse::from(&*d)
    })
}

/// Toggles the billing → shipping address mirror.
///
/// Turning the mirror on copies the billing address into the shipping
/// address immediately.
#[tauri::command]
pub fn set_shipping_same(draft: State<'_, DraftState>, same: bool) -> DraftResponse {
    debug!(same, "set_shipping_same command");

    draft.with_draft_mut(|d| {
        d.set_shipping_same(same);
        DraftResponse::from(&*d)
    })
}

/// Appends a blank line item to the draft.
///
/// ## Returns
/// Updated draft; the new row is last in `invoice.items`
#[tauri::command]
pub fn add_item(draft: State<'_, DraftState>) -> Result<DraftResponse, ApiError> {
    debug!("add_item command");

    draft.with_draft_mut(|d| {
        d.add_item()?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Patches a line item and recomputes its derived amounts.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User edits the Quantity cell of a row                                 │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('update_item', { itemId: 'a3f1...', patch: { quantity: 10 } }) │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Coerce numerics (negative/NaN → 0)                         │    │
/// │  │  2. Recompute taxAmount and amount for the row                 │    │
/// │  │  3. Return the updated draft with fresh totals                 │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Items table and totals strip re-render together                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `item_id` - Line item id within the draft
/// * `patch` - Fields to change (derived amounts are not accepted)
///
/// ## Returns
/// Updated draft
#[tauri::command]
pub fn update_item(
    draft: State<'_, DraftState>,
    item_id: String,
    patch: ItemPatch,
) -> Result<DraftResponse, ApiError> {
    debug!(item_id = %item_id, "update_item command");

    draft.with_draft_mut(|d| {
        d.update_item(&item_id, patch)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Removes a line item from the draft.
///
/// ## Behavior
/// - Removing the last remaining item is rejected
///
/// ## Arguments
/// * `item_id` - Line item id to remove
///
/// ## Returns
/// Updated draft
#[tauri::command]
pub fn remove_item(
    draft: State<'_, DraftState>,
    item_id: String,
) -> Result<DraftResponse, ApiError> {
    debug!(item_id = %item_id, "remove_item command");

    draft.with_draft_mut(|d| {
        d.remove_item(&item_id)?;
        Ok(DraftResponse::from(&*d))
    })
}

/// Discards the draft and starts over from the default template.
///
/// ## When Used
/// - "New Invoice" action
/// - After a successful finalize (done server-side by finalize_invoice)
///
/// ## Returns
/// Fresh default draft
#[tauri::command]
pub fn reset_invoice(draft: State<'_, DraftState>) -> DraftResponse {
    debug!("reset_invoice command");

    draft.with_draft_mut(|d| {
        d.reset();
        DraftResponse::from(&*d)
    })
}

/// Builds the fully resolved print preview of the draft.
///
/// Overridable fields fall back to the session settings here, formatted
/// amounts carry exactly two decimals, and both amount-in-words lines are
/// rendered. The draft itself is not modified.
///
/// ## Returns
/// Rendered invoice ready for the print layout
#[tauri::command]
pub fn preview_invoice(
    draft: State<'_, DraftState>,
    settings: State<'_, SettingsState>,
) -> RenderedInvoice {
    debug!("preview_invoice command");

    let settings = settings.snapshot();
    draft.with_draft(|d| render_invoice(&d.invoice, &settings))
}

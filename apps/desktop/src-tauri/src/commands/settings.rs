//! # Settings Commands
//!
//! Tauri commands for the session-wide invoice defaults.

use tauri::State;
use tracing::{debug, info};

use crate::state::SettingsState;
use gstbill_core::InvoiceSettings;

/// Gets the current session settings.
///
/// ## When Used
/// - Settings tab mount
/// - Anywhere the frontend needs the supplier profile
///
/// ## Returns
/// Complete settings snapshot
#[tauri::command]
pub fn get_settings(settings: State<'_, SettingsState>) -> InvoiceSettings {
    debug!("get_settings command");
    settings.snapshot()
}

/// Replaces the session settings wholesale.
///
/// The new defaults apply to the next preview of any invoice whose own
/// overridable fields are empty; nothing is copied into the draft.
///
/// ## Returns
/// The stored settings (echoed back)
#[tauri::command]
pub fn update_settings(
    settings: State<'_, SettingsState>,
    new_settings: InvoiceSettings,
) -> InvoiceSettings {
    debug!("update_settings command");

    settings.replace(new_settings.clone());
    info!(supplier = %new_settings.supplier_name, "Session settings updated");
    new_settings
}

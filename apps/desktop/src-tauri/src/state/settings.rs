//! # Settings State
//!
//! Session-wide invoice defaults edited in the settings tab.
//!
//! ## Fallback Semantics
//! Settings are never written into the draft. The renderer resolves each
//! overridable invoice field against these defaults at preview time, so a
//! settings change is reflected in the very next preview of any invoice
//! whose own field is empty.
//!
//! ## Thread Safety
//! Settings are written rarely (only from the settings tab) but can be
//! read by any preview, so they live behind the same `Arc<Mutex<T>>`
//! pattern as the draft.

use std::sync::{Arc, Mutex};

use gstbill_core::InvoiceSettings;

/// Tauri-managed settings state.
#[derive(Debug)]
pub struct SettingsState {
    settings: Arc<Mutex<InvoiceSettings>>,
}

impl SettingsState {
    /// Creates state holding the seeded default supplier profile.
    pub fn new() -> Self {
        SettingsState {
            settings: Arc::new(Mutex::new(InvoiceSettings::default())),
        }
    }

    /// Returns a snapshot of the current settings.
    pub fn snapshot(&self) -> InvoiceSettings {
        self.settings.lock().expect("Settings mutex poisoned").clone()
    }

    /// Replaces the settings wholesale.
    ///
    /// The settings tab edits a local copy and submits the full struct,
    /// so a replace (not a patch) is the natural write operation here.
    pub fn replace(&self, settings: InvoiceSettings) {
        *self.settings.lock().expect("Settings mutex poisoned") = settings;
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_and_snapshot() {
        let state = SettingsState::new();
        assert_eq!(state.snapshot().title, "TAX INVOICE");

        let mut settings = state.snapshot();
        settings.title = "PROFORMA INVOICE".to_string();
        state.replace(settings);

        assert_eq!(state.snapshot().title, "PROFORMA INVOICE");
    }
}

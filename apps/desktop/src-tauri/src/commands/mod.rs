//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── invoice.rs   ◄─── Draft editing, items, preview
//! ├── settings.rs  ◄─── Session defaults
//! └── backend.rs   ◄─── Finalize, finder, next number
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ─────────                                                              │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const draft = await invoke('update_item', {                            │
//! │    itemId: 'a3f1...',                                                   │
//! │    patch: { quantity: 10 }                                              │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn update_item(                                                        │
//! │      draft: State<'_, DraftState>,  ◄── Injected by Tauri              │
//! │      item_id: String,               ◄── From invoke params             │
//! │      patch: ItemPatch,              ◄── Deserialized from JSON         │
//! │  ) -> Result<DraftResponse, ApiError>                                   │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { invoice, shippingSame, totals }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the draft
//! fn update_invoice(draft: State<'_, DraftState>, ...)
//!
//! // Needs draft and settings
//! fn preview_invoice(draft: State<'_, DraftState>, settings: State<'_, SettingsState>)
//!
//! // Needs draft and the backend client
//! async fn finalize_invoice(draft: State<'_, DraftState>, backend: State<'_, BackendState>)
//! ```

pub mod backend;
pub mod invoice;
pub mod settings;

//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(draft_state);                                       │   │
//! │  │  app.manage(settings_state);                                    │   │
//! │  │  app.manage(backend_state);                                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  DraftState  │  │SettingsState │  │  BackendState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  reqwest::Client │              │
//! │  │    Draft     │  │   Invoice    │  │  + base URL      │              │
//! │  │  >>          │  │   Settings>> │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DraftState: Protected by Arc<Mutex<T>> for exclusive access         │
//! │  • SettingsState: Protected by Arc<Mutex<T>>, written rarely           │
//! │  • BackendState: reqwest::Client is internally thread-safe             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod backend;
mod draft;
mod settings;

pub use backend::{BackendClient, BackendError, BackendState, InvoiceQuery};
pub use draft::{Draft, DraftState, InvoicePatch, ItemPatch};
pub use settings::SettingsState;

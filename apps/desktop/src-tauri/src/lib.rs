//! # GstBill Desktop Library
//!
//! Core library for the GstBill desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! gstbill_desktop_lib/
//! ├── lib.rs           ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── draft.rs     ◄─── Invoice draft state management
//! │   ├── settings.rs  ◄─── Session settings state
//! │   └── backend.rs   ◄─── Backend REST client
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── invoice.rs   ◄─── Draft editing and preview commands
//! │   ├── settings.rs  ◄─── Settings commands
//! │   └── backend.rs   ◄─── Finalize/finder/next-number commands
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   DraftState     │ │  SettingsState   │ │   BackendState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Open draft    │ │  • Supplier      │ │  • reqwest client    │   │
//! │  │  • Mirror flag   │ │    profile       │ │  • Base URL          │   │
//! │  │  • Totals        │ │  • Bank block    │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{BackendClient, BackendState, DraftState, SettingsState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Build Backend Client ─────────────────────────────────────────────► │
/// │     • Base URL from GSTBILL_BACKEND_URL                                 │
/// │     • Default: http://localhost:4000                                    │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DraftState: Default template draft behind a Mutex                 │
/// │     • SettingsState: Seeded supplier profile                            │
/// │     • BackendState: Shared reqwest client                               │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting GstBill Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let client = BackendClient::from_env();
            info!("Backend client configured");

            // Initialize state objects
            let draft_state = DraftState::new();
            let settings_state = SettingsState::new();
            let backend_state = BackendState::new(client);

            // Register state with Tauri
            app.manage(draft_state);
            app.manage(settings_state);
            app.manage(backend_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Invoice commands
            commands::invoice::get_invoice,
            commands::invoice::update_invoice,
            commands::invoice::set_shipping_same,
            commands::invoice::add_item,
            commands::invoice::update_item,
            commands::invoice::remove_item,
            commands::invoice::reset_invoice,
            commands::invoice::preview_invoice,
            // Settings commands
            commands::settings::get_settings,
            commands::settings::update_settings,
            // Backend commands
            commands::backend::finalize_invoice,
            commands::backend::recent_invoices,
            commands::backend::search_invoices,
            commands::backend::next_invoice_no,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gstbill=trace` - Show trace for gstbill crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gstbill=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

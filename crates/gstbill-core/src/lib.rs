//! # gstbill-core: Pure Invoice Logic for GstBill
//!
//! This crate is the **heart** of GstBill. It turns raw line-item input into
//! a consistent, auditable tax document: per-item tax math, invoice-level
//! totals, the per-HSN tax breakdown, and the amount-in-words renderer used
//! for the statutory invoice text.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GstBill Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Frontend (React/TypeScript)                   │   │
//! │  │    Settings Tab ──► Edit Tab ──► Preview Tab ──► Finalise      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    update_invoice, update_item, preview_invoice, finalize...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gstbill-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  compute  │  │   words   │  │  render   │  │   │
//! │  │   │ Invoice   │  │ recompute │  │ Rupees..  │  │ resolved  │  │   │
//! │  │   │ Settings  │  │ aggregate │  │ ..Only    │  │ document  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Backend REST API (external collaborator)           │   │
//! │  │     POST /api/invoices/add, GET /api/invoices/recent, ...       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Document types (InvoiceData, InvoiceItem, InvoiceSettings)
//! - [`compute`] - Line-item recomputation, totals, tax breakdown, fallbacks
//! - [`words`] - Amount-in-words renderer (Indian numbering system)
//! - [`render`] - Fully-resolved render model for the printable page
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derived figure is recomputed from inputs -
//!    same input = same output, nothing cached, nothing reactive
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Presentation-time rounding**: Amounts stay full-precision `f64`
//!    until formatted with two decimals for display (the backend contract
//!    transmits plain decimal numbers)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod compute;
pub mod error;
pub mod render;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gstbill_core::InvoiceData` instead of
// `use gstbill_core::types::InvoiceData`

pub use compute::{aggregate, recompute, resolve_field, tax_breakdown};
pub use error::{CoreError, CoreResult, ValidationError};
pub use render::{render_invoice, RenderedInvoice};
pub use types::*;
pub use words::amount_in_words;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Date format used everywhere an invoice date appears ("YYYY-MM-DD").
///
/// The backend contract and the HTML date inputs both use this shape, so the
/// core never deals in any other representation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum line items allowed on a single invoice.
///
/// ## Business Reason
/// The printable page is a single A4 region; more rows than this cannot
/// render on one page anyway.
pub const MAX_LINE_ITEMS: usize = 50;

/// GST rate pre-filled on a freshly added line item (CGST 9% + SGST 9%).
pub const DEFAULT_GST_RATE_PERCENT: f64 = 18.0;

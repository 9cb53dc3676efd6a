//! # Backend Commands
//!
//! Tauri commands that talk to the invoice backend REST API.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-Command Failure Policy                           │
//! │                                                                         │
//! │  finalize_invoice ──► Error is SURFACED. The draft is left intact       │
//! │                       so the user can retry without losing work.        │
//! │                                                                         │
//! │  recent_invoices ───► DEGRADED to an empty list + warn log. The         │
//! │  search_invoices      dashboard/finder render an empty state instead    │
//! │                       of an error page.                                 │
//! │                                                                         │
//! │  next_invoice_no ───► DEGRADED to None + warn log. The draft keeps      │
//! │                       its placeholder number for manual entry.          │
//! │                                                                         │
//! │  No command retries; the user triggers retries by re-invoking.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{BackendClient, BackendState, DraftState, InvoiceQuery};
use gstbill_core::validation::validate_for_finalize;
use gstbill_core::{CoreError, InvoiceData};

/// Result of a successful finalize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    /// Number of the invoice that was stored.
    pub invoice_no: String,
    /// Grand total of the stored invoice.
    pub total_amount: f64,
}

/// Validates the draft, submits it to the backend, and resets the editor.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  invoke('finalize_invoice')                                             │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  1. Snapshot the draft under the lock                                   │
/// │  2. validate_for_finalize()  ── fail ──► VALIDATION_ERROR, draft kept   │
/// │  3. POST /api/invoices/add   ── fail ──► BACKEND_ERROR, draft kept      │
/// │  4. Reset the draft to the default template                             │
/// │  5. Return { invoiceNo, totalAmount }                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The posted document is the draft as edited: overridable fields stay
/// empty rather than being resolved against the session settings, so the
/// stored record preserves which values were explicit.
#[tauri::command]
pub async fn finalize_invoice(
    draft: State<'_, DraftState>,
    backend: State<'_, BackendState>,
) -> Result<FinalizeResponse, ApiError> {
    debug!("finalize_invoice command");
    finalize_draft(draft.inner(), backend.client()).await
}

/// The finalize sequence itself, separated from Tauri state injection.
async fn finalize_draft(
    draft: &DraftState,
    client: &BackendClient,
) -> Result<FinalizeResponse, ApiError> {
    let (invoice, totals) = draft.with_draft(|d| (d.invoice.clone(), d.totals()));

    validate_for_finalize(&invoice).map_err(CoreError::from)?;

    client.add_invoice(&invoice).await?;

    // Only a stored invoice clears the editor.
    draft.with_draft_mut(|d| d.reset());

    info!(invoice_no = %invoice.invoice_no, total = totals.total_amount, "Invoice finalized");

    Ok(FinalizeResponse {
        invoice_no: invoice.invoice_no,
        total_amount: totals.total_amount,
    })
}

/// Fetches the recent-invoices listing for the dashboard.
///
/// A backend failure degrades to an empty list; the dashboard shows its
/// empty state rather than an error page.
#[tauri::command]
pub async fn recent_invoices(
    backend: State<'_, BackendState>,
) -> Result<Vec<InvoiceData>, ApiError> {
    debug!("recent_invoices command");

    match backend.client().recent_invoices().await {
        Ok(invoices) => Ok(invoices),
        Err(e) => {
            warn!("Recent invoices unavailable: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Searches stored invoices by customer, date, and/or number.
///
/// Criteria are combined by the backend; absent criteria are not sent.
/// A backend failure degrades to an empty result list.
#[tauri::command]
pub async fn search_invoices(
    backend: State<'_, BackendState>,
    query: InvoiceQuery,
) -> Result<Vec<InvoiceData>, ApiError> {
    debug!(?query, "search_invoices command");

    match backend.client().search_invoices(&query).await {
        Ok(invoices) => Ok(invoices),
        Err(e) => {
            warn!("Invoice search unavailable: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Fetches the next sequential invoice number and applies it to the draft.
///
/// ## When Used
/// Editor mount: a fresh draft carries the "00000" placeholder until this
/// resolves.
///
/// ## Returns
/// - `Some(number)` - the draft's `invoiceNo` was updated
/// - `None` - backend unavailable; the draft keeps its current number
#[tauri::command]
pub async fn next_invoice_no(
    draft: State<'_, DraftState>,
    backend: State<'_, BackendState>,
) -> Result<Option<String>, ApiError> {
    debug!("next_invoice_no command");

    match backend.client().next_invoice_no().await {
        Ok(number) => {
            draft.with_draft_mut(|d| d.invoice.invoice_no = number.clone());
            Ok(Some(number))
        }
        Err(e) => {
            warn!("Next invoice number unavailable: {}", e);
            Ok(None)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::InvoicePatch;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accepts one connection, reads the full request, answers 200.
    async fn accept_one_and_approve(listener: TcpListener) {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            match socket.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => {
                    request.extend_from_slice(&chunk[..n]);
                    if request_complete(&request) {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n")
            .await;
    }

    /// True once headers plus the declared body length have arrived.
    fn request_complete(request: &[u8]) -> bool {
        let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };

        let headers = String::from_utf8_lossy(&request[..header_end]);
        let content_length = headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        request.len() >= header_end + 4 + content_length
    }

    fn edited_draft() -> DraftState {
        let draft = DraftState::new();
        draft.with_draft_mut(|d| {
            d.apply(InvoicePatch {
                invoice_no: Some("INV-7".to_string()),
                invoice_to: Some("Acme Traders".to_string()),
                ..Default::default()
            })
        });
        draft
    }

    #[tokio::test]
    async fn test_failed_finalize_keeps_draft() {
        let draft = edited_draft();
        // Discard port: connection refused, nothing listens here.
        let client = BackendClient::new("http://127.0.0.1:9");

        let err = finalize_draft(&draft, &client).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::BackendError));

        // The editor keeps the user's work for a retry.
        draft.with_draft(|d| {
            assert_eq!(d.invoice.invoice_no, "INV-7");
            assert_eq!(d.invoice.invoice_to, "Acme Traders");
        });
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let draft = edited_draft();
        draft.with_draft_mut(|d| d.invoice.invoice_no = String::new());
        let client = BackendClient::new("http://127.0.0.1:9");

        let err = finalize_draft(&draft, &client).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::ValidationError));

        draft.with_draft(|d| assert_eq!(d.invoice.invoice_to, "Acme Traders"));
    }

    #[tokio::test]
    async fn test_successful_finalize_resets_draft() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(accept_one_and_approve(listener));

        let draft = edited_draft();
        let client = BackendClient::new(format!("http://{}", addr));

        let response = finalize_draft(&draft, &client).await.unwrap();
        assert_eq!(response.invoice_no, "INV-7");

        // Only after the backend accepted does the editor start over.
        draft.with_draft(|d| {
            assert_eq!(d.invoice.invoice_no, "00000");
            assert_eq!(d.invoice.items.len(), 1);
        });

        server.await.unwrap();
    }
}

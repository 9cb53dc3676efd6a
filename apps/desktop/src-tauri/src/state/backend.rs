//! # Backend Client State
//!
//! HTTP client for the invoice backend REST API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Backend REST Contract                                │
//! │                                                                         │
//! │  POST /api/invoices/add              body: InvoiceData (camelCase)      │
//! │       2xx → accepted                 anything else → error              │
//! │                                                                         │
//! │  GET  /api/invoices/recent           → [InvoiceData]                    │
//! │                                                                         │
//! │  GET  /api/invoices?invoiceTo=&dated=&invoiceNo=                        │
//! │       only present criteria are sent → [InvoiceData]                    │
//! │                                                                         │
//! │  GET  /api/invoices/next-invoice-no  → { "nextInvoiceNo": "00042" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! The client itself only reports errors; it never retries. The command
//! layer decides per call whether a failure is surfaced (finalize) or
//! degraded to an empty result (search, recent, next number).
//!
//! ## Thread Safety
//! `reqwest::Client` holds an internal connection pool and is cheap to
//! clone; no mutex is needed around it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gstbill_core::InvoiceData;

/// Default backend base URL for development.
const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Environment variable overriding the backend base URL.
const BASE_URL_ENV: &str = "GSTBILL_BACKEND_URL";

/// Errors from backend REST calls.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connection refused, timeout, bad JSON).
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned status {status} for {endpoint}")]
    Status { status: u16, endpoint: String },
}

/// Search criteria for the invoice finder.
///
/// Only present fields become query parameters; an all-`None` query asks
/// the backend for an unfiltered listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    /// Customer name filter.
    pub invoice_to: Option<String>,
    /// Invoice date filter ("YYYY-MM-DD").
    pub dated: Option<String>,
    /// Invoice number filter.
    pub invoice_no: Option<String>,
}

impl InvoiceQuery {
    /// Assembles the query-parameter pairs for present criteria.
    fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(v) = &self.invoice_to {
            params.push(("invoiceTo", v.as_str()));
        }
        if let Some(v) = &self.dated {
            params.push(("dated", v.as_str()));
        }
        if let Some(v) = &self.invoice_no {
            params.push(("invoiceNo", v.as_str()));
        }
        params
    }
}

/// Wire shape of the next-invoice-number response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NextInvoiceNo {
    next_invoice_no: String,
}

/// Async client for the invoice backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        BackendClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client from `GSTBILL_BACKEND_URL`, defaulting to the
    /// local development backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        BackendClient::new(base_url)
    }

    /// Joins an API path onto the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submits a finalized invoice.
    ///
    /// Any non-2xx status is an error; the body is ignored on success.
    pub async fn add_invoice(&self, invoice: &InvoiceData) -> Result<(), BackendError> {
        let endpoint = self.endpoint("/api/invoices/add");
        let response = self.http.post(&endpoint).json(invoice).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::Status {
                status: status.as_u16(),
                endpoint,
            })
        }
    }

    /// Fetches the recent-invoices listing for the dashboard.
    pub async fn recent_invoices(&self) -> Result<Vec<InvoiceData>, BackendError> {
        let endpoint = self.endpoint("/api/invoices/recent");
        let response = self.http.get(&endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        Ok(response.json().await?)
    }

    /// Searches stored invoices by the given criteria.
    pub async fn search_invoices(
        &self,
        query: &InvoiceQuery,
    ) -> Result<Vec<InvoiceData>, BackendError> {
        let endpoint = self.endpoint("/api/invoices");
        let response = self
            .http
            .get(&endpoint)
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        Ok(response.json().await?)
    }

    /// Asks the backend for the next sequential invoice number.
    pub async fn next_invoice_no(&self) -> Result<String, BackendError> {
        let endpoint = self.endpoint("/api/invoices/next-invoice-no");
        let response = self.http.get(&endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body: NextInvoiceNo = response.json().await?;
        Ok(body.next_invoice_no)
    }
}

/// Tauri-managed backend client state.
#[derive(Debug)]
pub struct BackendState {
    client: BackendClient,
}

impl BackendState {
    /// Wraps a backend client for Tauri state management.
    pub fn new(client: BackendClient) -> Self {
        BackendState { client }
    }

    /// Access to the underlying client.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join_strips_trailing_slash() {
        let client = BackendClient::new("http://localhost:4000/");
        assert_eq!(
            client.endpoint("/api/invoices/add"),
            "http://localhost:4000/api/invoices/add"
        );
    }

    #[test]
    fn test_query_params_only_present_fields() {
        let query = InvoiceQuery {
            invoice_to: Some("Acme Traders".to_string()),
            dated: None,
            invoice_no: Some("INV-42".to_string()),
        };

        let params = query.params();
        assert_eq!(
            params,
            vec![("invoiceTo", "Acme Traders"), ("invoiceNo", "INV-42")]
        );
    }

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(InvoiceQuery::default().params().is_empty());
    }

    #[test]
    fn test_next_invoice_no_wire_shape() {
        let body: NextInvoiceNo =
            serde_json::from_str(r#"{"nextInvoiceNo":"00042"}"#).unwrap();
        assert_eq!(body.next_invoice_no, "00042");
    }
}

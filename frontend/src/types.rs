//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// API Response Types
// =============================================================================

/// Report returned by `/extract-and-validate`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QcReport {
    /// Number of invoices processed
    pub total_invoices: usize,
    /// Invoices with no errors
    pub valid_invoices: usize,
    /// Invoices with at least one error
    pub invalid_invoices: usize,
    /// Per-invoice verdicts, in backend order
    pub results: Vec<ValidationResult>,
}

/// Verdict for a single invoice.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidationResult {
    pub invoice_number: String,
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// `true` when the invoice has neither errors nor warnings.
    pub fn has_no_issues(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Failures of a backend call.
///
/// Every variant ends up in the inline error panel; none is fatal.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the client-side timeout and was aborted.
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Backend answered with a non-2xx status.
    #[error("Upload failed")]
    Upload { status: u16 },

    /// Response body was not a valid report.
    #[error("Invalid response: {0}")]
    Parse(String),

    /// A browser API refused an operation (FormData, AbortController...).
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

//! Application configuration.
//!
//! Centralized configuration for the Invoice QC frontend.
//! Endpoints and limits are compile-time constants; the only runtime
//! decision is which backend to talk to, made once from the page's host.

use std::time::Duration;

/// Backend used when the page is served from a loopback host.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Backend used everywhere else.
pub const PRODUCTION_API_URL: &str = "https://invqc-dev.onrender.com";

/// Path of the extraction + validation endpoint, relative to the base URL.
pub const EXTRACT_AND_VALIDATE_PATH: &str = "/extract-and-validate";

/// Path of the backend health check.
pub const HEALTH_PATH: &str = "/health";

/// Multipart field name shared by every uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "files";

/// Only files declaring this media type are accepted.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Maximum number of PDFs per submission.
pub const MAX_FILES_PER_UPLOAD: usize = 4;

/// Client-side timeout for one submission (in milliseconds).
pub const UPLOAD_TIMEOUT_MS: u32 = 60_000;

/// Timeout for the startup health probe (in milliseconds).
pub const HEALTH_TIMEOUT_MS: u32 = 5_000;

/// Hostnames treated as local development.
const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "[::1]"];

/// Returns `true` when `hostname` points at the local machine.
pub fn is_loopback_host(hostname: &str) -> bool {
    LOOPBACK_HOSTS.contains(&hostname)
}

/// Pick the backend base URL for the given page hostname.
pub fn resolve_api_url(hostname: &str) -> &'static str {
    if is_loopback_host(hostname) {
        LOCAL_API_URL
    } else {
        PRODUCTION_API_URL
    }
}

/// Runtime configuration, resolved once at startup and shared through
/// Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash.
    pub api_url: String,
    /// Submission cap.
    pub max_files: usize,
    /// Per-submission timeout.
    pub upload_timeout: Duration,
}

impl AppConfig {
    /// Build the configuration for a page served from `hostname`.
    pub fn for_host(hostname: &str) -> Self {
        Self {
            api_url: resolve_api_url(hostname).to_string(),
            ..Self::default()
        }
    }

    /// Build the configuration from `window.location.hostname`.
    ///
    /// Falls back to the production backend when the location is unreadable.
    pub fn from_location() -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();

        let config = Self::for_host(&hostname);
        log::info!("🌐 Host '{}' → API {}", hostname, config.api_url);
        config
    }

    /// Full URL of the extract-and-validate endpoint.
    pub fn extract_and_validate_url(&self) -> String {
        format!("{}{}", self.api_url, EXTRACT_AND_VALIDATE_PATH)
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.api_url, HEALTH_PATH)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: PRODUCTION_API_URL.to_string(),
            max_files: MAX_FILES_PER_UPLOAD,
            upload_timeout: Duration::from_millis(u64::from(UPLOAD_TIMEOUT_MS)),
        }
    }
}

//! HTTP service uploading PDF invoices to the backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::http::{abort_controller, ensure_success, with_timeout};
use crate::config::{AppConfig, UPLOAD_FIELD_NAME};
use crate::types::{AppError, AppResult, QcReport};

/// Build the multipart body: one `files` part per PDF.
fn build_form_data(files: &[File]) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob(UPLOAD_FIELD_NAME, file)
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;
    }

    Ok(form_data)
}

/// POST the files to `/extract-and-validate` and parse the report.
///
/// The whole exchange (request, status, body) is bounded by
/// `config.upload_timeout`; on expiry the fetch is aborted.
pub async fn extract_and_validate(files: &[File], config: &AppConfig) -> AppResult<QcReport> {
    let url = config.extract_and_validate_url();
    let form_data = build_form_data(files)?;
    let abort = abort_controller()?;
    let signal = abort.signal();

    let request = Request::post(&url)
        .abort_signal(Some(&signal))
        .body(form_data)
        .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

    log::info!("📤 Uploading {} PDF(s) to {}", files.len(), url);

    let exchange = async {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if let Err(e) = ensure_success(response.status()) {
            log::error!("Server answered {} for {}", response.status(), url);
            return Err(e);
        }

        response
            .json::<QcReport>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    };

    let report = with_timeout(exchange, config.upload_timeout, &abort).await?;

    log::info!(
        "✅ Report received: {} total, {} valid, {} invalid",
        report.total_invoices,
        report.valid_invoices,
        report.invalid_invoices
    );

    Ok(report)
}

//! Backend health probe.

use std::time::Duration;

use gloo_net::http::Request;

use super::http::{abort_controller, ensure_success, with_timeout};
use crate::config::{AppConfig, HEALTH_TIMEOUT_MS};
use crate::types::{AppError, AppResult, HealthStatus};

/// `GET /health`, bounded by [`HEALTH_TIMEOUT_MS`].
pub async fn check_health(config: &AppConfig) -> AppResult<HealthStatus> {
    let url = config.health_url();
    let abort = abort_controller()?;
    let signal = abort.signal();

    let request = Request::get(&url)
        .abort_signal(Some(&signal))
        .build()
        .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

    let exchange = async {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        ensure_success(response.status())?;
        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    };

    let timeout = Duration::from_millis(u64::from(HEALTH_TIMEOUT_MS));
    with_timeout(exchange, timeout, &abort).await
}

/// Probe the backend and reduce the answer to online/offline.
pub async fn is_backend_online(config: &AppConfig) -> bool {
    match check_health(config).await {
        Ok(health) if health.is_healthy() => {
            log::info!("💚 Backend {} is healthy", health.service);
            true
        }
        Ok(health) => {
            log::warn!("Backend reported status '{}'", health.status);
            false
        }
        Err(e) => {
            log::warn!("Backend health check failed: {}", e);
            false
        }
    }
}

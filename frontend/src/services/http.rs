//! Shared plumbing for backend calls: status checks and abortable timeouts.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use web_sys::AbortController;

use crate::types::{AppError, AppResult};

/// Map a response status to success or a generic upload failure.
///
/// Only 2xx counts as success; the status code is kept for logging but
/// never changes how the failure is shown.
pub fn ensure_success(status: u16) -> AppResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::Upload { status })
    }
}

/// Milliseconds for `TimeoutFuture`, saturating at `u32::MAX`.
pub fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

/// Create the controller whose signal is attached to a request.
pub fn abort_controller() -> AppResult<AbortController> {
    AbortController::new()
        .map_err(|e| AppError::Browser(format!("Failed to create AbortController: {:?}", e)))
}

/// Race `exchange` against `timer`.
///
/// The exchange result passes through when it finishes first. When the
/// timer wins, `on_timeout` runs and [`AppError::Timeout`] is returned.
pub async fn race_timeout<T, F, D>(
    exchange: F,
    timer: D,
    timeout: Duration,
    on_timeout: impl FnOnce(),
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
    D: Future<Output = ()>,
{
    pin_mut!(exchange);
    pin_mut!(timer);

    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            on_timeout();
            log::warn!("⏱️ Request aborted after {}s", timeout.as_secs());
            Err(AppError::Timeout { secs: timeout.as_secs() })
        }
    }
}

/// Bound `exchange` by `timeout`, aborting the fetch behind `abort` on expiry.
pub async fn with_timeout<T, F>(exchange: F, timeout: Duration, abort: &AbortController) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let timer = TimeoutFuture::new(timeout_millis(timeout));
    race_timeout(exchange, timer, timeout, || abort.abort()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::Cell;

    #[test]
    fn test_only_2xx_is_success() {
        assert!(ensure_success(200).is_ok());
        assert!(ensure_success(204).is_ok());
        assert_eq!(ensure_success(422), Err(AppError::Upload { status: 422 }));
        assert_eq!(ensure_success(500), Err(AppError::Upload { status: 500 }));
        assert_eq!(ensure_success(302), Err(AppError::Upload { status: 302 }));
    }

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_secs(60)), 60_000);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
    }

    #[test]
    fn test_expired_timer_aborts_and_reports_timeout() {
        let aborted = Cell::new(false);

        let result = block_on(race_timeout(
            future::pending::<AppResult<u32>>(),
            future::ready(()),
            Duration::from_secs(60),
            || aborted.set(true),
        ));

        assert_eq!(result, Err(AppError::Timeout { secs: 60 }));
        assert!(aborted.get());
    }

    #[test]
    fn test_finished_exchange_passes_through_without_abort() {
        let aborted = Cell::new(false);

        let result = block_on(race_timeout(
            future::ready(Ok::<u32, AppError>(7)),
            future::pending::<()>(),
            Duration::from_secs(60),
            || aborted.set(true),
        ));

        assert_eq!(result, Ok(7));
        assert!(!aborted.get());
    }

    #[test]
    fn test_failed_exchange_is_not_turned_into_timeout() {
        let result = block_on(race_timeout(
            future::ready(Err::<u32, AppError>(AppError::Upload { status: 500 })),
            future::pending::<()>(),
            Duration::from_secs(60),
            || {},
        ));

        assert_eq!(result, Err(AppError::Upload { status: 500 }));
    }
}

//! Retry loop built on tokio-retry2.

use crate::RetryPolicy;
use conteur_error::{ConteurResult, RetryableError};
use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

/// Runs `operation` until it succeeds, fails permanently, or the policy's
/// attempt budget is spent.
///
/// Retryable failures (see [`RetryableError`]) wait on the policy's linear
/// schedule before the next attempt. Non-retryable failures are returned at
/// once. When every attempt fails, the last error is returned unchanged.
///
/// # Examples
///
/// ```
/// use conteur_retry::{RetryPolicy, with_retry};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let value = with_retry(&RetryPolicy::no_retry(), || async { Ok::<_, conteur_error::ConteurError>(7) })
///     .await
///     .unwrap();
/// assert_eq!(value, 7);
/// # }
/// ```
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> ConteurResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ConteurResult<T>>,
{
    let attempt = AtomicU32::new(0);
    let max_attempts = policy.attempts();

    Retry::spawn(policy.delays(), || {
        let current = attempt.fetch_add(1, Ordering::Relaxed) + 1;
        let call = operation();
        async move {
            match call.await {
                Ok(value) => {
                    if current > 1 {
                        debug!(attempt = current, "Call succeeded after retry");
                    }
                    Ok(value)
                }
                Err(e) if e.is_retryable() && current < max_attempts => {
                    warn!(
                        error = %e,
                        attempt = current,
                        max_attempts,
                        delay_ms = policy.delay_after(current).as_millis() as u64,
                        "Transient failure, will retry"
                    );
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    if e.is_retryable() {
                        warn!(error = %e, attempt = current, "Retries exhausted");
                    } else {
                        warn!(error = %e, "Permanent failure, failing immediately");
                    }
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await
}

//! Retry classification shared by all error types.

/// Trait for errors that support retry logic.
///
/// Transient errors like 503 (service unavailable), 429 (rate limit),
/// or network failures return true. Permanent errors like 401
/// (unauthorized) or 400 (bad request) return false.
///
/// # Examples
///
/// ```
/// use conteur_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     status: 401,
///     body: "invalid x-api-key".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

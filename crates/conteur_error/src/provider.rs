//! LLM provider error types and retry classification.

use crate::RetryableError;

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Provider answered with a non-success HTTP status
    #[display("HTTP {} from provider: {}", status, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the provider
        body: String,
    },
    /// Request never reached the provider or the connection broke
    #[display("Transport failure: {}", _0)]
    Http(String),
    /// Success status but the expected field was absent
    #[display("Malformed provider response: {}", _0)]
    MalformedResponse(String),
    /// Asynchronous prediction job ended in a failed or canceled state
    #[display("Prediction job failed: {}", _0)]
    JobFailed(String),
    /// Asynchronous prediction job did not finish within the poll budget
    #[display("Prediction job still pending after {} polls", polls)]
    Timeout {
        /// Number of polls performed before giving up
        polls: u32,
    },
}

impl ProviderErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Overload (429, 503, 529) and other transient statuses are retried.
    /// Client mistakes such as 400, 401, 403 or 404 fail fast.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504 | 529)
            }
            ProviderErrorKind::Http(_) => true,
            ProviderErrorKind::MalformedResponse(_) => true,
            ProviderErrorKind::Timeout { .. } => true,
            ProviderErrorKind::JobFailed(_) => false,
        }
    }

    /// HTTP status reported by the provider, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use conteur_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     status: 529,
///     body: "overloaded".to_string(),
/// });
/// assert!(err.is_retryable());
/// assert!(format!("{}", err).contains("529"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> ProviderErrorKind {
        ProviderErrorKind::Api {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_overload_statuses_are_retryable() {
        for status in [429, 503, 529, 500, 502, 504, 408] {
            assert!(api(status).is_retryable(), "status {status}");
        }
    }

    #[test]
    fn test_client_errors_fail_fast() {
        for status in [400, 401, 403, 404, 422] {
            assert!(!api(status).is_retryable(), "status {status}");
        }
    }

    #[test]
    fn test_transport_and_malformed_are_retryable() {
        assert!(ProviderErrorKind::Http("connection reset".into()).is_retryable());
        assert!(ProviderErrorKind::MalformedResponse("no content".into()).is_retryable());
        assert!(ProviderErrorKind::Timeout { polls: 3 }.is_retryable());
        assert!(!ProviderErrorKind::JobFailed("nsfw".into()).is_retryable());
    }
}

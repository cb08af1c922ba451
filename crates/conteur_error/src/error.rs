//! Top-level error wrapper types.

use crate::{
    ConfigError, NarrativeError, ProviderError, RenderError, RetryableError,
    ServerError, ValidationError,
};

/// Every error condition a Conteur operation can surface.
///
/// # Examples
///
/// ```
/// use conteur_error::{ConteurError, ConfigError};
///
/// let err: ConteurError = ConfigError::new("bad port").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ConteurErrorKind {
    /// Invalid user input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// LLM provider failure
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Story pipeline failure
    #[from(NarrativeError)]
    Narrative(NarrativeError),
    /// HTML or PDF rendering failure
    #[from(RenderError)]
    Render(RenderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Conteur error with kind discrimination.
///
/// # Examples
///
/// ```
/// use conteur_error::{ConteurResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> ConteurResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::MissingField("style".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(err.is_validation());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Conteur Error: {}", _0)]
pub struct ConteurError(Box<ConteurErrorKind>);

impl ConteurError {
    /// Create a new error from a kind.
    pub fn new(kind: ConteurErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConteurErrorKind {
        &self.0
    }

    /// True when the error stems from rejected user input.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ConteurErrorKind::Validation(_))
    }

    /// Provider error carried by this error, if any.
    pub fn provider(&self) -> Option<&ProviderError> {
        match self.kind() {
            ConteurErrorKind::Provider(e) => Some(e),
            _ => None,
        }
    }
}

impl RetryableError for ConteurError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            ConteurErrorKind::Provider(e) => e.is_retryable(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to ConteurErrorKind
impl<T> From<T> for ConteurError
where
    T: Into<ConteurErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Conteur operations.
pub type ConteurResult<T> = std::result::Result<T, ConteurError>;

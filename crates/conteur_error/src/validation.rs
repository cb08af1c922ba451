//! Input validation error types.

/// Validation error conditions for user-submitted story parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required field was absent or blank
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// Story style tag could not be interpreted
    #[display("Invalid story style: '{}'", _0)]
    InvalidStyle(String),
    /// Story variant tag could not be interpreted
    #[display("Invalid story variant: '{}'", _0)]
    InvalidVariant(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use conteur_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingField("mainText".into()));
/// assert!(format!("{}", err).contains("mainText"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

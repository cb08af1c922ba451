//! Story pipeline error types.

/// Specific error conditions for story assembly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// A pipeline stage failed after exhausting its retries
    #[display("Stage '{}' failed: {}", stage, message)]
    StageFailed {
        /// Stage name (node id)
        stage: String,
        /// Underlying error message
        message: String,
    },
}

/// Error type for story assembly.
///
/// # Examples
///
/// ```
/// use conteur_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::StageFailed {
///     stage: "page1".into(),
///     message: "HTTP 500".into(),
/// });
/// assert!(format!("{}", err).contains("page1"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The specific error condition
    pub kind: NarrativeErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new narrative error with caller location.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

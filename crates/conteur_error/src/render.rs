//! Rendering error types.

/// Rendering error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// Document contained no renderable section
    #[display("Document is empty")]
    EmptyDocument,
    /// PDF writer failed
    #[display("PDF generation failed: {}", _0)]
    Pdf(String),
    /// Blocking render task could not be joined
    #[display("Render task failed: {}", _0)]
    Task(String),
}

/// Rendering error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific error condition
    pub kind: RenderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with caller location.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

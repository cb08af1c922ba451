//! HTTP server error types.

/// Server error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Could not bind the listening socket
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// Address the server tried to bind
        addr: String,
        /// Underlying error message
        message: String,
    },
    /// Server loop exited with an error
    #[display("Server error: {}", _0)]
    Serve(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The specific error condition
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new server error with caller location.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Error types for the Conteur story generator.
//!
//! This crate provides the foundation error types used throughout the Conteur workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use conteur_error::{ConteurResult, ValidationError, ValidationErrorKind};
//!
//! fn check(headline: &str) -> ConteurResult<()> {
//!     if headline.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::MissingField("headline".into())))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("Le dragon").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod narrative;
mod provider;
mod render;
mod retryable;
mod server;
mod validation;

pub use config::ConfigError;
pub use error::{ConteurError, ConteurErrorKind, ConteurResult};
pub use narrative::{NarrativeError, NarrativeErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use retryable::RetryableError;
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

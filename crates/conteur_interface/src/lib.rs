//! Trait definitions for the Conteur story generator.
//!
//! This crate provides the single capability every LLM backend implements:
//! turning a [`conteur_core::CompletionRequest`] into generated text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::CompletionDriver;
pub use types::ProviderKind;

//! Conteur - branching children's stories from LLM APIs
//!
//! Conteur turns a few lines about a child into an eight-page interactive
//! story: an introduction, a first page ending in two choices, two second
//! pages with two choices each, and four happy endings. Each page is one
//! completion call to the configured provider, wrapped in bounded retries.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use conteur::{ProviderConfig, ProviderKind, StoryAssembler, StoryRequest, StoryStyle, driver_for};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = driver_for(ProviderConfig::from_env(ProviderKind::Anthropic))?;
//!     let request = StoryRequest::builder()
//!         .child_info("Léo, 6 ans, adore le foot et les dinosaures")
//!         .style(StoryStyle::Aventure)
//!         .build()?;
//!
//!     let story = StoryAssembler::new(driver).assemble_story(&request).await?;
//!     println!("{}", story.to_document());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `conteur_error` - Error types
//! - `conteur_core` - Story data model and document conventions
//! - `conteur_interface` - `CompletionDriver` trait
//! - `conteur_retry` - Retry policy and wrapper
//! - `conteur_models` - Anthropic, OpenAI, Hugging Face and Replicate clients
//! - `conteur_narrative` - Choice extraction, prompts and story assembly
//! - `conteur_render` - HTML and PDF rendering
//! - `conteur_server` - HTTP API and configuration
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;

pub use conteur_core::*;
pub use conteur_error::*;
pub use conteur_interface::*;
pub use conteur_models::*;
pub use conteur_narrative::*;
pub use conteur_render::*;
pub use conteur_retry::*;
pub use conteur_server::*;

pub use observability::{ObservabilityConfig, init_observability};

//! HTTP API for Conteur.
//!
//! Serves the story endpoints over an axum router:
//!
//! - `POST /generate-story` assembles a story from the form fields
//! - `POST /continue-story` extends an interactive story after a choice
//! - `POST /generate-pdf` renders a story document as a PDF download
//! - `GET /health` reports the configured provider
//!
//! Anything else falls through to the static front-end. [`AppConfig`] loads
//! the layered application configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handlers;
mod routes;
mod server;
mod state;

pub use config::{AppConfig, LoggingSettings, PipelineSettings, ProviderSettings, ServerSettings};
pub use error::{ApiError, ErrorBody};
pub use handlers::{
    ContinueStoryBody, ContinueStoryResponse, GeneratePdfBody, GenerateStoryBody,
    GenerateStoryResponse, HealthResponse, PDF_FILENAME,
};
pub use routes::router;
pub use server::{serve, serve_router};
pub use state::{AppState, SharedAssembler};

//! Router assembly.

use crate::AppState;
use crate::handlers::{continue_story, generate_pdf, generate_story, health};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Creates the API router, with `static_dir` served as the fallback.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/generate-story", post(generate_story))
        .route("/continue-story", post(continue_story))
        .route("/generate-pdf", post(generate_pdf))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

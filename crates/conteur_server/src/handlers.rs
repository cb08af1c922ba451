//! Story endpoint handlers.

use crate::{ApiError, AppState};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use conteur_core::{StoryRequest, StorySections, StoryVariant};
use conteur_error::{RenderError, RenderErrorKind, ValidationError, ValidationErrorKind};
use conteur_render::{derive_title, parse_document, render_html, render_pdf};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Suggested name of the PDF download.
pub const PDF_FILENAME: &str = "histoire.pdf";

/// Form fields of `POST /generate-story`.
///
/// Fields are optional at the JSON level so that a missing field surfaces
/// as a validation message naming it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateStoryBody {
    /// Story title
    pub headline: Option<String>,
    /// Story subtitle
    pub subheadline: Option<String>,
    /// Free text describing the child
    pub main_text: Option<String>,
    /// Style tag
    pub style: Option<String>,
    /// `full` (default) or `single`
    pub variant: Option<String>,
}

/// Response of `POST /generate-story`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateStoryResponse {
    /// Assembled document text
    pub story: String,
    /// Inline HTML rendering of the document
    pub html: String,
    /// Title shown on the cover
    pub title: String,
    /// Subtitle shown on the cover
    pub subtitle: Option<String>,
    /// Tree view keyed by node id
    pub sections: StorySections,
}

/// Body of `POST /continue-story`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContinueStoryBody {
    /// Story so far
    pub previous_part: Option<String>,
    /// Label of the option the reader picked
    pub choice_made: Option<String>,
}

/// Response of `POST /continue-story`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueStoryResponse {
    /// Next part of the story
    pub story: String,
    /// The two options offered next
    pub choices: Vec<String>,
}

/// Body of `POST /generate-pdf`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratePdfBody {
    /// Document text to render
    pub story: Option<String>,
    /// Cover title, derived from the introduction when absent
    pub title: Option<String>,
    /// Cover subtitle
    pub subtitle: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok`
    pub status: String,
    /// Configured provider
    pub provider: String,
    /// Configured model
    pub model: String,
}

fn parse_variant(variant: Option<&str>) -> Result<StoryVariant, ValidationError> {
    match variant.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(StoryVariant::default()),
        Some(tag) => tag.parse().map_err(|_| {
            ValidationError::new(ValidationErrorKind::InvalidVariant(tag.to_string()))
        }),
    }
}

/// Generates a complete story from the form fields.
#[instrument(skip_all)]
pub async fn generate_story(
    State(state): State<AppState>,
    body: Result<Json<GenerateStoryBody>, JsonRejection>,
) -> Result<Json<GenerateStoryResponse>, ApiError> {
    let Json(body) = body.map_err(ApiError::rejected)?;
    let request = StoryRequest::from_form(
        body.headline.as_deref().unwrap_or_default(),
        body.subheadline.as_deref().unwrap_or_default(),
        body.main_text.as_deref().unwrap_or_default(),
        body.style.as_deref().unwrap_or_default(),
    )?;
    let variant = parse_variant(body.variant.as_deref())?;
    info!(style = %request.style(), %variant, "Generating story");

    let story = state.assembler().assemble(&request, variant).await?;
    let text = story.to_document();
    let document = parse_document(&text);
    let title = story
        .title()
        .clone()
        .unwrap_or_else(|| derive_title(&document.intro_text().unwrap_or_default()));
    let mut sections = story.sections();
    sections.title = Some(title.clone());

    info!(nodes = story.nodes().len(), chars = text.len(), "Story generated");
    Ok(Json(GenerateStoryResponse {
        html: render_html(&document),
        story: text,
        title,
        subtitle: story.subtitle().clone(),
        sections,
    }))
}

/// Continues an interactive story after the reader's choice.
#[instrument(skip_all)]
pub async fn continue_story(
    State(state): State<AppState>,
    body: Result<Json<ContinueStoryBody>, JsonRejection>,
) -> Result<Json<ContinueStoryResponse>, ApiError> {
    let Json(body) = body.map_err(ApiError::rejected)?;
    let continuation = state
        .assembler()
        .continue_story(
            body.previous_part.as_deref().unwrap_or_default(),
            body.choice_made.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(ContinueStoryResponse {
        story: continuation.text,
        choices: Vec::from(continuation.choices),
    }))
}

/// Renders a story document as a PDF download.
#[instrument(skip_all)]
pub async fn generate_pdf(
    body: Result<Json<GeneratePdfBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(ApiError::rejected)?;
    let story = body
        .story
        .filter(|story| !story.trim().is_empty())
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingField("story".into())))?;
    let GeneratePdfBody {
        title, subtitle, ..
    } = body;

    let bytes = tokio::task::spawn_blocking(move || {
        render_pdf(&story, title.as_deref(), subtitle.as_deref())
    })
    .await
    .map_err(|e| ApiError::pdf(RenderError::new(RenderErrorKind::Task(e.to_string())).into()))?
    .map_err(ApiError::pdf)?;

    info!(bytes = bytes.len(), "PDF rendered");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", PDF_FILENAME),
            ),
        ],
        bytes,
    ))
}

/// Reports liveness and the configured provider.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let driver = state.assembler().driver();
    Json(HealthResponse {
        status: "ok".to_string(),
        provider: driver.provider_name().to_string(),
        model: driver.model_name().to_string(),
    })
}

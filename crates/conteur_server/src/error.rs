//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use conteur_error::{ConteurError, ConteurErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Generic message for failed story generation.
const GENERATION_FAILED: &str = "La génération de l'histoire a échoué";
/// Generic message for failed PDF rendering.
const PDF_FAILED: &str = "La génération du PDF a échoué";
/// Message for rejected input.
const INVALID_REQUEST: &str = "Requête invalide";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable summary
    pub error: String,
    /// Underlying cause
    pub details: String,
}

/// Error returned by the story handlers.
///
/// Validation failures map to `400 Bad Request` with the offending field in
/// `details`; everything else maps to `500` with a generic message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error: &str, details: String) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.to_string(),
                details,
            },
        }
    }

    /// Classifies a failure of the PDF endpoint.
    pub fn pdf(err: ConteurError) -> Self {
        if err.is_validation() {
            return Self::from(err);
        }
        error!(error = %err, "PDF rendering failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, PDF_FAILED, err.to_string())
    }

    /// Body could not be read as JSON.
    pub fn rejected(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self::new(StatusCode::BAD_REQUEST, INVALID_REQUEST, rejection.body_text())
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body.
    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl<E> From<E> for ApiError
where
    E: Into<ConteurError>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        match err.kind() {
            ConteurErrorKind::Validation(validation) => {
                warn!(error = %validation.kind, "Rejected request");
                Self::new(
                    StatusCode::BAD_REQUEST,
                    INVALID_REQUEST,
                    validation.kind.to_string(),
                )
            }
            _ => {
                error!(error = %err, "Story generation failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILED,
                    err.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conteur_error::{
        ProviderError, ProviderErrorKind, RenderError, RenderErrorKind, ValidationError,
        ValidationErrorKind,
    };

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(ValidationError::new(ValidationErrorKind::MissingField(
            "headline".into(),
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().details, "Missing required field: headline");
    }

    #[test]
    fn test_provider_failure_echoes_status_in_details() {
        let err = ApiError::from(ProviderError::new(ProviderErrorKind::Api {
            status: 529,
            body: "overloaded".into(),
        }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, GENERATION_FAILED);
        assert!(err.body().details.contains("529"));
    }

    #[test]
    fn test_pdf_failure_has_its_own_message() {
        let err = ApiError::pdf(RenderError::new(RenderErrorKind::Pdf("boom".into())).into());
        assert_eq!(err.body().error, PDF_FAILED);
    }
}

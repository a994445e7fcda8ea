//! Error types shared by the validation, translation and HTTP layers.
//!
//! Only two kinds of failure ever reach a client: a [`ValidationError`] for bad
//! input and a [`TranslationError`] when the provider delegate fails. Storage
//! problems are absorbed by the log store and never show up here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Caller-input problem: bad language code, empty or oversized text,
/// malformed bulk request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// The human-readable reason.
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// The resolver could not produce output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The external provider failed or could not be constructed.
    #[error("{0}")]
    Provider(String),
}

/// Error body returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Translation failed: {0}")]
    Translation(#[from] TranslationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Validation(e) => warn!("Validation error: {}", e),
            ApiError::Translation(e) => error!("Translation error: {}", e),
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ValidationError::new("Text cannot be empty").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[test]
    fn test_translation_maps_to_server_error() {
        let err: ApiError = TranslationError::Provider("quota exceeded".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Translation failed: quota exceeded");
    }
}

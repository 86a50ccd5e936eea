//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pcos_core::ValidationError;
use pcos_engine::InferenceError;
use serde::Serialize;
use tracing::error;

/// Message returned for every internal failure; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// Request could not be used as given.
    BadRequest(String),
    /// Failure on our side. The message is shown to the caller as is.
    Internal(String),
}

impl AppError {
    /// Logs `e` and returns a generic internal error.
    pub fn internal(e: impl std::fmt::Display) -> Self {
        error!("Internal error: {}", e);
        AppError::Internal(INTERNAL_ERROR_MESSAGE.into())
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<InferenceError> for AppError {
    fn from(e: InferenceError) -> Self {
        AppError::internal(format!("inference failed: {e}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err: AppError = ValidationError::NotAnObject.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: AppError = InferenceError::NonFinite { stage: "scaling", index: 2 }.into();
        match &err {
            AppError::Internal(message) => assert_eq!(message, INTERNAL_ERROR_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

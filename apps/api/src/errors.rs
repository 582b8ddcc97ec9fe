use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::insights::InsightError;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Remote failure: {0}")]
    RemoteFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<InsightError> for AppError {
    fn from(err: InsightError) -> Self {
        let message = err.to_string();
        match err {
            InsightError::NotInitialized => AppError::ConfigurationMissing(message),
            InsightError::Remote(_) => AppError::RemoteFailure(message),
            InsightError::MalformedResponse => AppError::MalformedResponse(message),
            InsightError::Timeout(_) => AppError::Timeout(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ConfigurationMissing(msg) => (
                StatusCode::PRECONDITION_FAILED,
                "CONFIGURATION_MISSING",
                msg.clone(),
            ),
            AppError::RemoteFailure(msg) => {
                tracing::error!("Remote failure: {msg}");
                (StatusCode::BAD_GATEWAY, "REMOTE_FAILURE", msg.clone())
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed model response: {msg}");
                (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE", msg.clone())
            }
            AppError::Timeout(msg) => {
                tracing::warn!("Timeout: {msg}");
                (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", msg.clone())
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

//! Axum route handlers for API key settings.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveApiKeyRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ApiKeyStatus {
    pub configured: bool,
    pub masked_key: Option<String>,
}

fn status(state: &AppState) -> ApiKeyStatus {
    let credential = state.credentials.read();
    ApiKeyStatus {
        configured: credential.is_some(),
        masked_key: credential.map(|c| c.masked()),
    }
}

/// GET /api/v1/settings/api-key
pub async fn handle_get_api_key(State(state): State<AppState>) -> Json<ApiKeyStatus> {
    Json(status(&state))
}

/// PUT /api/v1/settings/api-key
pub async fn handle_save_api_key(
    State(state): State<AppState>,
    Json(req): Json<SaveApiKeyRequest>,
) -> Result<Json<ApiKeyStatus>, AppError> {
    if req.api_key.trim().is_empty() {
        return Err(AppError::Validation("Please enter an API key".to_string()));
    }
    state.credentials.save(&req.api_key)?;
    Ok(Json(status(&state)))
}

/// DELETE /api/v1/settings/api-key
pub async fn handle_remove_api_key(
    State(state): State<AppState>,
) -> Result<Json<ApiKeyStatus>, AppError> {
    state.credentials.remove()?;
    Ok(Json(status(&state)))
}

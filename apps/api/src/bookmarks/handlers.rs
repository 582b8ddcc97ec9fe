//! Axum route handlers for the user's saved fields.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::{CareerField, MIN_COMPARE};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
struct BookmarkListResponse<'a> {
    ids: Vec<String>,
    fields: Vec<&'a CareerField>,
    /// True once enough saved fields exist to open a comparison.
    can_compare: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub field_id: String,
    pub bookmarked: bool,
}

/// GET /api/v1/bookmarks
pub async fn handle_list_bookmarks(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ids = state.bookmarks.list();
    let fields = state.catalog.resolve(ids.as_slice());
    let response = BookmarkListResponse {
        can_compare: fields.len() >= MIN_COMPARE,
        ids,
        fields,
    };
    Ok(Json(serde_json::to_value(response).map_err(anyhow::Error::from)?))
}

/// POST /api/v1/bookmarks/:id/toggle
pub async fn handle_toggle_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, AppError> {
    if state.catalog.get(&id).is_none() {
        return Err(AppError::NotFound(format!("Career field '{id}' not found")));
    }

    let bookmarked = state.bookmarks.toggle(&id)?;
    Ok(Json(ToggleResponse {
        field_id: id,
        bookmarked,
    }))
}

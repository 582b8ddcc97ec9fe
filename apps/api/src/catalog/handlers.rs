//! Axum route handlers for browsing and comparing career fields.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{CareerField, ComparisonRow};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated field ids, e.g. `healthcare,finance`.
    #[serde(default)]
    pub fields: String,
}

// Responses borrow from the catalog, which lives in `AppState`; handlers
// serialize them to `Value` before the state goes out of scope.

#[derive(Serialize)]
pub struct FieldSummary<'a> {
    #[serde(flatten)]
    pub field: &'a CareerField,
    pub bookmarked: bool,
}

#[derive(Serialize)]
pub struct FieldListResponse<'a> {
    pub query: String,
    pub total: usize,
    pub fields: Vec<FieldSummary<'a>>,
}

#[derive(Serialize)]
pub struct CompareResponse<'a> {
    pub fields: Vec<ComparisonRow<'a>>,
}

/// GET /api/v1/fields?q=
pub async fn handle_list_fields(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let fields: Vec<_> = state
        .catalog
        .search(&params.q)
        .into_iter()
        .map(|field| FieldSummary {
            field,
            bookmarked: state.bookmarks.is_bookmarked(field.id),
        })
        .collect();

    let response = FieldListResponse {
        query: params.q.trim().to_string(),
        total: fields.len(),
        fields,
    };
    Ok(Json(serde_json::to_value(response).map_err(anyhow::Error::from)?))
}

/// GET /api/v1/fields/:id
pub async fn handle_get_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let field = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Career field '{id}' not found")))?;

    let summary = FieldSummary {
        field,
        bookmarked: state.bookmarks.is_bookmarked(field.id),
    };
    Ok(Json(serde_json::to_value(summary).map_err(anyhow::Error::from)?))
}

/// GET /api/v1/compare?fields=a,b,c
pub async fn handle_compare(
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ids = split_ids(&params.fields);
    let rows = state
        .catalog
        .compare(ids.as_slice())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = CompareResponse { fields: rows };
    Ok(Json(serde_json::to_value(response).map_err(anyhow::Error::from)?))
}

fn split_ids(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

//! Axum route handlers for AI insights.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::FieldCatalog;
use crate::errors::AppError;
use crate::insights::format::SalaryDisplay;
use crate::insights::{
    CareerInsights, GenerateOutcome, InsightError, InsightState, DEFAULT_LOCATION,
    SUGGESTED_FIELDS,
};
use crate::state::AppState;

/// Free-form analysis page.
pub const EXPLORER_SURFACE: &str = "explorer";
/// Prefix for a field detail page, e.g. `field:healthcare`.
pub const FIELD_SURFACE_PREFIX: &str = "field:";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateInsightsRequest {
    pub career_field: String,
    pub location: Option<String>,
}

/// Body of the backend analysis function; camelCase to match its callers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCareerRequest {
    pub career_field: String,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCareerResponse {
    pub insights: CareerInsights,
}

#[derive(Debug, Serialize)]
pub struct SurfaceResponse {
    pub surface: String,
    pub state: InsightState,
    /// INR-formatted salary figures, present only when insights are ready.
    pub salary_display: Option<SalaryDisplay>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: &'static [&'static str],
    pub default_location: &'static str,
}

impl SurfaceResponse {
    fn new(surface: String, state: InsightState) -> Self {
        let salary_display = match &state {
            InsightState::Ready { insights, .. } => {
                Some(SalaryDisplay::from(&insights.salary_ranges))
            }
            _ => None,
        };
        Self {
            surface,
            state,
            salary_display,
        }
    }
}

/// Surfaces are the explorer plus one per catalog field, which keeps the
/// registry bounded.
fn validate_surface(catalog: &FieldCatalog, surface: &str) -> Result<(), AppError> {
    let valid = surface == EXPLORER_SURFACE
        || surface
            .strip_prefix(FIELD_SURFACE_PREFIX)
            .is_some_and(|id| catalog.get(id).is_some());
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid insight surface '{surface}'"
        )))
    }
}

fn validate_career_field(career_field: &str) -> Result<(), AppError> {
    if career_field.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a career field".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/insights/suggestions
pub async fn handle_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: SUGGESTED_FIELDS,
        default_location: DEFAULT_LOCATION,
    })
}

/// GET /api/v1/insights/:surface
pub async fn handle_get_surface(
    State(state): State<AppState>,
    Path(surface): Path<String>,
) -> Result<Json<SurfaceResponse>, AppError> {
    validate_surface(&state.catalog, &surface)?;
    let snapshot = state.surfaces.snapshot(&surface);
    Ok(Json(SurfaceResponse::new(surface, snapshot)))
}

/// POST /api/v1/insights/:surface/generate
///
/// Runs (or refreshes) insights for the surface and returns the resulting
/// state. Request failures come back as a `failed` state, not an error;
/// only a missing API key is an error. Returns 202 with the current
/// `loading` state if a request is already in flight.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(surface): Path<String>,
    Json(req): Json<GenerateInsightsRequest>,
) -> Result<(StatusCode, Json<SurfaceResponse>), AppError> {
    validate_surface(&state.catalog, &surface)?;
    validate_career_field(&req.career_field)?;

    let vm = state.surfaces.surface(&surface);
    let outcome = vm
        .generate(&req.career_field, req.location.as_deref())
        .await?;

    let status = match outcome {
        GenerateOutcome::Completed(_) => StatusCode::OK,
        GenerateOutcome::AlreadyLoading(_) => StatusCode::ACCEPTED,
    };
    let snapshot = outcome.state().clone();
    Ok((status, Json(SurfaceResponse::new(surface, snapshot))))
}

/// DELETE /api/v1/insights/:surface
pub async fn handle_reset_surface(
    State(state): State<AppState>,
    Path(surface): Path<String>,
) -> Result<Json<SurfaceResponse>, AppError> {
    validate_surface(&state.catalog, &surface)?;
    let snapshot = state.surfaces.reset(&surface);
    Ok(Json(SurfaceResponse::new(surface, snapshot)))
}

/// POST /api/v1/analyze-career
///
/// Stateless analysis: returns `{insights}` or an error. No surface state
/// is touched.
pub async fn handle_analyze_career(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeCareerRequest>,
) -> Result<Json<AnalyzeCareerResponse>, AppError> {
    validate_career_field(&req.career_field)?;

    let timeout = state.config.insight_timeout;
    let insights = tokio::time::timeout(
        timeout,
        state
            .insights
            .analyze_career_field(req.career_field.trim(), req.location.as_deref()),
    )
    .await
    .map_err(|_| InsightError::Timeout(timeout.as_secs()))??;

    Ok(Json(AnalyzeCareerResponse { insights }))
}

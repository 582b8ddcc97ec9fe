pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bookmarks::handlers as bookmarks;
use crate::catalog::handlers as catalog;
use crate::credentials::handlers as settings;
use crate::insights::handlers as insights;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static Field Catalog
        .route("/api/v1/fields", get(catalog::handle_list_fields))
        .route("/api/v1/fields/:id", get(catalog::handle_get_field))
        .route("/api/v1/compare", get(catalog::handle_compare))
        // Bookmarks
        .route("/api/v1/bookmarks", get(bookmarks::handle_list_bookmarks))
        .route(
            "/api/v1/bookmarks/:id/toggle",
            post(bookmarks::handle_toggle_bookmark),
        )
        // Settings
        .route(
            "/api/v1/settings/api-key",
            get(settings::handle_get_api_key)
                .put(settings::handle_save_api_key)
                .delete(settings::handle_remove_api_key),
        )
        // AI Insights
        .route(
            "/api/v1/insights/suggestions",
            get(insights::handle_suggestions),
        )
        .route(
            "/api/v1/insights/:surface",
            get(insights::handle_get_surface).delete(insights::handle_reset_surface),
        )
        .route(
            "/api/v1/insights/:surface/generate",
            post(insights::handle_generate),
        )
        .route("/api/v1/analyze-career", post(insights::handle_analyze_career))
        .with_state(state)
}

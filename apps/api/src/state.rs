use std::sync::Arc;

use crate::bookmarks::BookmarkStore;
use crate::catalog::FieldCatalog;
use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::insights::{InsightClient, InsightSurfaces};
use crate::llm_client::ModelBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<FieldCatalog>,
    pub credentials: CredentialStore,
    pub bookmarks: Arc<BookmarkStore>,
    /// Stateless client used by `/analyze-career`; shares the credential
    /// channel with every surface.
    pub insights: InsightClient,
    pub surfaces: Arc<InsightSurfaces>,
}

impl AppState {
    /// Wires the stores and insight surfaces together. The insight client
    /// follows the credential store, so saving a key initializes it.
    pub fn new(
        config: Config,
        catalog: FieldCatalog,
        credentials: CredentialStore,
        bookmarks: BookmarkStore,
        backend: Arc<dyn ModelBackend>,
    ) -> Self {
        let insights = InsightClient::new(backend, credentials.subscribe(), config.live_search);
        let surfaces = InsightSurfaces::new(insights.clone(), config.insight_timeout);
        Self {
            config,
            catalog: Arc::new(catalog),
            credentials,
            bookmarks: Arc::new(bookmarks),
            insights,
            surfaces: Arc::new(surfaces),
        }
    }
}

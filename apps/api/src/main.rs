mod bookmarks;
mod catalog;
mod config;
mod credentials;
mod errors;
mod insights;
mod llm_client;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bookmarks::BookmarkStore;
use crate::catalog::FieldCatalog;
use crate::config::{Config, StorageBackend};
use crate::credentials::CredentialStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileStorage, MemoryStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireSight API v{}", env!("CARGO_PKG_VERSION"));

    let storage = open_storage(&config)?;
    let credentials =
        CredentialStore::load(storage.clone()).context("Failed to load API key")?;
    let bookmarks = BookmarkStore::load(storage).context("Failed to load bookmarks")?;
    info!(
        "API key {}; {} bookmark(s) restored",
        if credentials.read().is_some() { "configured" } else { "not configured" },
        bookmarks.list().len()
    );

    let llm = LlmClient::new(config.insight_timeout)?;
    info!(
        "LLM client initialized (model: {}, live search: {})",
        llm_client::MODEL,
        config.live_search
    );

    let catalog = FieldCatalog::builtin();
    info!("Field catalog loaded with {} fields", catalog.all().len());

    let state = AppState::new(config.clone(), catalog, credentials, bookmarks, Arc::new(llm));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn open_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::File => {
            let storage = FileStorage::open(&config.data_file).with_context(|| {
                format!("Failed to open data file {}", config.data_file.display())
            })?;
            info!("Using file storage at {}", storage.path().display());
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; settings will not survive a restart");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}

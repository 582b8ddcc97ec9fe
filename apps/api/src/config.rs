use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Which durable storage backend holds the credential and bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

/// Application configuration loaded from environment variables.
/// Nothing is required; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_backend: StorageBackend,
    pub data_file: PathBuf,
    pub insight_timeout: Duration,
    pub live_search: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let storage_backend = match lookup("HIRESIGHT_STORAGE").as_deref() {
            None | Some("file") => StorageBackend::File,
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("HIRESIGHT_STORAGE must be 'file' or 'memory', got '{other}'"),
        };

        let timeout_secs = lookup("INSIGHT_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse::<u64>()
            .context("INSIGHT_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("INSIGHT_TIMEOUT_SECS must be greater than zero");
        }

        let live_search = match lookup("INSIGHT_LIVE_SEARCH") {
            None => true,
            Some(v) => parse_bool(&v)
                .with_context(|| format!("INSIGHT_LIVE_SEARCH must be a boolean, got '{v}'"))?,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            storage_backend,
            data_file: lookup("HIRESIGHT_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/hiresight.json")),
            insight_timeout: Duration::from_secs(timeout_secs),
            live_search,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! Credential Store: owns the user's Gemini API key.
//!
//! The active credential is published through a `watch` channel so the
//! insight client and every view-model observe save/remove immediately
//! without reaching for global state.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use crate::storage::{Storage, StorageError, CREDENTIAL_KEY};

pub mod handlers;

const MASK: &str = "••••••••";

/// An opaque API secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Display form for settings screens: first and last four characters only.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return MASK.to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}{MASK}{tail}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn Storage>,
    active: Arc<watch::Sender<Option<Credential>>>,
}

impl CredentialStore {
    /// Builds the store and seeds the active credential from storage.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let persisted = storage
            .get(CREDENTIAL_KEY)?
            .filter(|key| !key.trim().is_empty())
            .map(Credential::new);

        if persisted.is_some() {
            info!("Loaded persisted Gemini API key");
        } else {
            info!("No Gemini API key configured; AI insights disabled until one is saved");
        }

        let (active, _) = watch::channel(persisted);
        Ok(Self {
            storage,
            active: Arc::new(active),
        })
    }

    /// Persists `key` and makes it the active credential. A blank key is
    /// treated as `remove`.
    /// No format validation: a bad key surfaces on the first remote call.
    pub fn save(&self, key: &str) -> Result<(), StorageError> {
        let key = key.trim();
        if key.is_empty() {
            return self.remove();
        }
        if let Err(e) = self.storage.set(CREDENTIAL_KEY, key) {
            error!("Failed to save API key: {e}");
            return Err(e);
        }
        self.active.send_replace(Some(Credential::new(key)));
        info!("Gemini API key saved");
        Ok(())
    }

    /// Deletes the persisted key and de-initializes dependents.
    pub fn remove(&self) -> Result<(), StorageError> {
        if let Err(e) = self.storage.remove(CREDENTIAL_KEY) {
            error!("Failed to remove API key: {e}");
            return Err(e);
        }
        self.active.send_replace(None);
        info!("Gemini API key removed");
        Ok(())
    }

    pub fn read(&self) -> Option<Credential> {
        self.active.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Credential>> {
        self.active.subscribe()
    }
}

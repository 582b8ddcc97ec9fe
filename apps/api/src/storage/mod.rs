//! Durable key-value storage for user preferences.
//!
//! Values are plain strings under string keys; callers serialize their own
//! payloads. There is no schema versioning.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the Gemini API credential.
pub const CREDENTIAL_KEY: &str = "hiresight-gemini-api-key";
/// Key holding the JSON array of bookmarked field ids.
pub const BOOKMARKS_KEY: &str = "hiresight-bookmarks";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

/// Synchronous string-keyed store. One logical writer, so implementations
/// only need to serialize access internally.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

//! Bookmark Store: the user's saved career fields.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::storage::{Storage, StorageError, BOOKMARKS_KEY};

pub mod handlers;

/// Insertion-ordered set of bookmarked field ids, persisted on every toggle.
pub struct BookmarkStore {
    storage: Arc<dyn Storage>,
    ids: Mutex<Vec<String>>,
}

impl BookmarkStore {
    /// Reads the persisted set. Unparseable data is discarded rather than
    /// blocking startup.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let ids = match storage.get(BOOKMARKS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => dedup_preserving_order(ids),
                Err(e) => {
                    warn!("Discarding unreadable bookmark data: {e}");
                    storage.remove(BOOKMARKS_KEY)?;
                    Vec::new()
                }
            },
        };

        Ok(Self {
            storage,
            ids: Mutex::new(ids),
        })
    }

    /// Flips membership of `field_id` and returns whether it is now bookmarked.
    /// On a storage fault the in-memory set is left unchanged.
    pub fn toggle(&self, field_id: &str) -> Result<bool, StorageError> {
        let mut ids = self.ids.lock().map_err(|_| StorageError::Unavailable)?;

        let mut next = ids.clone();
        let now_bookmarked = match next.iter().position(|id| id == field_id) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(field_id.to_string());
                true
            }
        };

        self.storage
            .set(BOOKMARKS_KEY, &serde_json::to_string(&next)?)?;
        *ids = next;

        debug!("Bookmark '{field_id}' -> {now_bookmarked}");
        Ok(now_bookmarked)
    }

    pub fn is_bookmarked(&self, field_id: &str) -> bool {
        self.ids
            .lock()
            .map(|ids| ids.iter().any(|id| id == field_id))
            .unwrap_or(false)
    }

    pub fn list(&self) -> Vec<String> {
        self.ids.lock().map(|ids| ids.clone()).unwrap_or_default()
    }
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    fn empty_store() -> BookmarkStore {
        BookmarkStore::load(Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_toggle_on_empty_set_then_back() {
        let store = empty_store();

        assert!(store.toggle("healthcare").unwrap());
        assert_eq!(store.list(), vec!["healthcare".to_string()]);

        assert!(!store.toggle("healthcare").unwrap());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let store = empty_store();
        store.toggle("finance").unwrap();

        for id in ["finance", "education", "marketing"] {
            let before = store.is_bookmarked(id);
            store.toggle(id).unwrap();
            store.toggle(id).unwrap();
            assert_eq!(store.is_bookmarked(id), before, "membership of {id}");
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = empty_store();
        store.toggle("engineering").unwrap();
        store.toggle("healthcare").unwrap();
        store.toggle("finance").unwrap();
        store.toggle("healthcare").unwrap();
        assert_eq!(store.list(), vec!["engineering", "finance"]);
    }

    #[test]
    fn test_membership_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        {
            let storage = Arc::new(FileStorage::open(&path).unwrap());
            let store = BookmarkStore::load(storage).unwrap();
            store.toggle("healthcare").unwrap();
            store.toggle("education").unwrap();
        }

        let storage = Arc::new(FileStorage::open(&path).unwrap());
        let store = BookmarkStore::load(storage).unwrap();
        assert!(store.is_bookmarked("healthcare"));
        assert!(store.is_bookmarked("education"));
        assert!(!store.is_bookmarked("finance"));
    }

    #[test]
    fn test_corrupt_payload_is_discarded() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(BOOKMARKS_KEY, "not-a-json-array").unwrap();

        let store = BookmarkStore::load(storage.clone()).unwrap();
        assert!(store.list().is_empty());
        assert_eq!(storage.get(BOOKMARKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_duplicate_ids_in_storage_are_collapsed() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .set(BOOKMARKS_KEY, r#"["finance","healthcare","finance"]"#)
            .unwrap();

        let store = BookmarkStore::load(storage).unwrap();
        assert_eq!(store.list(), vec!["finance", "healthcare"]);
    }

    struct FailingWrites(MemoryStorage);

    impl Storage for FailingWrites {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_persist_leaves_set_unchanged() {
        let store = BookmarkStore::load(Arc::new(FailingWrites(MemoryStorage::new()))).unwrap();
        assert!(store.toggle("healthcare").is_err());
        assert!(!store.is_bookmarked("healthcare"));
    }
}

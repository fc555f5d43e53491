//! Local persistence for favorites, history, and saved keywords.
//!
//! Everything goes through a minimal key-value contract so the core
//! and its tests can run against an in-memory fake while the CLI uses
//! one JSON document per key on disk.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

mod favorites;
mod history;
mod keywords;
mod records;

pub use favorites::{Favorites, SaveResult};
pub use history::History;
pub use keywords::{KeywordBook, KeywordUpdate, MAX_KEYWORDS};
pub use records::PoemRecord;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt store entry '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal key-value contract for local storage.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the stored value for a key, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value under a key, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON document per key under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform data directory
    /// (`~/.local/share/kawi` on Linux).
    pub fn at_data_dir() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(data_dir.join("kawi"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
            path: self.dir.clone(),
            source: e,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| StoreError::Io { path, source: e })
    }
}

/// Read a JSON array of records under a key, treating a missing key as
/// an empty list.
fn load_records<T: serde::de::DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            source: e,
        }),
        None => Ok(Vec::new()),
    }
}

fn save_records<T: serde::Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    records: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(records).map_err(|e| StoreError::Corrupt {
        key: key.to_string(),
        source: e,
    })?;
    store.put(key, &raw)
}

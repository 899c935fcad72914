use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::item::Item;

/// Errors from a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt stored data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The read-all/write-all persistence contract.
///
/// The store reads the collection once at startup and writes the full
/// collection after every mutation; there is no partial persistence.
pub trait StorageBackend: Send {
    fn load_all(&self) -> Result<Vec<Item>, StorageError>;
    fn save_all(&self, items: &[Item]) -> Result<(), StorageError>;
}

/// Default file name for the persisted collection.
pub const DEFAULT_STORE_FILE: &str = "larder-items.json";

/// A JSON array of items in a single file, keyed by its path.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the default file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DEFAULT_STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    /// Missing file reads as an empty collection; corrupt JSON is an error
    /// the store downgrades to warn-and-empty.
    fn load_all(&self) -> Result<Vec<Item>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_all(&self, items: &[Item]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    items: Mutex<Vec<Item>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-seeded, as if a previous session had saved `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load_all(&self) -> Result<Vec<Item>, StorageError> {
        let guard = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save_all(&self, items: &[Item]) -> Result<(), StorageError> {
        let mut guard = self.items.lock().unwrap_or_else(|e| e.into_inner());
        *guard = items.to_vec();
        Ok(())
    }
}

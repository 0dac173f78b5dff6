//! Named key-value persistence slots

use std::collections::HashMap;
use std::fs;
use thiserror::Error;

use crate::storage::location::{StorageLocation, StorageLocationError};

/// Key under which the task collection is persisted
pub const TASKS_KEY: &str = "todos";

/// Errors related to slot storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage location error: {0}")]
    Location(#[from] StorageLocationError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key-value store holding whole string values per key
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, mostly for tests and ephemeral sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw content
    pub fn with_slot(mut self, key: &str, value: impl Into<String>) -> Self {
        self.slots.insert(key.to_string(), value.into());
        self
    }

    /// Get the raw content of a slot
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage, one file per key under a storage directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    location: StorageLocation,
}

impl FileStorage {
    /// Create a new file storage for the given location
    pub fn new(location: StorageLocation) -> Self {
        FileStorage { location }
    }

    /// Get the storage location
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.location.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.location.slot_path(key)?;
        self.location.ensure_exists()?;

        // Write to a sibling file first so readers never see a partial slot
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

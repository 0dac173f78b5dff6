//! Storage directory location detection and management

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application directory name under the platform data directory
const APP_DIR: &str = "tasklist";

/// Extension used for slot files
const SLOT_EXTENSION: &str = "json";

/// Errors related to storage location
#[derive(Debug, Error)]
pub enum StorageLocationError {
    #[error("Failed to determine the platform data directory")]
    NoDataDirectory,
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Represents where persistence slots are stored
#[derive(Debug, Clone)]
pub struct StorageLocation {
    /// Directory holding one file per slot key
    pub dir: PathBuf,
}

impl StorageLocation {
    /// Use an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        StorageLocation { dir: dir.into() }
    }

    /// Get the default location (`<data dir>/tasklist`)
    pub fn default_location() -> Result<Self, StorageLocationError> {
        let data = dirs::data_dir().ok_or(StorageLocationError::NoDataDirectory)?;
        Ok(StorageLocation {
            dir: data.join(APP_DIR),
        })
    }

    /// Resolve the location from an optional override, falling back to the default
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, StorageLocationError> {
        match explicit {
            Some(dir) => Ok(Self::at(dir)),
            None => Self::default_location(),
        }
    }

    /// Check if the storage directory exists
    pub fn exists(&self) -> bool {
        self.dir.exists()
    }

    /// Create the storage directory if it doesn't exist
    pub fn ensure_exists(&self) -> Result<(), StorageLocationError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Path of the file backing the given slot key
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageLocationError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StorageLocationError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_location() {
        // Not every CI sandbox has a data directory
        if let Ok(loc) = StorageLocation::default_location() {
            assert!(loc.dir.ends_with("tasklist"));
        }
    }

    #[test]
    fn test_resolve_explicit() {
        let temp = TempDir::new().unwrap();
        let loc = StorageLocation::resolve(Some(temp.path())).unwrap();
        assert_eq!(loc.dir, temp.path());
    }

    #[test]
    fn test_slot_path() {
        let loc = StorageLocation::at("/data/tasklist");
        assert_eq!(
            loc.slot_path("todos").unwrap(),
            PathBuf::from("/data/tasklist/todos.json")
        );
    }

    #[test]
    fn test_slot_path_rejects_bad_keys() {
        let loc = StorageLocation::at("/data/tasklist");
        assert!(loc.slot_path("").is_err());
        assert!(loc.slot_path("../escape").is_err());
        assert!(loc.slot_path("nested/key").is_err());
        assert!(loc.slot_path(".hidden").is_err());
    }

    #[test]
    fn test_ensure_exists() {
        let temp = TempDir::new().unwrap();
        let loc = StorageLocation::at(temp.path().join("nested").join("store"));
        assert!(!loc.exists());

        loc.ensure_exists().unwrap();
        assert!(loc.exists());
    }
}

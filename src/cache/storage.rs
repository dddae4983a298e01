//! The registry of named cache stores.

use std::path::PathBuf;

use tracing::info;

use crate::cache::error::CacheError;
use crate::cache::store::CacheStore;

/// Registry of named cache stores under a single root directory.
///
/// Each store is a subdirectory named after it. Opening a store creates
/// it if absent; deletion removes the whole store. The filesystem
/// serializes access per entry, so no locking is layered on top.
pub struct CacheStorage {
    root: PathBuf,
}

impl CacheStorage {
    /// Create a registry rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the store called `name`, creating it if absent.
    pub fn open(&self, name: &str) -> Result<CacheStore, CacheError> {
        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir)?;
        Ok(CacheStore::new(name.to_string(), dir))
    }

    /// Names of every store currently present, sorted.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete the store called `name` and everything in it.
    ///
    /// Returns whether the store existed.
    pub fn delete(&self, name: &str) -> Result<bool, CacheError> {
        let dir = self.root.join(name);
        if !dir.exists() {
            return Ok(false);
        }
        std::fs::remove_dir_all(&dir)?;
        info!(store = name, "cache store deleted");
        Ok(true)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_store() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let storage = CacheStorage::new(tmp.path().join("caches")).expect("storage");

        let store = storage.open("static-v1").expect("open");
        assert_eq!(store.name(), "static-v1");
        assert_eq!(storage.keys().expect("keys"), vec!["static-v1"]);
    }

    #[test]
    fn test_keys_lists_only_stores() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let storage = CacheStorage::new(tmp.path()).expect("storage");

        storage.open("b-store").expect("open b");
        storage.open("a-store").expect("open a");
        std::fs::write(tmp.path().join("stray.txt"), "x").expect("stray file");

        assert_eq!(storage.keys().expect("keys"), vec!["a-store", "b-store"]);
    }

    #[test]
    fn test_delete_reports_existence() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let storage = CacheStorage::new(tmp.path()).expect("storage");

        storage.open("doomed").expect("open");
        assert!(storage.delete("doomed").expect("delete"));
        assert!(!storage.delete("doomed").expect("second delete"));
        assert!(storage.keys().expect("keys").is_empty());
    }
}

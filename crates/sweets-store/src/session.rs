//! # Session Storage
//!
//! A small string key-value store that outlives the process, holding the
//! signed-in user as JSON under [`SESSION_USER_KEY`].
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <data dir>/session.json                                               │
//! │                                                                         │
//! │  {                                                                      │
//! │    "user": "{\"id\":\"1\",\"email\":\"admin@example.com\",...}"        │
//! │  }                                                                      │
//! │                                                                         │
//! │  Values are opaque strings; callers serialize what they store.         │
//! │  A missing file reads as an empty store.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Key the signed-in user is stored under.
pub const SESSION_USER_KEY: &str = "user";

/// String key-value storage.
pub trait SessionStorage: Send + Sync + Debug {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// File Storage
// =============================================================================

/// Session storage backed by a JSON object file.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Uses the given file; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStorage { path: path.into() }
    }

    /// `<platform data dir>/session.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "sweetshop", "sweet-shop")
            .map(|dirs| dirs.data_dir().join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic replace.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)?;

        debug!(key = %key, path = ?self.path, "Session item stored");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
            debug!(key = %key, path = ?self.path, "Session item removed");
        }
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// Session storage that lives only as long as the value.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> StoreResult<T> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StoreError::Internal("session storage lock poisoned".into()))?;
        Ok(f(&mut items))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(storage: &dyn SessionStorage) {
        assert_eq!(storage.get_item(SESSION_USER_KEY).unwrap(), None);

        storage.set_item(SESSION_USER_KEY, "{\"id\":\"1\"}").unwrap();
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(
            storage.get_item(SESSION_USER_KEY).unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );

        storage.remove_item(SESSION_USER_KEY).unwrap();
        storage.remove_item(SESSION_USER_KEY).unwrap();
        assert_eq!(storage.get_item(SESSION_USER_KEY).unwrap(), None);
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_storage() {
        exercise(&MemorySessionStorage::new());
    }

    #[test]
    fn test_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&FileSessionStorage::new(dir.path().join("nested").join("session.json")));
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        FileSessionStorage::new(&path)
            .set_item(SESSION_USER_KEY, "saved")
            .unwrap();

        let reopened = FileSessionStorage::new(&path);
        assert_eq!(
            reopened.get_item(SESSION_USER_KEY).unwrap().as_deref(),
            Some("saved")
        );
    }

    #[test]
    fn test_corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let err = FileSessionStorage::new(&path)
            .get_item(SESSION_USER_KEY)
            .unwrap_err();
        assert!(matches!(err, StoreError::SessionFormat(_)));
    }
}

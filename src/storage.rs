//! Storage layer for ttt
//!
//! All persistent state lives in a single data directory:
//!
//! ```text
//! <data-dir>/
//!   team-task-tracker-tasks.json   # The task collection, one JSON array
//!   user                           # Currently selected team member id
//!   ttt.toml                       # Optional configuration
//! ```
//!
//! The task collection is read and written as one blob through the
//! [`BlobStore`] trait, so the store logic never depends on the filesystem
//! directly. `FileStore` is the production backing; `MemoryStore` backs
//! tests and ephemeral use.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Storage key for the task collection. Matches the browser build's
/// localStorage key so an exported blob drops in unchanged.
pub const TASKS_KEY: &str = "team-task-tracker-tasks";

/// Name of the selected-user file
const USER_FILE: &str = "user";

/// Name of the configuration file
const CONFIG_FILE: &str = "ttt.toml";

/// Storage manager for the ttt data directory
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at the given directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Create a storage manager at the platform default data directory
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "ttt").ok_or_else(|| {
            Error::OperationFailed("could not determine a data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the blob file for a storage key
    pub fn blob_file(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Path to the selected-user file
    pub fn user_file(&self) -> PathBuf {
        self.data_dir.join(USER_FILE)
    }

    /// Path to the configuration file
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    // =========================================================================
    // File I/O helpers (atomic writes for safety)
    // =========================================================================

    /// Write JSON data atomically (write to temp, then rename)
    pub fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.write_atomic(path, json.as_bytes())
    }

    /// Read JSON data from a file
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        let data: T = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Write data atomically using temp file + rename
    ///
    /// Readers never see a partially written file: the rename either lands
    /// the whole payload or leaves the previous content in place. This does
    /// NOT serialize read-modify-write cycles across processes; concurrent
    /// writers race last-writer-wins (see tests/lost_update.rs).
    pub fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;

        Ok(())
    }

    // =========================================================================
    // Selected-user persistence
    // =========================================================================

    /// Read the persisted selected-user id, if any
    pub fn read_selected_user(&self) -> Option<String> {
        let path = self.user_file();
        fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Persist the selected-user id
    pub fn write_selected_user(&self, id: &str) -> Result<()> {
        let path = self.user_file();
        self.write_atomic(&path, id.as_bytes())
    }
}

// =============================================================================
// Blob store backings
// =============================================================================

/// Key-value backing for serialized blobs.
///
/// One key maps to one opaque string payload. Implementations do not parse,
/// validate, or version the payload; that is the caller's concern.
pub trait BlobStore {
    /// Read the blob for a key. Absent keys are `Ok(None)`, not errors.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob for a key.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed blob store: each key is a `<key>.json` file in the data
/// directory, written atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    storage: Storage,
}

impl FileStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.storage.blob_file(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.storage.blob_file(key);
        self.storage.write_atomic(&path, value.as_bytes())
    }
}

/// In-memory blob store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with raw content, bypassing any serialization.
    pub fn seed(&self, key: &str, value: &str) {
        self.blobs
            .lock()
            .expect("blob map poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .blobs
            .lock()
            .expect("blob map poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.blobs
            .lock()
            .expect("blob map poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        let storage = Storage::new(root.clone());

        assert_eq!(
            storage.blob_file(TASKS_KEY),
            root.join("team-task-tracker-tasks.json")
        );
        assert_eq!(storage.user_file(), root.join("user"));
        assert_eq!(storage.config_file(), root.join("ttt.toml"));
    }

    #[test]
    fn test_atomic_write_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        #[derive(Serialize, serde::Deserialize, PartialEq, Debug)]
        struct TestData {
            name: String,
            value: i32,
        }

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        let file = temp.path().join("nested/dir/test.json");
        storage.write_json(&file, &data).unwrap();
        let read_back: TestData = storage.read_json(&file).unwrap();

        assert_eq!(data, read_back);
    }

    #[test]
    fn test_selected_user_persistence() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        assert!(storage.read_selected_user().is_none());

        storage.write_selected_user("2").unwrap();
        assert_eq!(storage.read_selected_user(), Some("2".to_string()));
    }

    #[test]
    fn test_file_store_absent_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(Storage::new(temp.path().to_path_buf()));

        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(Storage::new(temp.path().to_path_buf()));

        store.write(TASKS_KEY, "[]").unwrap();
        assert_eq!(store.read(TASKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k").unwrap(), None);

        store.write("k", "v1").unwrap();
        store.write("k", "v2").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));
    }
}

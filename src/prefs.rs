//! Person Gallery - Preference Store Port
//!
//! Key-value persistence for the serialized record list. The original
//! app leaned on an ambient process-wide defaults store; here the store
//! is an explicit dependency injected into the gallery so the host owns
//! its lifecycle.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::GalleryResult;

/// Key-value persistence port.
pub trait PreferenceStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> GalleryResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any prior blob.
    fn set(&self, key: &str, value: &[u8]) -> GalleryResult<()>;
}

/// File-backed preference store: one file per key inside a root
/// directory, written atomically via temp file + rename.
pub struct FilePreferenceStore {
    root: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> GalleryResult<Option<Vec<u8>>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read(&path)?))
    }

    fn set(&self, key: &str, value: &[u8]) -> GalleryResult<()> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        file.write_all(value)?;
        file.sync_all()?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

/// In-memory preference store for tests and ephemeral hosts.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> GalleryResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> GalleryResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip_and_overwrite() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path());

        assert!(store.get("people").unwrap().is_none());

        store.set("people", b"first").unwrap();
        assert_eq!(store.get("people").unwrap().unwrap(), b"first");

        store.set("people", b"second").unwrap();
        assert_eq!(store.get("people").unwrap().unwrap(), b"second");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get("people").unwrap().is_none());

        store.set("people", b"blob").unwrap();
        assert_eq!(store.get("people").unwrap().unwrap(), b"blob");
    }
}

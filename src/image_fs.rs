//! Person Gallery - Documents Directory Image Store
//!
//! Flat file store for the compressed image blobs. Each file is named
//! by its record's image reference; the record list is the only index
//! into this directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, GalleryResult};

/// Image file store rooted at a fixed documents directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: &Path) -> GalleryResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Full path of the file for an image reference.
    pub fn path_for(&self, image_reference: &str) -> PathBuf {
        self.root.join(image_reference)
    }

    /// Write an image blob atomically under `image_reference`.
    pub fn write(&self, image_reference: &str, data: &[u8]) -> GalleryResult<()> {
        let path = self.path_for(image_reference);

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        file.write_all(data)?;
        file.sync_all()?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Read an image blob back.
    pub fn read(&self, image_reference: &str) -> GalleryResult<Vec<u8>> {
        let path = self.path_for(image_reference);

        if !path.exists() {
            return Err(GalleryError::ImageNotFound(image_reference.to_string()));
        }

        Ok(fs::read(&path)?)
    }

    /// Remove the file for an image reference.
    ///
    /// A missing file is an error: the record list claims the file
    /// exists, and the caller keeps the record when removal fails.
    pub fn delete(&self, image_reference: &str) -> GalleryResult<()> {
        let path = self.path_for(image_reference);

        if !path.exists() {
            return Err(GalleryError::ImageNotFound(image_reference.to_string()));
        }

        fs::remove_file(&path)?;
        Ok(())
    }

    /// Check if a file exists for an image reference.
    pub fn exists(&self, image_reference: &str) -> bool {
        self.path_for(image_reference).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_read_delete() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        store.write("abc", b"jpeg bytes").unwrap();
        assert!(store.exists("abc"));
        assert_eq!(store.read("abc").unwrap(), b"jpeg bytes");

        store.delete("abc").unwrap();
        assert!(!store.exists("abc"));
    }

    #[test]
    fn test_delete_missing_is_error() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.delete("nope"),
            Err(GalleryError::ImageNotFound(_))
        ));
    }

    #[test]
    fn test_read_missing_is_error() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.read("nope"),
            Err(GalleryError::ImageNotFound(_))
        ));
    }
}

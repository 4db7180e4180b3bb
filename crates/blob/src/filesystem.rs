//! Filesystem-rooted blob store.

use crate::store::{blob_name, local_path, storage_err, BlobStore};
use promptvault_core::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Blob store rooted in a local directory.
///
/// Every blob name maps to a file below `root`. This is the backend to use
/// against object storage mounted into the filesystem; nothing in it assumes
/// local-disk latency. The root is not required to exist until the first
/// write; a missing root simply lists as empty.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`. No I/O happens until the first
    /// operation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        local_path(&self.root, name)
    }
}

impl BlobStore for FsStore {
    fn backend_name(&self) -> &str {
        "fs"
    }

    fn list(&self, prefix: &str) -> AppResult<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| {
                storage_err("Failed to list blobs", std::io::Error::from(e))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(&self.root).map_err(|_| {
                AppError::StorageBackend(format!(
                    "Listed entry {:?} is outside the store root {:?}",
                    entry.path(),
                    self.root
                ))
            })?;

            let name = blob_name(rel);
            if name.starts_with(prefix) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    fn get(&self, name: &str) -> AppResult<Vec<u8>> {
        let path = self.blob_path(name);
        std::fs::read(&path)
            .map_err(|e| storage_err(&format!("Failed to read blob '{}'", name), e))
    }

    fn put(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
        let path = self.blob_path(name);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| storage_err(&format!("Failed to create prefix for '{}'", name), e))?;
        }

        std::fs::write(&path, bytes)
            .map_err(|e| storage_err(&format!("Failed to write blob '{}'", name), e))
    }

    fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.blob_path(name).is_file())
    }
}

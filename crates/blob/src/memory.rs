//! In-memory blob store.

use crate::store::BlobStore;
use promptvault_core::{AppError, AppResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory fake for tests and embedders.
///
/// A sorted map of blob name to content stands in for the remote store, so
/// version-management logic can be exercised without touching the network or
/// the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.blobs
            .lock()
            .map_err(|_| AppError::StorageBackend("Memory store lock poisoned".to_string()))
    }
}

impl BlobStore for MemoryStore {
    fn backend_name(&self) -> &str {
        "memory"
    }

    fn list(&self, prefix: &str) -> AppResult<Vec<String>> {
        let blobs = self.lock()?;
        Ok(blobs
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn get(&self, name: &str) -> AppResult<Vec<u8>> {
        let blobs = self.lock()?;
        blobs
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::StorageBackend(format!("Blob not found: '{}'", name)))
    }

    fn put(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
        let mut blobs = self.lock()?;
        blobs.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn exists(&self, name: &str) -> AppResult<bool> {
        let blobs = self.lock()?;
        Ok(blobs.contains_key(name))
    }
}

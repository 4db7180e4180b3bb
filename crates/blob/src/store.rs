//! Blob store trait and backend factory.

use promptvault_core::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Object-level interface to a blob store.
///
/// Blob names are `/`-separated logical paths. Prefixes are a naming
/// convention only; there are no real directories. Listing is plain string
/// prefix matching, the way object stores do it.
pub trait BlobStore: Send + Sync + std::fmt::Debug {
    /// Get backend name (e.g., "fs", "memory")
    fn backend_name(&self) -> &str;

    /// List all blob names starting with `prefix`, sorted ascending.
    fn list(&self, prefix: &str) -> AppResult<Vec<String>>;

    /// Read a blob's content.
    fn get(&self, name: &str) -> AppResult<Vec<u8>>;

    /// Write a blob, overwriting any existing content under that name.
    fn put(&self, name: &str, bytes: &[u8]) -> AppResult<()>;

    /// Check whether a blob exists.
    fn exists(&self, name: &str) -> AppResult<bool>;
}

/// Create a blob store based on the configured backend name.
///
/// The `fs` backend roots blobs under `root` on the local filesystem, which
/// also covers object storage mounted through FUSE or a network share. The
/// `memory` backend starts empty and ignores `root`; it exists for tests and
/// embedders that need a throwaway store.
pub fn create_store(backend: &str, root: &Path) -> AppResult<Box<dyn BlobStore>> {
    match backend {
        "fs" => Ok(Box::new(crate::filesystem::FsStore::new(root))),

        "memory" => Ok(Box::new(crate::memory::MemoryStore::new())),

        _ => Err(AppError::Config(format!(
            "Unknown blob backend: '{}'. Supported backends: fs, memory",
            backend
        ))),
    }
}

/// Map an I/O failure from a backend to the storage error taxonomy.
///
/// Permission denials surface as authentication failures; everything else is
/// a generic transport error.
pub(crate) fn storage_err(context: &str, err: std::io::Error) -> AppError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        AppError::Authentication(format!("{}: {}", context, err))
    } else {
        AppError::StorageBackend(format!("{}: {}", context, err))
    }
}

/// Join a relative filesystem path into a `/`-separated blob name.
pub(crate) fn blob_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve a `/`-separated blob name to a path under `root`.
pub(crate) fn local_path(root: &Path, name: &str) -> PathBuf {
    name.split('/').fold(root.to_path_buf(), |p, seg| p.join(seg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fs_store() {
        let store = create_store("fs", Path::new("/tmp/bucket")).unwrap();
        assert_eq!(store.backend_name(), "fs");
    }

    #[test]
    fn test_create_memory_store() {
        let store = create_store("memory", Path::new("ignored")).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_create_unknown_backend() {
        let result = create_store("gcs", Path::new("/tmp/bucket"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown blob backend"));
    }

    #[test]
    fn test_blob_name_joins_components() {
        let rel = Path::new("customized").join("brand_1").join("metric.yaml");
        assert_eq!(blob_name(&rel), "customized/brand_1/metric.yaml");
    }

    #[test]
    fn test_local_path_splits_segments() {
        let path = local_path(Path::new("/root"), "a/b/c.yaml");
        assert_eq!(path, Path::new("/root").join("a").join("b").join("c.yaml"));
    }
}

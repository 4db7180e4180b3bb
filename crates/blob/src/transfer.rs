//! Tree transfer between a local directory and a blob store.
//!
//! These operations are file-level atomic only: a failure partway through
//! leaves the destination partially written, and the error message says so.
//! Re-running the same transfer is safe because files are overwritten, never
//! appended.

use crate::store::{blob_name, local_path, BlobStore};
use glob::Pattern;
use promptvault_core::{AppError, AppResult};
use std::collections::BTreeSet;
use std::path::Path;

/// Compiled ignore patterns, matched against `/`-separated paths relative to
/// the tree root.
#[derive(Debug, Default)]
pub struct TreeFilter {
    patterns: Vec<Pattern>,
}

impl TreeFilter {
    /// Compile a list of glob patterns (e.g., `*.log`, `drafts/*`).
    pub fn new(patterns: &[String]) -> AppResult<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for raw in patterns {
            let pattern = Pattern::new(raw).map_err(|e| {
                AppError::Config(format!("Invalid ignore pattern '{}': {}", raw, e))
            })?;
            compiled.push(pattern);
        }
        Ok(Self { patterns: compiled })
    }

    /// A filter that ignores nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self, relative: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(relative))
    }
}

/// List the immediate child prefix names under `base`.
///
/// Derived from the blob listing: for `base = "artifacts"` and a blob named
/// `artifacts/Version 1.0.0/a.yaml`, the child is `Version 1.0.0`. Blobs
/// sitting directly under `base` have no child prefix and are skipped.
/// Callers decide which children are meaningful.
pub fn list_child_prefixes(store: &dyn BlobStore, base: &str) -> AppResult<BTreeSet<String>> {
    let listing_prefix = if base.is_empty() {
        String::new()
    } else {
        format!("{}/", base)
    };

    let mut children = BTreeSet::new();
    for name in store.list(&listing_prefix)? {
        let Some(remainder) = name.strip_prefix(&listing_prefix) else {
            continue;
        };
        if let Some((child, _)) = remainder.split_once('/') {
            children.insert(child.to_string());
        }
    }

    Ok(children)
}

/// Upload every file under `local_root` to `remote_prefix`, preserving
/// relative paths and skipping `filter` matches. Returns the number of files
/// uploaded.
pub fn upload_tree(
    store: &dyn BlobStore,
    local_root: &Path,
    remote_prefix: &str,
    filter: &TreeFilter,
) -> AppResult<usize> {
    // A missing local root is an immediate I/O error, not an empty snapshot.
    std::fs::metadata(local_root)?;

    let mut uploaded = 0usize;
    for entry in walkdir::WalkDir::new(local_root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative_name(local_root, entry.path())?;
        if filter.is_ignored(&rel) {
            tracing::debug!("Skipping ignored file: {}", rel);
            continue;
        }

        let bytes = std::fs::read(entry.path())?;
        let name = format!("{}/{}", remote_prefix, rel);
        store
            .put(&name, &bytes)
            .map_err(|e| partial_transfer_error("Upload to", remote_prefix, &rel, uploaded, e))?;
        uploaded += 1;
    }

    tracing::debug!("Uploaded {} file(s) to '{}'", uploaded, remote_prefix);
    Ok(uploaded)
}

/// Download every blob under `remote_prefix` into `local_root`.
///
/// With `replace`, the destination is cleared first, so local files absent
/// from the snapshot are removed. Without it the snapshot is merged on top:
/// same-named files are overwritten, extras are left untouched. Returns the
/// number of files written.
pub fn download_tree(
    store: &dyn BlobStore,
    remote_prefix: &str,
    local_root: &Path,
    replace: bool,
    filter: &TreeFilter,
) -> AppResult<usize> {
    let listing_prefix = format!("{}/", remote_prefix);
    let names = store.list(&listing_prefix)?;

    // Only clear the destination once the remote listing has succeeded.
    if replace && local_root.exists() {
        std::fs::remove_dir_all(local_root)?;
    }
    std::fs::create_dir_all(local_root)?;

    let mut downloaded = 0usize;
    for name in names {
        let Some(rel) = name.strip_prefix(&listing_prefix) else {
            continue;
        };
        if rel.is_empty() || filter.is_ignored(rel) {
            continue;
        }

        let bytes = store
            .get(&name)
            .map_err(|e| partial_transfer_error("Download from", remote_prefix, rel, downloaded, e))?;

        let target = local_path(local_root, rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, bytes)?;
        downloaded += 1;
    }

    tracing::debug!(
        "Downloaded {} file(s) from '{}' to {:?}",
        downloaded,
        remote_prefix,
        local_root
    );
    Ok(downloaded)
}

/// Wrap a mid-transfer failure so the caller knows the tree is partial.
/// Authentication failures pass through untouched.
fn partial_transfer_error(
    direction: &str,
    prefix: &str,
    rel: &str,
    completed: usize,
    err: AppError,
) -> AppError {
    match err {
        AppError::Authentication(_) => err,
        other => AppError::StorageBackend(format!(
            "{} '{}' failed at '{}' after {} file(s); the tree may be partially written, re-run to overwrite: {}",
            direction, prefix, rel, completed, other
        )),
    }
}

fn relative_name(root: &Path, path: &Path) -> AppResult<String> {
    let rel = path.strip_prefix(root).map_err(|_| {
        AppError::Io(std::io::Error::other(format!(
            "Path {:?} is outside the tree root {:?}",
            path, root
        )))
    })?;
    Ok(blob_name(rel))
}

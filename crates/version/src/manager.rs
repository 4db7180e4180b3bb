//! The version manager: snapshot bookkeeping over a prompt tree.
//!
//! Owns no persistent state beyond its configuration. Versions exist only as
//! prefixes in the blob store; the manager lists and parses them, computes
//! bumps, and delegates tree transfer to the blob layer.

use promptvault_blob::{download_tree, list_child_prefixes, upload_tree, BlobStore, TreeFilter};
use promptvault_core::{AppConfig, AppError, AppResult};
use promptvault_prompt::{self as prompt, PathResolver, PromptDocument};
use std::path::{Path, PathBuf};

use crate::semver::{next_version, Bump, Version};
use crate::source::Source;

/// Manages prompt lookup and versioned snapshots for one prompt tree.
///
/// Reads come from the local directory or from versioned snapshots in the
/// blob store; writes only ever create new snapshots. There is no locking
/// and no multi-writer coordination: two concurrent `save_snapshot` calls
/// can compute the same next version and the later writer wins. Callers
/// that need multi-writer safety must serialize snapshot creation
/// externally.
#[derive(Debug)]
pub struct VersionManager {
    local_dir: PathBuf,
    resolver: Box<dyn PathResolver>,
    remote: Option<RemoteTarget>,
    filter: TreeFilter,
}

#[derive(Debug)]
struct RemoteTarget {
    store: Box<dyn BlobStore>,
    /// Base path under the store root; empty means versions sit at the top.
    base: String,
}

/// Builder for [`VersionManager`].
pub struct VersionManagerBuilder {
    local_dir: PathBuf,
    resolver: Box<dyn PathResolver>,
    store: Option<Box<dyn BlobStore>>,
    base_dir: Option<String>,
    ignore: Vec<String>,
}

impl VersionManagerBuilder {
    /// Attach remote snapshot storage.
    pub fn remote(mut self, store: Box<dyn BlobStore>, base_dir: Option<&str>) -> Self {
        self.store = Some(store);
        self.base_dir = base_dir.map(|b| b.to_string());
        self
    }

    /// Glob patterns skipped during snapshot upload/download.
    pub fn ignore(mut self, patterns: &[String]) -> Self {
        self.ignore = patterns.to_vec();
        self
    }

    pub fn build(self) -> AppResult<VersionManager> {
        let filter = TreeFilter::new(&self.ignore)?;

        let remote = self.store.map(|store| RemoteTarget {
            store,
            // Trailing slashes in the configured base are tolerated once,
            // here, so prefix assembly never has to think about them.
            base: self
                .base_dir
                .as_deref()
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
        });

        Ok(VersionManager {
            local_dir: self.local_dir,
            resolver: self.resolver,
            remote,
            filter,
        })
    }
}

impl VersionManager {
    /// Start building a manager for the prompt tree at `local_dir`, using
    /// `resolver` to map lookup keys to file paths.
    pub fn builder(
        local_dir: impl Into<PathBuf>,
        resolver: Box<dyn PathResolver>,
    ) -> VersionManagerBuilder {
        VersionManagerBuilder {
            local_dir: local_dir.into(),
            resolver,
            store: None,
            base_dir: None,
            ignore: Vec::new(),
        }
    }

    /// Assemble a manager from application configuration: resolver from the
    /// scheme name, blob store from the remote section when present.
    pub fn from_config(config: &AppConfig) -> AppResult<VersionManager> {
        let resolver = prompt::create_resolver(&config.scheme)?;
        let mut builder =
            VersionManager::builder(config.local_dir.clone(), resolver).ignore(&config.ignore);

        if let Some(ref remote) = config.remote {
            let store = promptvault_blob::create_store(&remote.backend, &remote.root)?;
            builder = builder.remote(store, remote.base_dir.as_deref());
        }

        builder.build()
    }

    /// Root of the local prompt tree.
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    /// Map lookup keys to the relative path the configured scheme assigns
    /// them.
    pub fn resolve_path(&self, keys: &[String]) -> AppResult<String> {
        self.resolver.resolve(keys)
    }

    /// All snapshot versions in remote storage, newest first.
    ///
    /// Prefixes that do not parse as `Version <x>.<y>.<z>` are skipped.
    pub fn list_versions(&self) -> AppResult<Vec<Version>> {
        let remote = self.remote()?;
        let prefixes = list_child_prefixes(remote.store.as_ref(), &remote.base)?;

        let mut versions: Vec<Version> = prefixes
            .iter()
            .filter_map(|name| Version::from_prefix_name(name))
            .collect();
        versions.sort_unstable_by(|a, b| b.cmp(a));

        tracing::debug!("Found {} snapshot version(s)", versions.len());
        Ok(versions)
    }

    /// Load a prompt document from the given source.
    ///
    /// `Source::Local` reads the local tree. A pinned or latest version
    /// fetches the single resolved file out of that snapshot; the rest of
    /// the tree is left untouched.
    pub fn load_prompt(&self, keys: &[String], source: &Source) -> AppResult<PromptDocument> {
        let rel = self.resolver.resolve(keys)?;

        match source {
            Source::Local => prompt::load_document(&self.local_dir.join(&rel)),
            _ => {
                let version = self.resolve_remote_version(source)?;
                let remote = self.remote()?;
                let name = format!("{}/{}", self.version_prefix(remote, &version), rel);

                if !remote.store.exists(&name)? {
                    return Err(AppError::PromptFileNotFound(format!(
                        "'{}' in snapshot {}",
                        rel, version
                    )));
                }

                let bytes = remote.store.get(&name)?;
                let text = String::from_utf8(bytes).map_err(|_| {
                    AppError::PromptParse(format!("{}: content is not valid UTF-8", name))
                })?;
                prompt::parse_document(&text, &name)
            }
        }
    }

    /// Load a prompt and render it as a string.
    ///
    /// With `field`, returns that field of the entry; without it, the whole
    /// entry is dumped as YAML. The entry key is the slug of the last lookup
    /// key, which is also the file stem every shipped scheme produces.
    pub fn get_prompt_as_string(
        &self,
        keys: &[String],
        source: &Source,
        field: Option<&str>,
    ) -> AppResult<String> {
        let document = self.load_prompt(keys, source)?;
        let entry_key = keys
            .last()
            .map(|k| prompt::slug(k.trim()))
            .ok_or_else(|| AppError::InvalidKeys("At least one key is required".to_string()))?;

        document.render_as_string(&entry_key, field)
    }

    /// Snapshot the local tree to remote storage under the next version.
    ///
    /// The next version is the bump of the highest existing one (`1.0.0` /
    /// `0.1.0` / `0.0.1` when the store is empty). Re-saving a version that
    /// somehow already exists overwrites it wholesale: last write wins,
    /// here as everywhere else.
    pub fn save_snapshot(&self, bump: Bump) -> AppResult<Version> {
        let remote = self.remote()?;
        let existing = self.list_versions()?;
        let next = next_version(&existing, bump);
        let prefix = self.version_prefix(remote, &next);

        tracing::info!("Saving snapshot of {:?} as '{}'", self.local_dir, prefix);
        let count = upload_tree(remote.store.as_ref(), &self.local_dir, &prefix, &self.filter)?;
        tracing::info!("Snapshot {} complete ({} file(s))", next, count);

        Ok(next)
    }

    /// Download a snapshot's full tree into the local directory.
    ///
    /// With `replace`, local files absent from the snapshot are removed;
    /// otherwise the snapshot is merged on top of the existing tree.
    /// Returns the concrete version that was loaded.
    pub fn load_snapshot(&self, source: &Source, replace: bool) -> AppResult<Version> {
        if matches!(source, Source::Local) {
            return Err(AppError::Config(
                "Cannot load a snapshot from source 'local'; pass a version or 'latest'"
                    .to_string(),
            ));
        }

        let version = self.resolve_remote_version(source)?;
        let remote = self.remote()?;
        let prefix = self.version_prefix(remote, &version);

        tracing::info!(
            "Loading snapshot '{}' into {:?} (replace: {})",
            prefix,
            self.local_dir,
            replace
        );
        let count = download_tree(
            remote.store.as_ref(),
            &prefix,
            &self.local_dir,
            replace,
            &self.filter,
        )?;
        tracing::info!("Loaded {} file(s) from snapshot {}", count, version);

        Ok(version)
    }

    fn remote(&self) -> AppResult<&RemoteTarget> {
        self.remote.as_ref().ok_or_else(|| {
            AppError::RemoteConfigurationMissing(
                "This operation needs a remote root; configure one to enable snapshots"
                    .to_string(),
            )
        })
    }

    fn version_prefix(&self, remote: &RemoteTarget, version: &Version) -> String {
        if remote.base.is_empty() {
            version.prefix_name()
        } else {
            format!("{}/{}", remote.base, version.prefix_name())
        }
    }

    /// Pin `source` to a concrete version, verifying it exists remotely.
    fn resolve_remote_version(&self, source: &Source) -> AppResult<Version> {
        match source {
            Source::Local => Err(AppError::Config(
                "Source 'local' does not name a remote version".to_string(),
            )),
            Source::Latest => self.list_versions()?.into_iter().next().ok_or_else(|| {
                AppError::VersionNotFound("No versions found in remote storage".to_string())
            }),
            Source::Pinned(version) => {
                let remote = self.remote()?;
                let prefix = format!("{}/", self.version_prefix(remote, version));
                if remote.store.list(&prefix)?.is_empty() {
                    return Err(AppError::VersionNotFound(format!(
                        "Version {} has no snapshot in remote storage",
                        version
                    )));
                }
                Ok(*version)
            }
        }
    }
}

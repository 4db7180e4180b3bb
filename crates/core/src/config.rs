//! Configuration for promptvault.
//!
//! Configuration is resolved once, at the edge, from three layers:
//! built-in defaults, an optional YAML config file (`promptvault.yaml`),
//! and environment variables, with CLI flags applied last via
//! [`AppConfig::with_overrides`]. The core library never reads environment
//! state on its own; it only sees the finished struct.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default local directory holding the prompt tree.
pub const DEFAULT_LOCAL_DIR: &str = "prompts";

/// Default path-resolution scheme.
pub const DEFAULT_SCHEME: &str = "hierarchical";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "promptvault.yaml";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the local prompt tree
    pub local_dir: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Path-resolution scheme name (e.g., "hierarchical", "brand-metric")
    pub scheme: String,

    /// Remote snapshot storage; remote features are disabled when absent
    pub remote: Option<RemoteConfig>,

    /// Glob patterns skipped during snapshot upload/download
    pub ignore: Vec<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Remote snapshot storage configuration.
///
/// `root` is the bucket analogue: the location all version prefixes live
/// under. `base_dir` is an optional base path inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Blob backend name (e.g., "fs", "memory")
    pub backend: String,

    /// Bucket root the backend operates on
    pub root: PathBuf,

    /// Optional base path under the root
    pub base_dir: Option<String>,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    prompts: Option<PromptsSection>,
    remote: Option<RemoteSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Deserialize)]
struct PromptsSection {
    path: Option<String>,
    scheme: Option<String>,
    ignore: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RemoteSection {
    backend: Option<String>,
    root: Option<String>,
    #[serde(rename = "baseDir")]
    base_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
            config_file: None,
            scheme: DEFAULT_SCHEME.to_string(),
            remote: None,
            ignore: Vec::new(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `PROMPTVAULT_DIR`: local prompt tree root
    /// - `PROMPTVAULT_CONFIG`: path to config file
    /// - `PROMPTVAULT_SCHEME`: path-resolution scheme
    /// - `PROMPTVAULT_REMOTE_ROOT`: bucket root (enables remote features)
    /// - `PROMPTVAULT_REMOTE_BACKEND`: blob backend name
    /// - `PROMPTVAULT_REMOTE_BASE`: base path under the bucket root
    /// - `RUST_LOG`: log level
    /// - `NO_COLOR`: disable colored output
    ///
    /// Environment variables override the config file. `REMOTE_BACKEND` and
    /// `REMOTE_BASE` only take effect once a root is configured somewhere.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("PROMPTVAULT_DIR") {
            config.local_dir = PathBuf::from(dir);
        }

        if let Ok(config_file) = std::env::var("PROMPTVAULT_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
            tracing::debug!("Merged config file {:?}", config_path);
        }

        if let Ok(scheme) = std::env::var("PROMPTVAULT_SCHEME") {
            config.scheme = scheme;
        }

        if let Ok(root) = std::env::var("PROMPTVAULT_REMOTE_ROOT") {
            config.set_remote_root(PathBuf::from(root));
        }

        if let Some(ref mut remote) = config.remote {
            if let Ok(backend) = std::env::var("PROMPTVAULT_REMOTE_BACKEND") {
                remote.backend = backend;
            }
            if let Ok(base) = std::env::var("PROMPTVAULT_REMOTE_BASE") {
                remote.base_dir = Some(base);
            }
        }

        config.log_level = std::env::var("RUST_LOG").ok().or(config.log_level);

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(prompts) = config_file.prompts {
            if let Some(path) = prompts.path {
                result.local_dir = PathBuf::from(path);
            }
            if let Some(scheme) = prompts.scheme {
                result.scheme = scheme;
            }
            if let Some(ignore) = prompts.ignore {
                result.ignore = ignore;
            }
        }

        if let Some(remote) = config_file.remote {
            if let Some(root) = remote.root {
                result.set_remote_root(PathBuf::from(root));
            }
            if let Some(ref mut target) = result.remote {
                if let Some(backend) = remote.backend {
                    target.backend = backend;
                }
                if let Some(base_dir) = remote.base_dir {
                    target.base_dir = Some(base_dir);
                }
            } else if remote.backend.is_some() || remote.base_dir.is_some() {
                return Err(AppError::Config(format!(
                    "Config file {:?} sets remote options without a remote root",
                    path
                )));
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over both the config file and the
    /// environment.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        local_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
        scheme: Option<String>,
        remote_backend: Option<String>,
        remote_root: Option<PathBuf>,
        remote_base: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(local_dir) = local_dir {
            self.local_dir = local_dir;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(scheme) = scheme {
            self.scheme = scheme;
        }

        if let Some(root) = remote_root {
            self.set_remote_root(root);
        }

        if let Some(ref mut remote) = self.remote {
            if let Some(backend) = remote_backend {
                remote.backend = backend;
            }
            if let Some(base) = remote_base {
                remote.base_dir = Some(base);
            }
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Set the remote root, creating the remote section with a default
    /// backend if it does not exist yet.
    fn set_remote_root(&mut self, root: PathBuf) {
        match self.remote {
            Some(ref mut remote) => remote.root = root,
            None => {
                self.remote = Some(RemoteConfig {
                    backend: "fs".to_string(),
                    root,
                    base_dir: None,
                });
            }
        }
    }
}

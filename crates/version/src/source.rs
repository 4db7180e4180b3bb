//! Prompt source selectors.

use crate::semver::Version;
use promptvault_core::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

/// Where to read prompts from: the local tree, the newest snapshot, or a
/// pinned version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The local prompt directory, unversioned.
    Local,
    /// The highest version present in remote storage.
    Latest,
    /// A specific snapshot version.
    Pinned(Version),
}

impl FromStr for Source {
    type Err = AppError;

    /// Parse `"local"`, `"latest"`, or a literal version like `"1.2.3"`.
    ///
    /// Anything else fails with `InvalidVersionFormat`; a malformed version
    /// string is never silently accepted.
    fn from_str(s: &str) -> AppResult<Source> {
        match s {
            "local" => Ok(Source::Local),
            "latest" => Ok(Source::Latest),
            other => Ok(Source::Pinned(other.parse()?)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local => write!(f, "local"),
            Source::Latest => write!(f, "latest"),
            Source::Pinned(version) => write!(f, "{}", version),
        }
    }
}

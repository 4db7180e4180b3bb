//! Semantic version strings and bump arithmetic.
//!
//! Versions are exactly three dot-separated non-negative integers.
//! Comparison is numeric per component, so `1.10.0` sorts above `1.9.0`.
//! In remote storage each version owns a prefix named `Version <x>.<y>.<z>`.

use promptvault_core::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

/// Label that version prefixes carry in remote storage.
const PREFIX_LABEL: &str = "Version ";

/// A `major.minor.patch` version.
///
/// Field order gives the derived `Ord` the numeric-component comparison the
/// version set relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component a snapshot bump increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// The base version new stores bump from.
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
    };

    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Increment one component, zeroing the lower ones.
    pub fn bump(self, bump: Bump) -> Version {
        match bump {
            Bump::Major => Version::new(self.major + 1, 0, 0),
            Bump::Minor => Version::new(self.major, self.minor + 1, 0),
            Bump::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }

    /// The remote prefix name for this version, e.g. `Version 1.2.3`.
    pub fn prefix_name(&self) -> String {
        format!("{}{}", PREFIX_LABEL, self)
    }

    /// Parse a remote prefix name back into a version.
    ///
    /// Returns `None` for anything that is not `Version <x>.<y>.<z>`;
    /// listings routinely contain unrelated entries and those are skipped,
    /// not errors.
    pub fn from_prefix_name(name: &str) -> Option<Version> {
        name.strip_prefix(PREFIX_LABEL)
            .and_then(|v| v.parse().ok())
    }
}

impl FromStr for Version {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Version> {
        let invalid = || {
            AppError::InvalidVersionFormat(format!(
                "'{}' is not of the form <major>.<minor>.<patch>",
                s
            ))
        };

        let mut components = [0u64; 3];
        let mut parts = s.split('.');
        for slot in components.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        let [major, minor, patch] = components;
        Ok(Version::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Bump {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Bump> {
        match s {
            "major" => Ok(Bump::Major),
            "minor" => Ok(Bump::Minor),
            "patch" => Ok(Bump::Patch),
            _ => Err(AppError::Config(format!(
                "Unknown bump kind: '{}'. Supported kinds: major, minor, patch",
                s
            ))),
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bump::Major => "major",
            Bump::Minor => "minor",
            Bump::Patch => "patch",
        };
        write!(f, "{}", name)
    }
}

/// Compute the version a new snapshot gets: the maximum of `existing` (the
/// zero version when none exist) with `bump` applied.
pub fn next_version(existing: &[Version], bump: Bump) -> Version {
    existing
        .iter()
        .copied()
        .max()
        .unwrap_or(Version::ZERO)
        .bump(bump)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for s in ["0.0.0", "1.2.3", "10.20.30"] {
            assert_eq!(v(s).to_string(), s);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in [
            "", "1", "1.2", "1.2.3.4", "a.b.c", "1.2.x", "1.2.-3", "1.2.3-alpha", "1..3",
            " 1.2.3", "+1.2.3",
        ] {
            let result: AppResult<Version> = s.parse();
            assert!(
                matches!(result, Err(AppError::InvalidVersionFormat(_))),
                "expected '{}' to be rejected",
                s
            );
        }
    }

    #[test]
    fn test_numeric_component_ordering() {
        // Fails under string comparison, which is the point.
        assert!(v("1.9.0") < v("1.10.0"));
        assert!(v("2.0.0") > v("1.99.99"));
        assert!(v("0.1.0") > v("0.0.9"));
    }

    #[test]
    fn test_sort_descending() {
        let mut versions = vec![v("1.2.0"), v("1.10.0"), v("0.9.9"), v("1.9.0")];
        versions.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(
            versions,
            vec![v("1.10.0"), v("1.9.0"), v("1.2.0"), v("0.9.9")]
        );
    }

    #[test]
    fn test_bump() {
        assert_eq!(v("1.2.3").bump(Bump::Major), v("2.0.0"));
        assert_eq!(v("1.2.3").bump(Bump::Minor), v("1.3.0"));
        assert_eq!(v("1.2.3").bump(Bump::Patch), v("1.2.4"));
    }

    #[test]
    fn test_next_version_empty_set() {
        assert_eq!(next_version(&[], Bump::Major), v("1.0.0"));
        assert_eq!(next_version(&[], Bump::Minor), v("0.1.0"));
        assert_eq!(next_version(&[], Bump::Patch), v("0.0.1"));
    }

    #[test]
    fn test_next_version_bumps_the_maximum() {
        assert_eq!(next_version(&[v("1.2.3")], Bump::Minor), v("1.3.0"));
        assert_eq!(
            next_version(&[v("1.2.3"), v("2.0.0")], Bump::Patch),
            v("2.0.1")
        );
        assert_eq!(
            next_version(&[v("1.9.0"), v("1.10.0")], Bump::Major),
            v("2.0.0")
        );
    }

    #[test]
    fn test_prefix_name_roundtrip() {
        let version = v("1.10.3");
        assert_eq!(version.prefix_name(), "Version 1.10.3");
        assert_eq!(Version::from_prefix_name("Version 1.10.3"), Some(version));
    }

    #[test]
    fn test_from_prefix_name_rejects_non_versions() {
        for name in ["Release 1.0.0", "Version abc", "Version 1.0", "backup", ""] {
            assert_eq!(Version::from_prefix_name(name), None, "name: {}", name);
        }
    }

    #[test]
    fn test_bump_from_str() {
        assert_eq!("major".parse::<Bump>().unwrap(), Bump::Major);
        assert_eq!("minor".parse::<Bump>().unwrap(), Bump::Minor);
        assert_eq!("patch".parse::<Bump>().unwrap(), Bump::Patch);
        assert!("MAJOR".parse::<Bump>().is_err());
    }
}

//! Version management for promptvault.
//!
//! The core of the system: semantic-version bookkeeping (listing, sorting,
//! bumping) and snapshot orchestration over the blob layer.

pub mod manager;
pub mod semver;
pub mod source;

// Re-export main types
pub use manager::{VersionManager, VersionManagerBuilder};
pub use semver::{next_version, Bump, Version};
pub use source::Source;

//! Command handlers for the promptvault CLI.

pub mod get;
pub mod restore;
pub mod snapshot;
pub mod versions;

// Re-export command types for convenience
pub use get::GetCommand;
pub use restore::RestoreCommand;
pub use snapshot::SnapshotCommand;
pub use versions::VersionsCommand;

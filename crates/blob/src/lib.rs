//! Blob storage for versioned prompt snapshots.
//!
//! This crate abstracts the object store as a versioned-directory transport:
//! - `BlobStore`: object-level trait over list/get/put/exists
//! - `FsStore`: directory-rooted backend (covers mounted object storage)
//! - `MemoryStore`: in-memory fake for tests
//! - `transfer`: whole-tree upload/download with ignore patterns

pub mod filesystem;
pub mod memory;
pub mod store;
pub mod transfer;

// Re-export main types
pub use filesystem::FsStore;
pub use memory::MemoryStore;
pub use store::{create_store, BlobStore};
pub use transfer::{download_tree, list_child_prefixes, upload_tree, TreeFilter};

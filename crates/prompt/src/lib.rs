//! Prompt definitions for promptvault.
//!
//! This crate provides:
//! - YAML-backed prompt documents (mapping of prompt key to entry)
//! - Loading/parsing with a strict error split (missing vs malformed)
//! - Path resolution schemes mapping lookup keys to file paths

pub mod document;
pub mod resolver;
pub mod store;

// Re-export main types
pub use document::PromptDocument;
pub use resolver::{
    create_resolver, slug, BrandMetricResolver, HierarchicalResolver, PathResolver,
};
pub use store::{load_document, parse_document};

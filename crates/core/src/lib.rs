//! Promptvault core library.
//!
//! Foundational utilities shared by every promptvault crate:
//! - Error handling (`AppError`, `AppResult`)
//! - Configuration (`AppConfig`, `RemoteConfig`)
//! - Logging initialization

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, RemoteConfig};
pub use error::{AppError, AppResult};

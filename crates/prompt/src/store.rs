//! Loading and parsing prompt definition files.

use crate::document::PromptDocument;
use promptvault_core::{AppError, AppResult};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Load a prompt document from a YAML file.
///
/// # Errors
/// `PromptFileNotFound` if the file is absent, `PromptParse` if it is not
/// valid YAML or not a mapping.
pub fn load_document(path: &Path) -> AppResult<PromptDocument> {
    tracing::debug!("Loading prompt document from {:?}", path);

    if !path.is_file() {
        return Err(AppError::PromptFileNotFound(format!("{}", path.display())));
    }

    let contents = std::fs::read_to_string(path)?;
    parse_document(&contents, &path.display().to_string())
}

/// Parse prompt document text fetched from any source.
///
/// `origin` names the source in error messages (a file path or a blob name).
pub fn parse_document(text: &str, origin: &str) -> AppResult<PromptDocument> {
    let entries: BTreeMap<String, Value> = serde_yaml::from_str(text)
        .map_err(|e| AppError::PromptParse(format!("{}: {}", origin, e)))?;

    Ok(PromptDocument::from_entries(entries))
}

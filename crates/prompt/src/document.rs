//! Prompt document model.
//!
//! A prompt definition file is a YAML mapping from prompt key to an
//! arbitrary entry, conventionally `{description, synonyms,
//! extraction_instructions}`. Nothing beyond "parses as a mapping" is
//! enforced.

use promptvault_core::{AppError, AppResult};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// A parsed prompt definition file.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptDocument {
    entries: BTreeMap<String, Value>,
}

impl PromptDocument {
    pub(crate) fn from_entries(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }

    /// All entries, keyed by prompt key.
    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    /// Look up the entry for a prompt key.
    pub fn entry(&self, key: &str) -> AppResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| AppError::PromptKeyNotFound(format!("'{}'", key)))
    }

    /// Return `entry[field]` for the given prompt key.
    pub fn extract_field(&self, key: &str, field: &str) -> AppResult<&Value> {
        let entry = self.entry(key)?;
        entry
            .as_mapping()
            .and_then(|m| m.get(field))
            .ok_or_else(|| {
                AppError::PromptFieldNotFound(format!("'{}' in entry '{}'", field, key))
            })
    }

    /// Render an entry, or one of its fields, as a string.
    ///
    /// With `field`, scalar values are coerced directly and anything nested
    /// is dumped as YAML. Without it, the whole entry for `key` is dumped as
    /// YAML.
    pub fn render_as_string(&self, key: &str, field: Option<&str>) -> AppResult<String> {
        match field {
            Some(field) => value_to_string(self.extract_field(key, field)?),
            None => {
                let dumped = serde_yaml::to_string(self.entry(key)?)?;
                Ok(dumped.trim_end().to_string())
            }
        }
    }
}

/// Coerce a YAML value to a display string.
fn value_to_string(value: &Value) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => {
            let dumped = serde_yaml::to_string(other)?;
            Ok(dumped.trim_end().to_string())
        }
    }
}

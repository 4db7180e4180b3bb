//! Get command handler.

use clap::Args;
use promptvault_core::{AppConfig, AppResult};
use promptvault_version::{Source, VersionManager};

/// Load a prompt and print it
#[derive(Args, Debug)]
pub struct GetCommand {
    /// Lookup keys identifying the prompt (e.g. a brand and a metric)
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Source to read from: "local", "latest", or a version like "1.2.0"
    #[arg(long, default_value = "local")]
    pub version: String,

    /// Print a single field of the prompt entry
    #[arg(short, long)]
    pub field: Option<String>,

    /// Print the resolved relative path instead of the content
    #[arg(long)]
    pub path: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GetCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing get command for keys {:?}", self.keys);

        let manager = VersionManager::from_config(config)?;
        let relative_path = manager.resolve_path(&self.keys)?;

        if self.path {
            println!("{}", relative_path);
            return Ok(());
        }

        let source: Source = self.version.parse()?;
        let content = manager.get_prompt_as_string(&self.keys, &source, self.field.as_deref())?;

        if self.json {
            let output = serde_json::json!({
                "keys": self.keys,
                "version": source.to_string(),
                "path": relative_path,
                "field": self.field,
                "content": content,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", content);
        }

        Ok(())
    }
}

//! Versions command handler.

use clap::Args;
use promptvault_core::{AppConfig, AppResult};
use promptvault_version::VersionManager;

/// List snapshot versions, newest first
#[derive(Args, Debug)]
pub struct VersionsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl VersionsCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing versions command");

        let manager = VersionManager::from_config(config)?;
        let versions = manager.list_versions()?;

        if self.json {
            let output: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if versions.is_empty() {
            println!("No snapshot versions found");
        } else {
            for version in versions {
                println!("{}", version);
            }
        }

        Ok(())
    }
}

//! Restore command handler.

use clap::Args;
use promptvault_core::{AppConfig, AppResult};
use promptvault_version::{Source, VersionManager};

/// Download a snapshot into the local prompt tree
#[derive(Args, Debug)]
pub struct RestoreCommand {
    /// Version to restore: "latest" or a version like "1.2.0"
    pub version: String,

    /// Merge the snapshot over the local tree instead of replacing it
    #[arg(long)]
    pub merge: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RestoreCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing restore command for version '{}'", self.version);

        let source: Source = self.version.parse()?;
        let manager = VersionManager::from_config(config)?;
        let version = manager.load_snapshot(&source, !self.merge)?;

        if self.json {
            let output = serde_json::json!({
                "version": version.to_string(),
                "target": manager.local_dir(),
                "replaced": !self.merge,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "Restored snapshot {} into {}",
                version,
                manager.local_dir().display()
            );
        }

        Ok(())
    }
}

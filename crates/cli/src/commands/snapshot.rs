//! Snapshot command handler.

use clap::Args;
use promptvault_core::{AppConfig, AppResult};
use promptvault_version::{Bump, VersionManager};

/// Snapshot the local prompt tree to remote storage
#[derive(Args, Debug)]
pub struct SnapshotCommand {
    /// Version bump for the new snapshot (major, minor, patch)
    #[arg(short, long, default_value = "major")]
    pub bump: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SnapshotCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing snapshot command (bump: {})", self.bump);

        let bump: Bump = self.bump.parse()?;
        let manager = VersionManager::from_config(config)?;
        let version = manager.save_snapshot(bump)?;

        if self.json {
            let output = serde_json::json!({
                "version": version.to_string(),
                "bump": bump.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Saved snapshot {}", version);
        }

        Ok(())
    }
}

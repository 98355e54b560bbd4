//! Pull command handler.
//!
//! Fetches a baseline template from the catalog and stores it as a fresh
//! entry in the local prompt document, ready for the author to improve.

use clap::Args;
use promptsync_catalog::{HubClient, LifecycleController};
use promptsync_core::{config::AppConfig, AppResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Pull a baseline template from the catalog
#[derive(Args, Debug)]
pub struct PullCommand {
    /// Catalog name of the template (e.g. "acme/bug_to_user_story")
    pub name: String,

    /// Local entry name (default: final path segment of the catalog name)
    #[arg(long)]
    pub entry: Option<String>,

    /// Document file to write (default: {workspace}/prompts/{entry}.yml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl PullCommand {
    /// Execute the pull command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing pull command");

        // Credential check happens before any network attempt
        let api_key = config.require_api_key()?;

        let entry = self
            .entry
            .clone()
            .unwrap_or_else(|| self.default_entry_name());
        let path = self
            .file
            .clone()
            .unwrap_or_else(|| config.prompts_dir().join(format!("{}.yml", entry)));

        println!("Pulling template: {}", self.name);

        let client = Arc::new(HubClient::new(&config.endpoint, api_key));
        let controller = LifecycleController::new(client, config.namespace.clone());
        let definition = controller.pull(&self.name, &path, &entry).await?;

        println!("  ✓ Template retrieved from the catalog");
        println!("  ✓ Baseline entry '{}' saved to {}", entry, path.display());
        println!();
        println!("Next steps:");
        println!("  1. Review the baseline in {}", path.display());
        println!("  2. Author an improved revision: bump the version and document the techniques applied");
        println!("  3. Run: promptsync push {}", entry);

        tracing::debug!("Pulled definition version: {}", definition.version);

        Ok(())
    }

    /// Default local entry name: the catalog name without its namespace.
    fn default_entry_name(&self) -> String {
        self.name
            .rsplit('/')
            .next()
            .unwrap_or(&self.name)
            .to_string()
    }
}

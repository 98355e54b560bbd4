//! Push command handler.
//!
//! Runs the quality gate over a local entry and publishes the passing
//! revision to the catalog. A failing gate prints every diagnostic and
//! exits nonzero without touching the catalog.

use clap::Args;
use promptsync_catalog::{HubClient, LifecycleController, Visibility};
use promptsync_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Validate a local entry and publish it to the catalog
#[derive(Args, Debug)]
pub struct PushCommand {
    /// Entry name to publish
    pub entry: String,

    /// Document file to read (default: {workspace}/prompts/{entry}.yml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Publish with private visibility
    #[arg(long)]
    pub private: bool,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PushCommand {
    /// Execute the push command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing push command");

        // Credential check happens before any network attempt
        let api_key = config.require_api_key()?;

        let path = self
            .file
            .clone()
            .unwrap_or_else(|| config.prompts_dir().join(format!("{}.yml", self.entry)));
        let visibility = if self.private {
            Visibility::Private
        } else {
            Visibility::Public
        };

        if !self.json {
            println!("Pushing prompt: {}", self.entry);
        }

        let client = Arc::new(HubClient::new(&config.endpoint, api_key));
        let controller = LifecycleController::new(client, config.namespace.clone());

        match controller.push(&path, &self.entry, visibility).await {
            Ok(full_name) => {
                if self.json {
                    let output = serde_json::json!({
                        "published": full_name,
                        "visibility": visibility.as_str(),
                        "endpoint": config.endpoint,
                    });
                    let json = serde_json::to_string_pretty(&output)?;
                    println!("{}", json);
                } else {
                    println!("  ✓ Validation passed");
                    println!("  ✓ Published as: {}", full_name);
                    println!("  ✓ URL: {}/api/templates/{}", config.endpoint, full_name);
                }
                Ok(())
            }
            Err(AppError::Validation(errors)) => {
                if self.json {
                    let output = serde_json::json!({
                        "published": null,
                        "errors": errors.clone(),
                    });
                    let json = serde_json::to_string_pretty(&output)?;
                    println!("{}", json);
                } else {
                    eprintln!("Validation failed:");
                    for error in &errors {
                        eprintln!("  - {}", error);
                    }
                    eprintln!();
                    eprintln!("Fix every issue above and push again.");
                }
                Err(AppError::Validation(errors))
            }
            Err(e) => Err(e),
        }
    }
}

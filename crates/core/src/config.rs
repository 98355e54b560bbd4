//! Configuration management for the promptsync CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Environment variables
//! - Command-line flags
//! - Config files (.promptsync/config.yaml)
//!
//! Configuration is loaded once at process start and passed explicitly into
//! the lifecycle operations; nothing reads process state ad hoc after that.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default catalog endpoint when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains prompts/ and .promptsync/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Base URL of the remote template catalog
    pub endpoint: String,

    /// API key for the catalog; presence-checked before any network call,
    /// never parsed
    pub api_key: Option<String>,

    /// Optional namespace prefixed to prompt names on publish
    pub namespace: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    catalog: Option<CatalogConfig>,
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogConfig {
    endpoint: Option<String>,
    namespace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            endpoint: DEFAULT_ENDPOINT.to_string(), // Local-first default
            api_key: None,
            namespace: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `PROMPTSYNC_WORKSPACE`: Override workspace path
    /// - `PROMPTSYNC_CONFIG`: Path to config file
    /// - `PROMPTSYNC_ENDPOINT`: Catalog base URL
    /// - `PROMPTSYNC_API_KEY`: Catalog API key
    /// - `PROMPTSYNC_NAMESPACE`: Publish namespace
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(workspace) = std::env::var("PROMPTSYNC_WORKSPACE") {
            config.workspace = PathBuf::from(workspace);
        }

        if let Ok(config_file) = std::env::var("PROMPTSYNC_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Validate workspace exists
        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            config.workspace.join(".promptsync/config.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(endpoint) = std::env::var("PROMPTSYNC_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(namespace) = std::env::var("PROMPTSYNC_NAMESPACE") {
            config.namespace = Some(namespace);
        }

        config.api_key = std::env::var("PROMPTSYNC_API_KEY").ok();
        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(ws) = config_file.workspace {
            if let Some(path) = ws.path {
                result.workspace = PathBuf::from(path);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(catalog) = config_file.catalog {
            if let Some(endpoint) = catalog.endpoint {
                result.endpoint = endpoint;
            }
            if let Some(namespace) = catalog.namespace {
                result.namespace = Some(namespace);
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
        endpoint: Option<String>,
        namespace: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }

        if let Some(namespace) = namespace {
            self.namespace = Some(namespace);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the directory holding local prompt documents.
    pub fn prompts_dir(&self) -> PathBuf {
        self.workspace.join("prompts")
    }

    /// Ensure the prompts directory exists.
    pub fn ensure_prompts_dir(&self) -> AppResult<()> {
        let prompts_dir = self.prompts_dir();
        if !prompts_dir.exists() {
            std::fs::create_dir_all(&prompts_dir).map_err(|e| {
                AppError::Config(format!("Failed to create prompts directory: {}", e))
            })?;
        }
        Ok(())
    }

    /// Require the catalog API key to be configured.
    ///
    /// Only presence is checked; the key is handed to the catalog client
    /// as-is. Called before any network attempt so a missing credential
    /// fails fast.
    pub fn require_api_key(&self) -> AppResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AppError::Config(
                "Catalog API key is not configured. Set PROMPTSYNC_API_KEY.".to_string(),
            )),
        }
    }
}

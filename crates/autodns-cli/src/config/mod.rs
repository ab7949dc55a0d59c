//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "AUTODNS_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gateway user.
    pub user: Option<String>,

    /// Gateway password.
    pub password: Option<String>,

    /// Registry context.
    pub context: Option<String>,

    /// Email for asynchronous replies.
    pub email: Option<String>,

    /// Language for status texts.
    pub language: Option<String>,

    /// Gateway URL.
    pub base_url: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("com", "autodns", "autodns")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.to_string();
        match key {
            "user" => self.user = Some(value),
            "password" => self.password = Some(value),
            "context" => self.context = Some(value),
            "email" => self.email = Some(value),
            "language" => self.language = Some(value),
            "base_url" => self.base_url = Some(value),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 user, password, context - Gateway login\n  \
                 email                   - Address for transfer notifications\n  \
                 language                - Status text language (en, de, ...)\n  \
                 base_url                - Gateway URL\n  \
                 output_format           - Default output format (pretty/json/yaml)",
                key
            ),
        }
        Ok(())
    }
}

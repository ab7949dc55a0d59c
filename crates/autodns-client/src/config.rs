//! Client configuration types.

use crate::client::{AutoDnsClientBuilder, DEFAULT_BASE_URL};
use autodns_core::{AutoDnsError, Result, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Everything needed to construct a client, loadable from TOML.
///
/// ```toml
/// user = "api-user"
/// password = "secret"
/// context = "4"
/// email = "hostmaster@example.com"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Gateway user
    pub user: String,

    /// Gateway password
    pub password: String,

    /// Registry context
    pub context: String,

    /// Language for status texts (default: en)
    #[serde(default = "default_language")]
    pub language: String,

    /// Email asynchronous replies are routed to
    #[serde(default)]
    pub email: Option<String>,

    /// Gateway URL (default: https://gateway.autodns.com)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Config with the given login and defaults for everything else
    #[must_use]
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            context: context.into(),
            language: default_language(),
            email: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AutoDnsError::Config(e.to_string()))
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AutoDnsError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Client builder preloaded with this config
    #[must_use]
    pub fn builder(&self) -> AutoDnsClientBuilder {
        let mut builder = AutoDnsClientBuilder::new(&self.user, &self.password, &self.context)
            .language(&self.language)
            .base_url(&self.base_url);
        if let Some(email) = &self.email {
            builder = builder.email(email);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder
    }
}

// Default value functions for serde.
fn default_language() -> String {
    String::from(DEFAULT_LANGUAGE)
}

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

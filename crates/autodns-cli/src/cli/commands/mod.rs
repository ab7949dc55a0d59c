//! Command implementations.

pub mod config;
pub mod domain;
pub mod nameservers;
pub mod zone;

use anyhow::{Context as _, Result};
use autodns::{AutoDnsClient, Exchange};
use colored::Colorize;
use serde_json::Value;
use std::path::Path;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Gateway user
    pub user: Option<String>,

    /// Gateway password
    pub password: Option<String>,

    /// Registry context
    pub context: Option<String>,

    /// Email for asynchronous replies
    pub email: Option<String>,

    /// Status text language
    pub language: Option<String>,

    /// Gateway URL override
    pub base_url: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Print raw responses to stderr
    pub verbose: bool,
}

impl Context {
    /// Create a gateway client from the resolved settings.
    pub fn client(&self) -> Result<AutoDnsClient> {
        let (Some(user), Some(password), Some(context)) =
            (&self.user, &self.password, &self.context)
        else {
            anyhow::bail!(
                "Gateway login required.\n\n\
                 Set user, password and context with one of:\n  \
                 1. --user / --password / --context\n  \
                 2. AUTODNS_USER / AUTODNS_PASSWORD / AUTODNS_CONTEXT\n  \
                 3. autodns config set <key> <value>"
            );
        };

        let mut builder = AutoDnsClient::builder(user, password, context);
        if let Some(email) = &self.email {
            builder = builder.email(email);
        }
        if let Some(language) = &self.language {
            builder = builder.language(language);
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if self.verbose {
            builder = builder.trace(print_exchange);
        }

        Ok(builder.build()?)
    }
}

fn print_exchange(exchange: &Exchange<'_>) {
    eprintln!(
        "{} {} ({} ms)",
        "<<".dimmed(),
        exchange.code.cyan(),
        exchange.elapsed.as_millis()
    );
    eprintln!("{}", exchange.response.dimmed());
}

/// Read a JSON document from a file.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Read an optional defaults file.
pub fn read_defaults(path: Option<&Path>) -> Result<Option<Value>> {
    path.map(read_json).transpose()
}

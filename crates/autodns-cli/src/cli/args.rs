//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Command-line interface for the AutoDNS XML gateway
///
/// Look up and transfer domains, manage zones.
/// Credentials come from flags, AUTODNS_* environment variables,
/// or the config file (see `autodns config path`).
#[derive(Parser, Debug)]
#[command(name = "autodns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Gateway user
    #[arg(short, long, env = "AUTODNS_USER", global = true)]
    pub user: Option<String>,

    /// Gateway password
    #[arg(short, long, env = "AUTODNS_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Registry context
    #[arg(short, long, env = "AUTODNS_CONTEXT", global = true)]
    pub context: Option<String>,

    /// Email asynchronous replies (transfers) are routed to
    #[arg(long, env = "AUTODNS_EMAIL", global = true)]
    pub email: Option<String>,

    /// Language for gateway status texts
    #[arg(long, env = "AUTODNS_LANGUAGE", global = true)]
    pub language: Option<String>,

    /// Gateway URL
    #[arg(long, env = "AUTODNS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print raw gateway responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Domain lookups and transfers
    Domain(DomainArgs),

    /// Zone management
    Zone(ZoneArgs),

    /// Show the gateway's default nameservers
    Nameservers,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Domain command
// ============================================================================

#[derive(Args, Debug)]
pub struct DomainArgs {
    #[command(subcommand)]
    pub command: DomainCommands,
}

#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// Get domain data (several names are fetched concurrently)
    Get {
        /// Domain names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Transfer domains in from another registrar
    Transfer {
        /// JSON file with one transfer request or an array of them
        file: PathBuf,

        /// JSON file with defaults applied to omitted fields
        #[arg(long)]
        defaults: Option<PathBuf>,
    },
}

// ============================================================================
// Zone command
// ============================================================================

#[derive(Args, Debug)]
pub struct ZoneArgs {
    #[command(subcommand)]
    pub command: ZoneCommands,
}

#[derive(Subcommand, Debug)]
pub enum ZoneCommands {
    /// Get zone data
    Get {
        /// Zone origin
        name: String,

        /// Primary nameserver of the zone, if several zones share the origin
        #[arg(long)]
        system_ns: Option<String>,
    },

    /// Delete a zone
    Delete {
        /// Zone origin
        name: String,

        /// Primary nameserver of the zone, if several zones share the origin
        #[arg(long)]
        system_ns: Option<String>,
    },

    /// Create a zone from a JSON file
    Create {
        /// JSON file with the zone
        file: PathBuf,

        /// JSON file with defaults applied to omitted fields
        #[arg(long)]
        defaults: Option<PathBuf>,
    },

    /// Update a zone from a JSON file
    Update {
        /// JSON file with the zone
        file: PathBuf,

        /// JSON file with defaults applied to omitted fields
        #[arg(long)]
        defaults: Option<PathBuf>,
    },

    /// List zones
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of zones to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Maximum number of zones
    #[arg(long)]
    pub limit: Option<u32>,

    /// Include records in every entry
    #[arg(long)]
    pub children: bool,

    /// Filter as KEY:OPERATOR:VALUE (e.g. name:like:*.de); repeat to combine
    #[arg(short = 'w', long = "where")]
    pub filters: Vec<String>,

    /// Combine repeated filters with OR instead of AND
    #[arg(long)]
    pub any: bool,

    /// Extra field to return per zone (e.g. created, changed)
    #[arg(short, long = "key")]
    pub keys: Vec<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., user, context, email)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

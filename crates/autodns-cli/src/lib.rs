//! # autodns-cli
//!
//! Command-line interface for the AutoDNS XML gateway.
//!
//! ## Features
//!
//! - **Domains**: single and concurrent batch lookups, transfers
//! - **Zones**: get, list, create, update, delete
//! - **Configuration**: flags, `AUTODNS_*` env vars, or a TOML config file
//! - **Multiple output formats**: pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;

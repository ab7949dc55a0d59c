//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    // Flags and env vars win over the config file
    let ctx = commands::Context {
        user: cli.user.or_else(|| config.user.clone()),
        password: cli.password.or_else(|| config.password.clone()),
        context: cli.context.or_else(|| config.context.clone()),
        email: cli.email.or_else(|| config.email.clone()),
        language: cli.language.or_else(|| config.language.clone()),
        base_url: cli.base_url.or_else(|| config.base_url.clone()),
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Domain(args) => commands::domain::execute(ctx, args).await,
        Commands::Zone(args) => commands::zone::execute(ctx, args).await,
        Commands::Nameservers => commands::nameservers::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

//! `autodns config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::{print_value, OutputFormat};

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = Config::load()?;
    if config.password.is_some() {
        config.password = Some("****".to_string());
    }

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let unset = || "(not set)".dimmed().to_string();
            let rows = [
                ("user:", config.user.clone()),
                ("password:", config.password.clone()),
                ("context:", config.context.clone()),
                ("email:", config.email.clone()),
                ("language:", config.language.clone()),
                ("base_url:", config.base_url.clone()),
                ("output_format:", config.output_format.map(|f| f.to_string())),
            ];
            for (key, value) in rows {
                println!("  {} {}", key.bold(), value.unwrap_or_else(unset));
            }
            Ok(())
        }
        format => print_value(format, &config),
    }
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

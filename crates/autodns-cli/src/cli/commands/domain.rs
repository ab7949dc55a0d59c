//! `autodns domain` - domain lookups and transfers.

use anyhow::Result;
use autodns::{BatchItem, WriteOptions};
use colored::Colorize;
use serde_json::{json, Value};
use std::path::Path;

use super::{read_defaults, read_json, Context};
use crate::cli::args::{DomainArgs, DomainCommands};
use crate::output::{print_status, print_value, OutputFormat};

pub async fn execute(ctx: Context, args: DomainArgs) -> Result<()> {
    match args.command {
        DomainCommands::Get { names } => get_domains(ctx, names).await,
        DomainCommands::Transfer { file, defaults } => {
            transfer(ctx, &file, defaults.as_deref()).await
        }
    }
}

async fn get_domains(ctx: Context, names: Vec<String>) -> Result<()> {
    let client = ctx.client()?;

    if let [name] = names.as_slice() {
        let domain = client.domains().get(name.as_str()).await?;
        return print_value(ctx.output_format, &domain);
    }

    let results = client.domains().get_many(names.iter().map(String::as_str)).await;

    match ctx.output_format {
        OutputFormat::Pretty => {
            for (name, item) in names.iter().zip(&results) {
                match item {
                    Ok(domain) => {
                        println!("{} {}", "OK".green().bold(), name.cyan());
                        println!("{}", serde_json::to_string_pretty(domain)?);
                    }
                    Err(e) => println!("{} {} {}", "FAILED".red().bold(), name.cyan(), e),
                }
            }
        }
        format => {
            let entries: Vec<Value> = names
                .iter()
                .zip(&results)
                .map(|(name, item)| batch_entry(name, item))
                .collect();
            print_value(format, &entries)?;
        }
    }

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} lookups failed", results.len());
    }
    Ok(())
}

/// One batch entry, tagged with `ok` or `error` so failures stay distinguishable.
fn batch_entry(name: &str, item: &BatchItem) -> Value {
    match item {
        Ok(domain) => json!({ "name": name, "ok": domain }),
        Err(e) => json!({
            "name": name,
            "error": {
                "message": e.to_string(),
                "status": e.response().map(|r| &r.status),
            },
        }),
    }
}

async fn transfer(ctx: Context, file: &Path, defaults: Option<&Path>) -> Result<()> {
    let requests = match read_json(file)? {
        Value::Array(items) => items,
        single => vec![single],
    };

    let mut options = WriteOptions::new();
    if let Some(defaults) = read_defaults(defaults)? {
        options = options.defaults(defaults);
    }

    let client = ctx.client()?;
    let status = client.domains().transfer_in(&requests, options).await?;
    print_status(ctx.output_format, &status)
}

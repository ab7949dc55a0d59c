//! `autodns zone` - zone management.

use anyhow::Result;
use autodns::{Identifier, ListView, ListZonesQuery, WhereClause, WriteOptions};
use colored::Colorize;
use serde_json::json;
use std::path::Path;

use super::{read_defaults, read_json, Context};
use crate::cli::args::{ListArgs, ZoneArgs, ZoneCommands};
use crate::output::{print_status, print_value, OutputFormat};

pub async fn execute(ctx: Context, args: ZoneArgs) -> Result<()> {
    match args.command {
        ZoneCommands::Get { name, system_ns } => {
            let zone = ctx
                .client()?
                .zones()
                .get(zone_id(name, system_ns))
                .await?;
            print_value(ctx.output_format, &zone)
        }
        ZoneCommands::Delete { name, system_ns } => {
            let status = ctx
                .client()?
                .zones()
                .delete(zone_id(name, system_ns))
                .await?;
            print_status(ctx.output_format, &status)
        }
        ZoneCommands::Create { file, defaults } => {
            write_zone(ctx, &file, defaults.as_deref(), false).await
        }
        ZoneCommands::Update { file, defaults } => {
            write_zone(ctx, &file, defaults.as_deref(), true).await
        }
        ZoneCommands::List(args) => list_zones(ctx, args).await,
    }
}

/// Zone identifier: bare origin, or origin plus primary nameserver.
fn zone_id(name: String, system_ns: Option<String>) -> Identifier {
    match system_ns {
        Some(ns) => Identifier::Object(json!({ "name": name, "system_ns": ns })),
        None => Identifier::Name(name),
    }
}

async fn write_zone(ctx: Context, file: &Path, defaults: Option<&Path>, update: bool) -> Result<()> {
    let zone = read_json(file)?;

    let mut options = WriteOptions::new();
    if let Some(defaults) = read_defaults(defaults)? {
        options = options.defaults(defaults);
    }

    let client = ctx.client()?;
    let zones = client.zones();
    let status = if update {
        zones.update(&zone, options).await?
    } else {
        zones.create(&zone, options).await?
    };
    print_status(ctx.output_format, &status)
}

/// Build the list query from command-line arguments.
fn build_query(args: &ListArgs) -> Result<ListZonesQuery> {
    let mut query = ListZonesQuery::new();

    if args.offset.is_some() || args.limit.is_some() || args.children {
        query = query.view(ListView {
            offset: args.offset,
            limit: args.limit,
            children: args.children.then_some(true),
        });
    }

    let mut clauses = args
        .filters
        .iter()
        .map(|raw| {
            WhereClause::parse_shorthand(raw).ok_or_else(|| {
                anyhow::anyhow!("Invalid filter '{raw}', expected KEY:OPERATOR:VALUE")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    query.filter = match clauses.len() {
        0 => None,
        1 => clauses.pop(),
        _ if args.any => Some(WhereClause::Or(clauses)),
        _ => Some(WhereClause::And(clauses)),
    };

    for key in &args.keys {
        query = query.key(key);
    }

    Ok(query)
}

async fn list_zones(ctx: Context, args: ListArgs) -> Result<()> {
    let query = build_query(&args)?;
    let zones = ctx.client()?.zones().list(&query).await?;

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!("{} {}", "Zones:".bold(), zones.len());
            for zone in &zones {
                let origin = zone
                    .get("origin")
                    .or_else(|| zone.get("name"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("?");
                println!("  {}", origin.cyan());
            }
            Ok(())
        }
        format => print_value(format, &zones),
    }
}

//! `autodns nameservers` - the gateway's default nameserver set.

use anyhow::Result;

use super::Context;
use crate::output::{print_value, OutputFormat};

pub fn execute(ctx: &Context) -> Result<()> {
    let nameservers = autodns::default_nameservers();

    match ctx.output_format {
        OutputFormat::Pretty => {
            for ns in &nameservers {
                println!("{}", ns.name);
            }
            Ok(())
        }
        format => print_value(format, &nameservers),
    }
}

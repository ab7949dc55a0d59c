//! autodns - AutoDNS gateway CLI

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    autodns_cli::run().await
}

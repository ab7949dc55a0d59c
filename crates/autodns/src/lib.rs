//! Rust client for the AutoDNS XML gateway.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use autodns::{AutoDnsClient, WriteOptions};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> autodns::Result<()> {
//!     let client = AutoDnsClient::builder("user", "password", "4")
//!         .email("hostmaster@example.com")
//!         .build()?;
//!
//!     // Single domain
//!     let domain = client.domains().get("example.com").await?;
//!     println!("Nameservers: {}", domain["nserver"]);
//!
//!     // Several domains, one result per entry
//!     for item in client.domains().get_many(["a.com", "b.com"]).await {
//!         match item {
//!             Ok(domain) => println!("{}", domain["name"]),
//!             Err(e) => eprintln!("lookup failed: {e}"),
//!         }
//!     }
//!
//!     // Zone with the gateway's default nameservers
//!     let zone = json!({
//!         "origin": "example.com",
//!         "nserver": autodns::default_nameservers(),
//!     });
//!     client.zones().create(&zone, WriteOptions::new()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/autodns/0.3.0")]

// Re-export core types
pub use autodns_core::*;

// Re-export client
pub use autodns_client::{
    api, trace, transport, AutoDnsClient, AutoDnsClientBuilder, ClientConfig, Exchange,
    HttpsTransport, TraceHook, Transport, DEFAULT_BASE_URL,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;

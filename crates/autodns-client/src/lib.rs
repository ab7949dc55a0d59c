//! Async HTTPS client for the AutoDNS XML gateway.
//!
//! This crate provides the main [`AutoDnsClient`] and its operation groups
//! ([`DomainApi`](api::DomainApi), [`ZoneApi`](api::ZoneApi)).

#![doc(html_root_url = "https://docs.rs/autodns-client/0.3.0")]

mod client;
mod config;
pub mod api;
pub mod trace;
pub mod transport;

pub use client::{AutoDnsClient, AutoDnsClientBuilder, DEFAULT_BASE_URL};
pub use config::*;
pub use trace::{Exchange, TraceHook};
pub use transport::{HttpsTransport, Transport};
pub use autodns_core::{AutoDnsError, Result};

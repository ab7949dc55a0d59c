//! Core types and protocol logic for the AutoDNS gateway client.
//!
//! This crate has no I/O. It provides:
//!
//! - **Types**: credentials, commands, list queries and parsed results
//! - **Command builder**: [`build_request`] turns a [`Command`] into the XML document
//! - **Response interpreter**: [`interpret`] parses and classifies the reply
//! - **Errors**: [`AutoDnsError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use autodns_core::{build_request, interpret, codes, Command, Credentials, ObjectType, ResponseSchema};
//! use serde_json::json;
//!
//! let creds = Credentials::new("user", "password", "4");
//! let cmd = Command::new(codes::DOMAIN_INFO, ObjectType::Domain, json!({"name": "example.com"}));
//! let xml = build_request(&creds, None, &cmd)?;
//!
//! let result = interpret(&reply_body, &ResponseSchema::EMPTY)?;
//! println!("status: {}", result.status.code);
//! ```

#![doc(html_root_url = "https://docs.rs/autodns-core/0.3.0")]

mod error;
mod request;
mod response;
mod tree;
pub mod types;

pub use error::{AutoDnsError, Result};
pub use request::{build_request, DEFAULT_LANGUAGE};
pub use response::{classify, interpret, parse_result};
pub use tree::ResponseSchema;
pub use types::*;

//! viewdns library: a small blocking client for the ViewDNS.info API.
//!
//! Two remote lookups are exposed: DNS records of a domain and the reverse IP
//! lookup (other domains on the same server). Each call performs a single GET
//! and returns the response body verbatim; the format is chosen with the
//! `output` parameter (`json` by default) and never parsed here.
//!
//! # Example
//!
//! ```no_run
//! use viewdns::Client;
//!
//! # fn main() -> Result<(), viewdns::ViewDnsError> {
//! let client = Client::new("my-api-key", None)?;
//!
//! let records = client.dns_record_lookup("example.com", Some("MX"))?;
//! println!("{}", records);
//!
//! let neighbours = client.reverse_ip_lookup("172.217.4.100")?;
//! println!("{}", neighbours);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups block the calling thread. Do not call them from inside an async
//! runtime worker; use `spawn_blocking` or a dedicated thread instead.

#![warn(missing_docs)]

pub mod cli;
mod client;
pub mod config;
mod error_handling;
pub mod initialization;
mod utils;

// Re-export public API
pub use client::{version, Client, Operation};
pub use config::{ClientConfig, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ViewDnsError};

//! Resource setup.
//!
//! This module provides functions to initialize:
//! - The blocking HTTP client (timeouts, user agent)
//! - The logger (used by the CLI binary only)

mod client;
mod logger;

// Re-export public API
pub use client::init_http_client;
pub use logger::init_logger_with;

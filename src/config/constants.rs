//! Configuration constants.
//!
//! This module defines the remote endpoint, query parameter names, and the
//! defaults applied when a caller does not override them.

/// Version identifier reported by [`crate::version`].
pub const API_VERSION: &str = "1.0.0";

/// Base address of the ViewDNS.info API.
pub const VIEWDNS_URL: &str = "https://api.viewdns.info";

// Operation paths (appended to the base URL)
/// DNS record lookup path
pub const DNSRECORD_PATH: &str = "dnsrecord";
/// Reverse IP lookup path
pub const REVERSEIP_PATH: &str = "reverseip";

// Query parameter names
/// API key parameter (appended by the client)
pub const PARAM_API_KEY: &str = "apikey";
/// Output format parameter (appended by the client)
pub const PARAM_OUTPUT: &str = "output";
/// Domain parameter of the DNS record lookup
pub const PARAM_DOMAIN: &str = "domain";
/// Record type parameter of the DNS record lookup
pub const PARAM_RECORD_TYPE: &str = "recordtype";
/// Host parameter of the reverse IP lookup
pub const PARAM_HOST: &str = "host";

/// Parameters the client always appends itself. Caller parameters with these
/// names are rejected.
pub const RESERVED_PARAMS: &[&str] = &[PARAM_API_KEY, PARAM_OUTPUT];

/// Output format requested when none is given.
pub const DEFAULT_OUTPUT_FORMAT: &str = "json";

/// Record type used by a DNS record lookup when none is given.
/// Any string is passed through; the remote service decides what it accepts.
pub const DEFAULT_RECORD_TYPE: &str = "A";

// Network operation timeouts
/// Overall per-request timeout in seconds
/// Reverse IP lookups can return up to 10,000 domains, so this is generous
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for API requests.
pub const DEFAULT_USER_AGENT: &str = concat!("viewdns-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variable the CLI reads the API key from.
pub const API_KEY_ENV: &str = "VIEWDNS_API_KEY";

/// Placeholder written in place of the API key in logs and error messages.
pub const REDACTED: &str = "REDACTED";

/// Maximum error message length in characters
/// Transport errors can embed long URLs and nested causes
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

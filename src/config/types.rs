//! Configuration types.
//!
//! This module defines the client configuration and the enums used by the CLI
//! to control logging.

use std::fmt;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_OUTPUT_FORMAT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, REDACTED, VIEWDNS_URL,
};
use crate::error_handling::ViewDnsError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Client configuration.
///
/// Only the API key is required; [`ClientConfig::new`] fills in the defaults
/// for everything else.
///
/// # Examples
///
/// ```no_run
/// use viewdns::ClientConfig;
///
/// let config = ClientConfig {
///     output_format: "xml".to_string(),
///     timeout_seconds: 60,
///     ..ClientConfig::new("my-api-key")
/// };
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// API key appended to every request
    pub api_key: String,

    /// Response format requested from the service (`json`, `xml`, ...)
    pub output_format: String,

    /// Base address of the API, without the operation path
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for `api_key` with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            base_url: VIEWDNS_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Validates the configuration and normalizes the output format.
    ///
    /// An empty output format becomes `json`; a trailing `/` on the base URL
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ViewDnsError::InvalidConfiguration` if:
    /// - the API key is empty
    /// - the base URL is empty or not `http://`/`https://`
    /// - the timeout is zero
    pub fn validate(mut self) -> Result<Self, ViewDnsError> {
        if self.api_key.is_empty() {
            return Err(ViewDnsError::InvalidConfiguration(
                "apiKey is required".to_string(),
            ));
        }

        if self.output_format.is_empty() {
            self.output_format = DEFAULT_OUTPUT_FORMAT.to_string();
        }

        let base_url = self.base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ViewDnsError::InvalidConfiguration(
                "base URL must not be empty".to_string(),
            ));
        }
        match url::Url::parse(base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => {
                return Err(ViewDnsError::InvalidConfiguration(format!(
                    "base URL must be an http:// or https:// URL, got '{}'",
                    base_url
                )));
            }
        }
        self.base_url = base_url.to_string();

        if self.timeout_seconds == 0 {
            return Err(ViewDnsError::InvalidConfiguration(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &REDACTED)
            .field("output_format", &self.output_format)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors returned by the ViewDNS client.
///
/// Configuration problems are reported at construction time and never by a
/// lookup. Every transport-level problem (connection failure, timeout,
/// non-success status, unreadable body) collapses into `RemoteUnavailable`.
#[derive(Error, Debug)]
pub enum ViewDnsError {
    /// The client configuration is unusable (e.g., empty API key).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A lookup argument is unusable (e.g., empty domain).
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// Name of the offending argument
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// A caller parameter collides with one the client appends itself.
    #[error("Parameter '{0}' is reserved and set by the client")]
    ReservedParameter(String),

    /// No response could be read from the remote service.
    #[error("Can't get data from ViewDNS server: {0}")]
    RemoteUnavailable(String),

    /// The response body is not valid UTF-8 and was requested as text.
    ///
    /// The `*_bytes` lookups return such bodies unchanged.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidResponseEncoding(#[from] std::string::FromUtf8Error),

    /// The underlying HTTP client could not be built.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] ReqwestError),
}

impl ViewDnsError {
    /// Returns true if this error came from the remote exchange.
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, ViewDnsError::RemoteUnavailable(_))
    }

    /// Returns true if this error came from validating the configuration.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, ViewDnsError::InvalidConfiguration(_))
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

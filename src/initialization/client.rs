//! HTTP client initialization.

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use crate::config::{ClientConfig, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the blocking HTTP client used for API requests.
///
/// Creates a `reqwest::blocking::Client` configured with:
/// - User-Agent header from the configuration
/// - Overall request timeout from the configuration
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`, capped by the overall timeout)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let connect_timeout = TCP_CONNECT_TIMEOUT_SECS.min(config.timeout_seconds);
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(connect_timeout))
        .user_agent(config.user_agent.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_http_client_with_defaults() {
        let config = ClientConfig::new("key");
        assert!(init_http_client(&config).is_ok());
    }

    #[test]
    fn test_init_http_client_with_short_timeout() {
        let config = ClientConfig {
            timeout_seconds: 1,
            ..ClientConfig::new("key")
        };
        assert!(init_http_client(&config).is_ok());
    }
}

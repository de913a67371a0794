//! ViewDNS.info API client.
//!
//! Each lookup builds one request URL, performs one blocking GET and hands
//! back the response body exactly as the server sent it. Nothing is parsed,
//! cached or retried.

mod endpoint;

use std::error::Error as StdError;

use log::{debug, warn};

use crate::config::{
    ClientConfig, API_VERSION, DEFAULT_RECORD_TYPE, PARAM_DOMAIN, PARAM_HOST, PARAM_RECORD_TYPE,
};
use crate::error_handling::ViewDnsError;
use crate::initialization::init_http_client;
use crate::utils::{clean_error_message, redact_api_key_param};

pub use endpoint::Operation;

/// Returns the version identifier of this API client (`"1.0.0"`).
pub fn version() -> &'static str {
    API_VERSION
}

/// Blocking client for the ViewDNS.info API.
///
/// The client holds only immutable configuration and a connection-pooling
/// HTTP client, so it can be cloned cheaply and shared between threads.
///
/// # Example
///
/// ```no_run
/// use viewdns::Client;
///
/// # fn main() -> Result<(), viewdns::ViewDnsError> {
/// let client = Client::new("my-api-key", None)?;
/// let body = client.reverse_ip_lookup("172.217.4.100")?;
/// println!("{}", body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Creates a client for `api_key` against the public API.
    ///
    /// `output_format` defaults to `json` when `None` or empty.
    ///
    /// # Errors
    ///
    /// Returns `ViewDnsError::InvalidConfiguration` if `api_key` is empty, or
    /// `ViewDnsError::HttpClient` if the TLS backend cannot be initialized.
    pub fn new(api_key: &str, output_format: Option<&str>) -> Result<Self, ViewDnsError> {
        let mut config = ClientConfig::new(api_key);
        if let Some(format) = output_format {
            config.output_format = format.to_string();
        }
        Self::with_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `ViewDnsError::InvalidConfiguration` if the configuration does
    /// not validate, or `ViewDnsError::HttpClient` if the HTTP client cannot
    /// be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, ViewDnsError> {
        let config = config.validate()?;
        let http = init_http_client(&config)?;
        debug!("Created ViewDNS client: {:?}", config);
        Ok(Self { config, http })
    }

    /// The API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// The response format requested from the service.
    pub fn output_format(&self) -> &str {
        &self.config.output_format
    }

    /// The base address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the version identifier of this API client (`"1.0.0"`).
    pub fn version(&self) -> &'static str {
        version()
    }

    /// Returns all configured DNS records of `record_type` for `domain`.
    ///
    /// `record_type` defaults to `A` when `None` or empty. It is not checked
    /// against a list of known types.
    ///
    /// # Errors
    ///
    /// - `ViewDnsError::InvalidArgument` if `domain` is empty
    /// - `ViewDnsError::RemoteUnavailable` if no response body could be read
    /// - `ViewDnsError::InvalidResponseEncoding` if the body is not UTF-8
    pub fn dns_record_lookup(
        &self,
        domain: &str,
        record_type: Option<&str>,
    ) -> Result<String, ViewDnsError> {
        let body = self.dns_record_lookup_bytes(domain, record_type)?;
        Ok(String::from_utf8(body)?)
    }

    /// Same as [`Client::dns_record_lookup`], returning the raw body bytes.
    pub fn dns_record_lookup_bytes(
        &self,
        domain: &str,
        record_type: Option<&str>,
    ) -> Result<Vec<u8>, ViewDnsError> {
        require_non_empty(PARAM_DOMAIN, domain)?;
        let record_type = match record_type {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_RECORD_TYPE,
        };

        let url = self.request_url(
            Operation::DnsRecord,
            &[(PARAM_DOMAIN, domain), (PARAM_RECORD_TYPE, record_type)],
        )?;
        self.fetch(&url)
    }

    /// Returns all domains hosted on the same server as `host` (a domain or
    /// IP address).
    ///
    /// The service caps the result at the first 10,000 domains.
    ///
    /// # Errors
    ///
    /// - `ViewDnsError::InvalidArgument` if `host` is empty
    /// - `ViewDnsError::RemoteUnavailable` if no response body could be read
    /// - `ViewDnsError::InvalidResponseEncoding` if the body is not UTF-8
    pub fn reverse_ip_lookup(&self, host: &str) -> Result<String, ViewDnsError> {
        let body = self.reverse_ip_lookup_bytes(host)?;
        Ok(String::from_utf8(body)?)
    }

    /// Same as [`Client::reverse_ip_lookup`], returning the raw body bytes.
    pub fn reverse_ip_lookup_bytes(&self, host: &str) -> Result<Vec<u8>, ViewDnsError> {
        require_non_empty(PARAM_HOST, host)?;
        let url = self.request_url(Operation::ReverseIp, &[(PARAM_HOST, host)])?;
        self.fetch(&url)
    }

    /// Builds the request URL for `operation` without sending anything.
    ///
    /// # Errors
    ///
    /// Returns `ViewDnsError::ReservedParameter` if `params` contains
    /// `apikey` or `output`.
    pub fn request_url(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
    ) -> Result<String, ViewDnsError> {
        endpoint::build_request_url(
            &self.config.base_url,
            operation,
            params,
            &self.config.api_key,
            &self.config.output_format,
        )
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, ViewDnsError> {
        let redacted_url = redact_api_key_param(url);
        debug!("GET {}", redacted_url);

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| remote_unavailable(e, &redacted_url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("ViewDNS returned HTTP {} for {}", status, redacted_url);
            return Err(ViewDnsError::RemoteUnavailable(format!(
                "HTTP {} from {}",
                status, redacted_url
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| remote_unavailable(e, &redacted_url))?;
        debug!(
            "Received {} bytes (HTTP {}) from {}",
            body.len(),
            status.as_u16(),
            redacted_url
        );
        Ok(body.to_vec())
    }
}

/// Maps a transport error to `RemoteUnavailable`.
///
/// The URL reqwest attaches to its errors carries the API key, so it is
/// dropped and the redacted URL is appended instead.
fn remote_unavailable(error: reqwest::Error, redacted_url: &str) -> ViewDnsError {
    let error = error.without_url();
    let message = clean_error_message(&format!("{} ({})", error_chain(&error), redacted_url));
    warn!("ViewDNS request failed: {}", message);
    ViewDnsError::RemoteUnavailable(message)
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ViewDnsError> {
    if value.is_empty() {
        return Err(ViewDnsError::InvalidArgument {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Joins an error and its sources, e.g. `error sending request: connection refused`.
///
/// A cause is skipped only when the link directly above it already quotes it.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut previous = message.clone();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !previous.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        previous = cause_message;
        source = cause.source();
    }
    message
}

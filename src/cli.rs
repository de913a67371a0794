//! Command-line interface.
//!
//! Argument parsing and command dispatch live in the library so they can be
//! tested without spawning the binary. `main.rs` only loads `.env`, sets up
//! logging and prints the result.

use clap::{Parser, Subcommand};

use crate::client::{version, Client};
use crate::config::{
    ClientConfig, LogFormat, LogLevel, API_KEY_ENV, DEFAULT_OUTPUT_FORMAT, DEFAULT_RECORD_TYPE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, VIEWDNS_URL,
};
use crate::error_handling::ViewDnsError;

/// Query the ViewDNS.info API from the command line.
#[derive(Debug, Parser)]
#[command(name = "viewdns", version, about)]
pub struct Cli {
    /// ViewDNS.info API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Response format requested from the service (json, xml, ...)
    #[arg(long, default_value = DEFAULT_OUTPUT_FORMAT)]
    pub output: String,

    /// Base address of the API
    #[arg(long, default_value = VIEWDNS_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Lookup to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Lookups offered by the CLI.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the DNS records of a domain
    DnsRecord {
        /// Domain name to look up
        domain: String,

        /// Record type (A, MX, CNAME, ANY, ...)
        #[arg(long, default_value = DEFAULT_RECORD_TYPE)]
        record_type: String,
    },
    /// Show all domains hosted on the same server as a domain or IP address
    ReverseIp {
        /// Domain name or IP address
        host: String,
    },
    /// Print the API client version
    Version,
}

impl Cli {
    /// Builds the client configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `ViewDnsError::InvalidConfiguration` if no API key was given
    /// on the command line or in the environment.
    pub fn client_config(&self) -> Result<ClientConfig, ViewDnsError> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(ViewDnsError::InvalidConfiguration(format!(
                    "apiKey is required (pass --api-key or set {})",
                    API_KEY_ENV
                )));
            }
        };

        Ok(ClientConfig {
            output_format: self.output.clone(),
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            ..ClientConfig::new(api_key)
        })
    }
}

/// Runs the parsed command and returns the bytes to print.
///
/// `version` needs no API key; the lookups return the response body unmodified.
///
/// # Errors
///
/// Returns any error from building the client or performing the lookup.
pub fn run(cli: &Cli) -> Result<Vec<u8>, ViewDnsError> {
    match &cli.command {
        Command::Version => Ok(version().as_bytes().to_vec()),
        Command::DnsRecord {
            domain,
            record_type,
        } => {
            let client = Client::with_config(cli.client_config()?)?;
            client.dns_record_lookup_bytes(domain, Some(record_type))
        }
        Command::ReverseIp { host } => {
            let client = Client::with_config(cli.client_config()?)?;
            client.reverse_ip_lookup_bytes(host)
        }
    }
}

//! Request URL construction.

use strum_macros::EnumIter;
use url::form_urlencoded;

use crate::config::{
    DNSRECORD_PATH, PARAM_API_KEY, PARAM_OUTPUT, RESERVED_PARAMS, REVERSEIP_PATH,
};
use crate::error_handling::ViewDnsError;

/// A remote operation exposed by the ViewDNS.info API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Operation {
    /// All configured DNS records (A, MX, CNAME, ...) for a domain
    DnsRecord,
    /// All domains hosted on the same server as a domain or IP address
    ReverseIp,
}

impl Operation {
    /// Path segment of this operation under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::DnsRecord => DNSRECORD_PATH,
            Operation::ReverseIp => REVERSEIP_PATH,
        }
    }
}

/// Builds `<base_url>/<path>/?<query>`.
///
/// The query holds `params` in order, followed by `apikey` and `output`,
/// form-encoded (space becomes `+`). `base_url` must not end with `/`.
///
/// # Errors
///
/// Returns `ViewDnsError::ReservedParameter` if a caller parameter is named
/// `apikey` or `output`.
pub(crate) fn build_request_url(
    base_url: &str,
    operation: Operation,
    params: &[(&str, &str)],
    api_key: &str,
    output_format: &str,
) -> Result<String, ViewDnsError> {
    if let Some((name, _)) = params
        .iter()
        .find(|(name, _)| RESERVED_PARAMS.contains(name))
    {
        return Err(ViewDnsError::ReservedParameter((*name).to_string()));
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().copied())
        .append_pair(PARAM_API_KEY, api_key)
        .append_pair(PARAM_OUTPUT, output_format)
        .finish();

    Ok(format!("{}/{}/?{}", base_url, operation.path(), query))
}

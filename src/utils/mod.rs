//! Shared helpers.

mod sanitize;

pub use sanitize::{clean_error_message, redact_api_key_param};

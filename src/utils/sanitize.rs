//! Utilities for sanitizing error messages and URLs.
//!
//! Request URLs carry the API key as the `apikey` query parameter. Any URL
//! that ends up in a log line or an error message is rewritten first, and
//! transport errors are stripped of their URL before being formatted.

use url::Url;

use crate::config::{MAX_ERROR_MESSAGE_LENGTH, PARAM_API_KEY, REDACTED};

/// Returns `url` with the value of every `apikey` query parameter replaced
/// by `REDACTED`.
///
/// Other parameters and the rest of the URL are kept. A string that does not
/// parse as a URL is reduced to `REDACTED` rather than echoed.
pub fn redact_api_key_param(url: &str) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return REDACTED.to_string(),
    };

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            if name == PARAM_API_KEY {
                (name.into_owned(), REDACTED.to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();

    if !pairs.is_empty() {
        parsed.query_pairs_mut().clear().extend_pairs(pairs);
    }
    parsed.to_string()
}

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can
/// garble terminal output, and the remote server controls part of the text.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Sanitizes and truncates a transport error message.
///
/// Messages longer than `MAX_ERROR_MESSAGE_LENGTH` are cut on a character
/// boundary and suffixed with the original length.
pub fn clean_error_message(message: &str) -> String {
    let cleaned = sanitize_error_message(message);

    let char_count = cleaned.chars().count();
    if char_count > MAX_ERROR_MESSAGE_LENGTH {
        let truncate_len = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let truncated: String = cleaned.chars().take(truncate_len).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        cleaned
    }
}

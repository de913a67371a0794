//! Error handling.
//!
//! Errors are split into:
//! - **Client errors** (`ViewDnsError`): configuration, argument and transport failures
//! - **Initialization errors** (`InitializationError`): logger setup in the binary

mod types;

// Re-export public API
pub use types::{InitializationError, ViewDnsError};

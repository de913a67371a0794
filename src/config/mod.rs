//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, parameter names, timeouts)
//! - The `ClientConfig` struct and its validation
//! - Log level and format enums for the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ClientConfig, LogFormat, LogLevel};

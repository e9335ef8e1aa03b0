//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default WHOIS client, output location)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, CsvQuoting, LogFormat, LogLevel};

//! Error handling.
//!
//! Error types are split by phase:
//! - **Initialization**: logger setup
//! - **Lookup**: acquiring raw WHOIS text (degraded to empty input, never fatal)
//! - **Export**: writing the CSV file (the only fatal failure)

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, LookupError};

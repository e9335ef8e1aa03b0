//! Main application helpers.

pub mod statistics;

// Re-export public API
pub use statistics::log_contact_summary;

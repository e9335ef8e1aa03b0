//! Contact extraction from raw WHOIS text.

use super::types::{ContactSet, Field, Role};

/// Separator between a key and its value in registrar output.
const KEY_VALUE_SEPARATOR: &str = ": ";

/// Characters stripped from both ends of every captured value.
const TRIMMED_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Builds a [`ContactSet`] from raw WHOIS output.
///
/// Only lines of the form `<Role> <Field>: <value>` are considered, where the
/// role and field labels match exactly. Everything after the first `": "`
/// is the value, so values containing further `": "` sequences survive intact.
/// Lines with unknown roles or labels are skipped.
pub fn parse_contacts(raw: &str) -> ContactSet {
    let mut contacts = ContactSet::new();

    for line in raw.lines() {
        let Some((role, field, value)) = parse_contact_line(line) else {
            continue;
        };
        contacts.record(role, field, value);
    }

    log::debug!(
        "Extracted {} populated contact field(s) from {} byte(s) of WHOIS output",
        contacts.populated_count(),
        raw.len()
    );

    contacts
}

/// Splits one line into its role, field and trimmed value.
fn parse_contact_line(line: &str) -> Option<(Role, Field, &str)> {
    let (key, value) = line.split_once(KEY_VALUE_SEPARATOR)?;
    let (prefix, label) = key.split_once(' ')?;
    let role = Role::from_prefix(prefix)?;

    match Field::from_label(label) {
        Some(field) => Some((role, field, value.trim_matches(TRIMMED_CHARS))),
        None => {
            log::debug!("Ignoring unrecognised {} field label: {:?}", role, label);
            None
        }
    }
}

//! WHOIS contact data structures.

use std::collections::BTreeMap;
use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// Contact role listed in a domain registration record.
///
/// Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIterMacro)]
pub enum Role {
    /// Domain owner
    Registrant,
    /// Administrative contact
    Admin,
    /// Technical contact
    Tech,
}

impl Role {
    /// Prefix used by registrars for this role (e.g. `Registrant Name: ...`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Registrant => "Registrant",
            Role::Admin => "Admin",
            Role::Tech => "Tech",
        }
    }

    /// Resolves a role prefix, case-sensitively.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Role::iter().find(|role| role.as_str() == prefix)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact attribute tracked for every role.
///
/// Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIterMacro)]
pub enum Field {
    Name,
    Organization,
    /// Multi-line in most registrar output; lines are joined with a space
    Street,
    City,
    StateProvince,
    PostalCode,
    Country,
    Phone,
    PhoneExt,
    Fax,
    FaxExt,
    Email,
}

impl Field {
    /// Field label as it appears after the role prefix.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Organization => "Organization",
            Field::Street => "Street",
            Field::City => "City",
            Field::StateProvince => "State/Province",
            Field::PostalCode => "Postal Code",
            Field::Country => "Country",
            Field::Phone => "Phone",
            Field::PhoneExt => "Phone Ext",
            Field::Fax => "Fax",
            Field::FaxExt => "Fax Ext",
            Field::Email => "Email",
        }
    }

    /// Resolves a field label, case-sensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Field::iter().find(|field| field.label() == label)
    }

    /// Whether repeated occurrences accumulate instead of overwriting.
    pub fn accumulates(self) -> bool {
        self == Field::Street
    }

    fn is_extension(self) -> bool {
        matches!(self, Field::PhoneExt | Field::FaxExt)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of rows in every CSV produced: 3 roles x 12 fields.
pub const CONTACT_ROW_COUNT: usize = 36;

/// Every `(Role, Field)` pair in output order.
///
/// The parser uses this to recognise keys and the writer uses it to emit rows,
/// so both always agree on the schema.
pub fn contact_keys() -> impl Iterator<Item = (Role, Field)> {
    Role::iter().flat_map(|role| Field::iter().map(move |field| (role, field)))
}

/// Output label for a key, e.g. `Admin State/Province` or `Tech Fax Ext:`.
pub fn row_label(role: Role, field: Field) -> String {
    if field.is_extension() {
        format!("{} {}:", role, field)
    } else {
        format!("{} {}", role, field)
    }
}

/// Contact values for all three roles, keyed by `(Role, Field)`.
///
/// Keys absent from the map render as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet {
    values: BTreeMap<(Role, Field), String>,
}

impl ContactSet {
    /// Creates an empty contact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already-trimmed value, applying the Street accumulation rule.
    pub fn record(&mut self, role: Role, field: Field, value: &str) {
        match self.values.get_mut(&(role, field)) {
            Some(existing) if field.accumulates() => {
                existing.push(' ');
                existing.push_str(value);
            }
            Some(existing) => {
                existing.clear();
                existing.push_str(value);
            }
            None => {
                self.values.insert((role, field), value.to_string());
            }
        }
    }

    /// Value stored for a key, if the input supplied one.
    pub fn get(&self, role: Role, field: Field) -> Option<&str> {
        self.values.get(&(role, field)).map(String::as_str)
    }

    /// Number of keys holding a non-empty value.
    pub fn populated_count(&self) -> usize {
        self.values.values().filter(|v| !v.is_empty()).count()
    }

    /// Number of non-empty fields for one role.
    pub fn populated_for(&self, role: Role) -> usize {
        self.values
            .iter()
            .filter(|((r, _), v)| *r == role && !v.is_empty())
            .count()
    }

    /// Whether no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rendered `(label, value)` rows in output order, always 36 of them.
    pub fn rows(&self) -> Vec<(String, String)> {
        contact_keys()
            .map(|(role, field)| {
                let mut value = self.get(role, field).unwrap_or_default().to_string();
                // Legacy formatter left a trailing space after non-empty streets
                if field == Field::Street && !value.is_empty() {
                    value.push(' ');
                }
                (row_label(role, field), value)
            })
            .collect()
    }
}

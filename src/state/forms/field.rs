//! Form field value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Options offered for the relationship-to-deceased field
pub const RELATIONSHIP_OPTIONS: [&str; 8] = [
    "Family Member",
    "Spouse",
    "Child",
    "Sibling",
    "Extended Family",
    "Friend",
    "Legal Representative",
    "Other",
];

/// Every field any auth form can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Relationship,
    PlotNumber,
    DeceasedName,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Key used when the field is addressed by name
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Relationship => "relationship",
            Self::PlotNumber => "plotNumber",
            Self::DeceasedName => "deceasedName",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Address => "Street Address",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "ZIP Code",
            Self::Relationship => "Relationship to Deceased",
            Self::PlotNumber => "Plot/Grave Number (if known)",
            Self::DeceasedName => "Name of Deceased (if applicable)",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current string value of every declared field.
///
/// Values are stored exactly as typed; no trimming or normalization happens
/// here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldName, String>,
}

impl FieldValues {
    /// Create an empty value set declaring the given fields
    pub fn declare(fields: &[FieldName]) -> Self {
        Self {
            values: fields.iter().map(|f| (*f, String::new())).collect(),
        }
    }

    pub fn is_declared(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Get a field value (empty for undeclared fields)
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace a declared field's value. Returns false if the field is not declared.
    pub(crate) fn set(&mut self, field: FieldName, value: String) -> bool {
        if !self.is_declared(field) {
            return false;
        }
        self.values.insert(field, value);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

// Passwords never reach the logs
impl fmt::Debug for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in self.iter() {
            if field.is_secret() && !value.is_empty() {
                map.entry(&field.key(), &"********");
            } else {
                map.entry(&field.key(), &value);
            }
        }
        map.finish()
    }
}

/// Boolean state the rules or the host need besides field values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagName {
    TermsAccepted,
    ShowPassword,
    ShowConfirmPassword,
}

/// Auxiliary flags. Only `terms_accepted` affects validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuxFlags {
    pub terms_accepted: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl AuxFlags {
    pub fn get(&self, flag: FlagName) -> bool {
        match flag {
            FlagName::TermsAccepted => self.terms_accepted,
            FlagName::ShowPassword => self.show_password,
            FlagName::ShowConfirmPassword => self.show_confirm_password,
        }
    }

    pub fn set(&mut self, flag: FlagName, value: bool) {
        match flag {
            FlagName::TermsAccepted => self.terms_accepted = value,
            FlagName::ShowPassword => self.show_password = value,
            FlagName::ShowConfirmPassword => self.show_confirm_password = value,
        }
    }

    /// Whether the given secret field should be rendered in clear text
    pub fn reveals(&self, field: FieldName) -> bool {
        match field {
            FieldName::Password => self.show_password,
            FieldName::ConfirmPassword => self.show_confirm_password,
            _ => true,
        }
    }
}

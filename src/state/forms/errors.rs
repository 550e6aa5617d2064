//! Per-field and form-level error messages

use super::field::FieldName;
use std::collections::BTreeMap;

/// Error messages currently displayed for a form.
///
/// A field without an error has no entry. `terms` and `submission` are
/// form-level slots shown outside any single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    fields: BTreeMap<FieldName, String>,
    terms: Option<String>,
    submission: Option<String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error for a single field, if any
    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn terms(&self) -> Option<&str> {
        self.terms.as_deref()
    }

    /// Error reported by the identity service for the last attempt
    pub fn submission(&self) -> Option<&str> {
        self.submission.as_deref()
    }

    /// True when no field has an error
    pub fn fields_clear(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when neither fields nor form-level slots hold an error
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.terms.is_none() && self.submission.is_none()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn iter_fields(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub(crate) fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub(crate) fn set_terms(&mut self, message: impl Into<String>) {
        self.terms = Some(message.into());
    }

    pub(crate) fn set_submission(&mut self, message: impl Into<String>) {
        self.submission = Some(message.into());
    }

    /// Drop one field's error without re-validating.
    ///
    /// Used on every edit: the entry disappears even if the new value is
    /// still invalid, and comes back only on the next full validation pass.
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, field: FieldName) -> bool {
        self.fields.remove(&field).is_some()
    }
}

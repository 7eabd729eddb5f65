//! Raw form input, keyed by field

use regform_validation::FieldId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current raw value of each field, as read from the form
///
/// Serializes as a plain object keyed by the markup ids
/// (`{"fullName": "...", "email": "..."}`). Absent fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<FieldId, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Raw value of `field`, or `""` when it was never supplied
    pub fn get(&self, field: FieldId) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl<V: Into<String>> FromIterator<(FieldId, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldId, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(f, v)| (f, v.into())).collect())
    }
}

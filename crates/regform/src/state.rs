//! Per-field validity state and the derived form verdict

use regform_validation::{FieldId, ValidationResult};
use serde::Serialize;

/// Tri-state validity of one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Validity {
    /// Not evaluated since the form was created or last reset
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl From<&ValidationResult> for Validity {
    fn from(result: &ValidationResult) -> Self {
        if result.valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub field_id: FieldId,
    pub value: String,
    pub valid: Validity,
}

impl FieldState {
    fn new(field_id: FieldId) -> Self {
        Self {
            field_id,
            value: String::new(),
            valid: Validity::Unknown,
        }
    }
}

/// One [`FieldState`] per form field, in validation order
///
/// Every state starts `Unknown`. Each applied result moves its field to
/// `Valid` or `Invalid`; [`FormState::reset`] returns all of them to
/// `Unknown` with empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    fields: Vec<FieldState>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(FieldState::new).collect(),
        }
    }

    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.field(field).value
    }

    pub fn validity(&self, field: FieldId) -> Validity {
        self.field(field).valid
    }

    /// Records a new raw value; validity is untouched until the next validation
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.fields[field.index()].value = value.into();
    }

    /// Moves `field` to the state `result` describes
    pub fn apply(&mut self, field: FieldId, result: &ValidationResult) {
        let state = &mut self.fields[field.index()];
        let next = Validity::from(result);
        if state.valid != next {
            tracing::debug!(field = %field, from = ?state.valid, to = ?next, "field state changed");
        }
        state.valid = next;
    }

    /// True iff every field is `Valid`; recomputed on each call
    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(|f| f.valid == Validity::Valid)
    }

    /// Back to `Unknown` with every value cleared
    pub fn reset(&mut self) {
        for state in &mut self.fields {
            state.value.clear();
            state.valid = Validity::Unknown;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }
}

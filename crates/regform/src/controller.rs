//! Full-form and single-field validation
//!
//! Everything here is pure: results are returned, never applied. See
//! [`crate::events`] for the handlers that fold them into a [`crate::FormState`].

use crate::strength::{self, StrengthResult};
use crate::values::FormValues;
use regform_validation::{rules, FieldId, RuleContext, ValidationResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating every field at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub all_valid: bool,
    /// One entry per field, in validation order
    pub per_field: BTreeMap<FieldId, ValidationResult>,
}

impl FormValidation {
    pub fn result(&self, field: FieldId) -> &ValidationResult {
        &self.per_field[&field]
    }

    /// Fields that failed, in validation order
    pub fn failures(&self) -> impl Iterator<Item = (FieldId, &ValidationResult)> {
        self.per_field
            .iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, result)| (*field, result))
    }
}

/// Validates every field, confirmPassword last against the submitted password
///
/// Fields missing from `values` are validated as empty.
pub fn validate_all(values: &FormValues) -> FormValidation {
    let ctx = RuleContext::with_password(values.get(FieldId::Password));

    let per_field: BTreeMap<_, _> = FieldId::ALL
        .into_iter()
        .map(|field| (field, rules::validate(field, values.get(field), &ctx)))
        .collect();
    let all_valid = per_field.values().all(|result| result.valid);

    tracing::debug!(
        all_valid,
        failed = per_field.values().filter(|r| !r.valid).count(),
        "form validated"
    );

    FormValidation {
        all_valid,
        per_field,
    }
}

/// Live validation of one field
///
/// For confirmPassword, `ctx` must carry the current password.
pub fn validate_field(field: FieldId, value: &str, ctx: &RuleContext<'_>) -> ValidationResult {
    let result = rules::validate(field, value, ctx);
    tracing::debug!(field = %field, valid = result.valid, "field validated");
    result
}

pub fn classify_strength(password: &str) -> StrengthResult {
    strength::classify_strength(password)
}

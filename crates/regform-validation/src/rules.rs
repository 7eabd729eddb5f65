//! The fixed rule table: one predicate and failure kind per field

use crate::field::{ErrorKind, FieldId, ValidationResult};
use crate::{numeric, password, string};

/// Values a rule may need beyond the field's own value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleContext<'a> {
    /// Current password, compared against by the confirmation rule
    pub password: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    pub fn with_password(password: &'a str) -> Self {
        Self {
            password: Some(password),
        }
    }
}

/// Predicate over a normalized field value
pub type Rule = fn(&str, &RuleContext<'_>) -> bool;

/// Binds a field to its rule and the kind reported when the rule fails
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub rule: Rule,
    pub error_kind: ErrorKind,
}

impl FieldSpec {
    pub fn of(field: FieldId) -> &'static FieldSpec {
        &FIELD_SPECS[field.index()]
    }
}

fn full_name_rule(value: &str, _: &RuleContext<'_>) -> bool {
    string::is_valid_full_name(value)
}

fn email_rule(value: &str, _: &RuleContext<'_>) -> bool {
    string::is_valid_email(value)
}

fn mobile_rule(value: &str, _: &RuleContext<'_>) -> bool {
    string::is_valid_mobile(value)
}

fn age_rule(value: &str, _: &RuleContext<'_>) -> bool {
    numeric::is_valid_age(value)
}

fn gender_rule(value: &str, _: &RuleContext<'_>) -> bool {
    string::is_selected(value)
}

fn password_rule(value: &str, _: &RuleContext<'_>) -> bool {
    password::is_valid_password(value)
}

fn confirm_rule(value: &str, ctx: &RuleContext<'_>) -> bool {
    // Without a password to compare against, nothing matches
    string::passwords_match(value, ctx.password.unwrap_or_default())
}

/// Rule table, indexed by [`FieldId::index`]
pub static FIELD_SPECS: [FieldSpec; 7] = [
    FieldSpec {
        id: FieldId::FullName,
        rule: full_name_rule,
        error_kind: ErrorKind::FullNameError,
    },
    FieldSpec {
        id: FieldId::Email,
        rule: email_rule,
        error_kind: ErrorKind::EmailError,
    },
    FieldSpec {
        id: FieldId::Mobile,
        rule: mobile_rule,
        error_kind: ErrorKind::MobileError,
    },
    FieldSpec {
        id: FieldId::Age,
        rule: age_rule,
        error_kind: ErrorKind::AgeError,
    },
    FieldSpec {
        id: FieldId::Gender,
        rule: gender_rule,
        error_kind: ErrorKind::GenderError,
    },
    FieldSpec {
        id: FieldId::Password,
        rule: password_rule,
        error_kind: ErrorKind::PasswordError,
    },
    FieldSpec {
        id: FieldId::ConfirmPassword,
        rule: confirm_rule,
        error_kind: ErrorKind::ConfirmPasswordError,
    },
];

/// Runs the rule for `field` against `value`
///
/// Name, email, mobile and age are trimmed first, using
/// [`string::trim_form_whitespace`]. Never fails: a value that
/// breaks the rule yields `valid = false` with the field's [`ErrorKind`].
pub fn validate(field: FieldId, value: &str, ctx: &RuleContext<'_>) -> ValidationResult {
    let spec = FieldSpec::of(field);
    let input = if field.trims_input() {
        string::trim_form_whitespace(value)
    } else {
        value
    };

    if (spec.rule)(input, ctx) {
        ValidationResult::pass()
    } else {
        ValidationResult::fail(spec.error_kind)
    }
}

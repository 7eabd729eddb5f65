//! Field identifiers, failure kinds and per-field results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named input of the registration form
///
/// Variants are declared in validation order, so `Ord` sorts fields the
/// way a full-form submission visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Mobile,
    Age,
    Gender,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in validation order (confirmPassword last)
    pub const ALL: [FieldId; 7] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Mobile,
        FieldId::Age,
        FieldId::Gender,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Identifier used by the form markup
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Mobile => "mobile",
            FieldId::Age => "age",
            FieldId::Gender => "gender",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
        }
    }

    /// Position in [`FieldId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether surrounding whitespace is stripped before the rule runs.
    ///
    /// Passwords keep their whitespace; the gender select value is taken as is.
    pub fn trims_input(self) -> bool {
        matches!(
            self,
            FieldId::FullName | FieldId::Email | FieldId::Mobile | FieldId::Age
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}` (expected one of fullName, email, mobile, age, gender, password, confirmPassword)")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Which field's constraint failed, serialized as `<fieldId>Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    FullNameError,
    EmailError,
    MobileError,
    AgeError,
    GenderError,
    PasswordError,
    ConfirmPasswordError,
}

impl ErrorKind {
    /// Message shown next to the field when the rule fails
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::FullNameError => {
                "Name must be at least 3 letters (letters and spaces only)."
            }
            ErrorKind::EmailError => "Please enter a valid email address.",
            ErrorKind::MobileError => "Enter a 10-digit mobile number starting with 6-9.",
            ErrorKind::AgeError => "Age must be between 18 and 100.",
            ErrorKind::GenderError => "Please select your gender.",
            ErrorKind::PasswordError => {
                "Password needs at least 8 characters, one digit and one special character."
            }
            ErrorKind::ConfirmPasswordError => "Passwords do not match.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of running one field's rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    /// Set only when `valid` is false
    pub error_kind: Option<ErrorKind>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            error_kind: None,
        }
    }

    pub fn fail(kind: ErrorKind) -> Self {
        Self {
            valid: false,
            error_kind: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_round_trip_through_markup_names() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "username".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownField("username".to_string()));
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_order_matches_index() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert!(FieldId::Password < FieldId::ConfirmPassword);
    }

    #[test]
    fn test_trimming_policy() {
        assert!(FieldId::FullName.trims_input());
        assert!(FieldId::Age.trims_input());
        assert!(!FieldId::Password.trims_input());
        assert!(!FieldId::ConfirmPassword.trims_input());
        assert!(!FieldId::Gender.trims_input());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_string(&ValidationResult::fail(ErrorKind::EmailError)).unwrap();
        assert_eq!(json, r#"{"valid":false,"errorKind":"emailError"}"#);
    }
}

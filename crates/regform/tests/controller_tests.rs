//! Integration tests for full-form and live validation
//!
//! Covers:
//! - Field rule boundaries (age, mobile, name, email, password)
//! - Confirmation against the current password
//! - Aggregate submit verdict
//! - Strength classification bands

use pretty_assertions::assert_eq;
use regform::controller::{classify_strength, validate_all, validate_field};
use regform::{ErrorKind, FieldId, FormValues, RuleContext, StrengthLabel, ValidationResult};
use rstest::rstest;

fn complete_form() -> FormValues {
    [
        (FieldId::FullName, "Asha Rao"),
        (FieldId::Email, "asha@example.com"),
        (FieldId::Mobile, "9876543210"),
        (FieldId::Age, "29"),
        (FieldId::Gender, "female"),
        (FieldId::Password, "monsoon7!"),
        (FieldId::ConfirmPassword, "monsoon7!"),
    ]
    .into_iter()
    .collect()
}

fn live(field: FieldId, value: &str) -> ValidationResult {
    validate_field(field, value, &RuleContext::default())
}

#[rstest]
#[case("18", true)]
#[case("17", false)]
#[case("100", true)]
#[case("101", false)]
#[case("abc", false)]
#[case("", false)]
#[case(" 45 ", true)]
#[case("25abc", true)]
fn test_age_boundaries(#[case] age: &str, #[case] valid: bool) {
    assert_eq!(live(FieldId::Age, age).valid, valid);
}

#[rstest]
#[case("9876543210", true)]
#[case("6123456789", true)]
#[case("5876543210", false)]
#[case("987654321", false)]
#[case("+919876543210", false)]
fn test_mobile_boundaries(#[case] mobile: &str, #[case] valid: bool) {
    assert_eq!(live(FieldId::Mobile, mobile).valid, valid);
}

#[rstest]
#[case(FieldId::FullName, "Jo", ErrorKind::FullNameError)]
#[case(FieldId::Email, "asha@example", ErrorKind::EmailError)]
#[case(FieldId::Mobile, "12345", ErrorKind::MobileError)]
#[case(FieldId::Age, "12", ErrorKind::AgeError)]
#[case(FieldId::Gender, "", ErrorKind::GenderError)]
#[case(FieldId::Password, "password", ErrorKind::PasswordError)]
#[case(FieldId::ConfirmPassword, "", ErrorKind::ConfirmPasswordError)]
fn test_failures_name_the_broken_rule(
    #[case] field: FieldId,
    #[case] value: &str,
    #[case] kind: ErrorKind,
) {
    assert_eq!(live(field, value), ValidationResult::fail(kind));
}

#[test]
fn test_complete_form_is_accepted() {
    let outcome = validate_all(&complete_form());
    assert!(outcome.all_valid);
    assert_eq!(outcome.failures().count(), 0);
}

#[test]
fn test_one_bad_field_rejects_the_form() {
    let mut values = complete_form();
    values.insert(FieldId::Mobile, "5876543210");

    let outcome = validate_all(&values);
    assert!(!outcome.all_valid);
    let failed: Vec<_> = outcome.failures().map(|(field, _)| field).collect();
    assert_eq!(failed, vec![FieldId::Mobile]);
}

#[test]
fn test_mismatched_confirmation() {
    let mut values = complete_form();
    values.insert(FieldId::ConfirmPassword, "Monsoon7!");

    let outcome = validate_all(&values);
    assert_eq!(
        outcome.result(FieldId::ConfirmPassword),
        &ValidationResult::fail(ErrorKind::ConfirmPasswordError)
    );
    assert!(outcome.result(FieldId::Password).valid);
}

#[test]
fn test_validate_all_is_idempotent() {
    let mut values = complete_form();
    values.insert(FieldId::Email, "not-an-email");
    assert_eq!(validate_all(&values), validate_all(&values));
}

#[test]
fn test_live_confirmation_reads_password_from_context() {
    let ctx = RuleContext::with_password("monsoon7!");
    assert!(validate_field(FieldId::ConfirmPassword, "monsoon7!", &ctx).valid);
    assert!(!validate_field(FieldId::ConfirmPassword, "monsoon7! ", &ctx).valid);
}

#[rstest]
#[case("abc", 0, StrengthLabel::VeryWeak)]
#[case("abcdefgh", 1, StrengthLabel::VeryWeak)]
#[case("Abcdefgh", 2, StrengthLabel::Weak)]
#[case("Abcdefgh1", 3, StrengthLabel::Fair)]
#[case("Abcdefgh1!", 4, StrengthLabel::Strong)]
#[case("Abcdefghijkl1!", 5, StrengthLabel::VeryStrong)]
fn test_strength_bands(#[case] password: &str, #[case] score: u8, #[case] label: StrengthLabel) {
    let strength = classify_strength(password);
    assert_eq!((strength.score, strength.label), (score, label));
}

#[test]
fn test_form_validation_json() {
    let mut values = complete_form();
    values.insert(FieldId::Gender, "");
    let json = serde_json::to_value(validate_all(&values)).unwrap();

    assert_eq!(json["allValid"], false);
    assert_eq!(json["perField"]["gender"]["errorKind"], "genderError");
    assert_eq!(json["perField"]["fullName"]["valid"], true);
}

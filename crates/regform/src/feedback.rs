//! Visual cues for validation results, and the sink a UI implements to receive them
//!
//! Nothing here renders. Each type carries the class names, glyphs, colors
//! and meter bands the registration page expects, so a UI layer only has to
//! copy them onto its elements.

use crate::state::Validity;
use crate::strength::{classify_strength, StrengthLabel};
use regform_validation::{FieldId, ValidationResult};
use serde::Serialize;

pub const VALID_GLYPH: &str = "✓";
pub const INVALID_GLYPH: &str = "✗";
pub const SUCCESS_COLOR: &str = "var(--success)";
pub const ERROR_COLOR: &str = "var(--error)";

/// Id of the element holding a field's error message
pub fn error_element(field: FieldId) -> &'static str {
    match field {
        FieldId::FullName => "nameError",
        FieldId::Email => "emailError",
        FieldId::Mobile => "mobileError",
        FieldId::Age => "ageError",
        FieldId::Gender => "genderError",
        FieldId::Password => "passwordError",
        FieldId::ConfirmPassword => "confirmPasswordError",
    }
}

/// What a field should look like in a given validity state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFeedback {
    pub field: FieldId,
    pub validity: Validity,
    /// `"valid"` or `"invalid"`; `None` strips both classes
    pub state_class: Option<&'static str>,
    pub error_element: &'static str,
    pub error_visible: bool,
    /// Status icon text; empty when cleared
    pub glyph: &'static str,
    pub color_token: Option<&'static str>,
    /// Message for the failed rule, if any
    pub message: Option<&'static str>,
}

impl FieldFeedback {
    pub fn for_result(field: FieldId, result: &ValidationResult) -> Self {
        let mut feedback = Self::for_validity(field, Validity::from(result));
        feedback.message = result.error_kind.map(|kind| kind.message());
        feedback
    }

    /// Cues for a field that has been reset
    pub fn cleared(field: FieldId) -> Self {
        Self::for_validity(field, Validity::Unknown)
    }

    fn for_validity(field: FieldId, validity: Validity) -> Self {
        let (state_class, glyph, color_token) = match validity {
            Validity::Valid => (Some("valid"), VALID_GLYPH, Some(SUCCESS_COLOR)),
            Validity::Invalid => (Some("invalid"), INVALID_GLYPH, Some(ERROR_COLOR)),
            Validity::Unknown => (None, "", None),
        };

        Self {
            field,
            validity,
            state_class,
            error_element: error_element(field),
            error_visible: validity == Validity::Invalid,
            glyph,
            color_token,
            message: None,
        }
    }
}

/// Fill and color of one meter band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterLevel {
    pub percent: u8,
    pub color: &'static str,
}

/// Indexed by [`StrengthLabel::band`]
pub const METER_LEVELS: [MeterLevel; 5] = [
    MeterLevel {
        percent: 15,
        color: "#f87171",
    },
    MeterLevel {
        percent: 35,
        color: "#fb923c",
    },
    MeterLevel {
        percent: 55,
        color: "#fbbf24",
    },
    MeterLevel {
        percent: 75,
        color: "#34d399",
    },
    MeterLevel {
        percent: 100,
        color: "#10b981",
    },
];

/// Strength meter contents for the current password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthMeter {
    pub score: u8,
    pub label: StrengthLabel,
    pub percent: u8,
    pub color: &'static str,
    pub text: &'static str,
}

impl StrengthMeter {
    /// `None` for an empty password: the meter is hidden
    pub fn for_password(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }

        let strength = classify_strength(password);
        let level = METER_LEVELS[strength.label.band()];
        Some(Self {
            score: strength.score,
            label: strength.label,
            percent: level.percent,
            color: level.color,
            text: strength.label.text(),
        })
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Every field passed: show the success message, the form has been reset
    Accepted,
    /// At least one field failed: play the failure animation, hide any success message
    Rejected,
}

/// Message from the form core to the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeedbackEvent {
    Field(FieldFeedback),
    Strength { meter: Option<StrengthMeter> },
    Submitted { outcome: SubmitOutcome },
}

/// Receives feedback as handlers run
pub trait FeedbackSink {
    fn emit(&mut self, event: FeedbackEvent);
}

/// Collects events in order; handy for headless use and tests
impl FeedbackSink for Vec<FeedbackEvent> {
    fn emit(&mut self, event: FeedbackEvent) {
        self.push(event);
    }
}

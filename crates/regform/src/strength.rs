//! Password strength scoring for the live meter
//!
//! Independent from the submission rule: a password can score "Very Strong"
//! and still be rejected (no special character from the stricter set, say),
//! or pass submission while scoring "Fair".

use regform_validation::password::{has_digit, has_special, password_length};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters the meter credits as special
pub const METER_SPECIALS: &str = "!@#$%^&*()_+-={}[]|;:,.<>?";

pub const MAX_SCORE: u8 = 5;

/// Meter band, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub const BANDS: [StrengthLabel; 5] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Fair,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    /// Band for a score: `score - 1` clamped to `0..=4`, so 0 and 1 share the lowest band
    pub fn from_score(score: u8) -> Self {
        let band = usize::from(score.saturating_sub(1)).min(Self::BANDS.len() - 1);
        Self::BANDS[band]
    }

    pub fn band(self) -> usize {
        self as usize
    }

    pub fn text(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Number of satisfied criteria, `0..=5`
    pub score: u8,
    pub label: StrengthLabel,
}

/// Scores a password one point per criterion met
///
/// Criteria: a length of at least 8, an ASCII uppercase letter, an ASCII
/// digit, a character from [`METER_SPECIALS`], a length of at least 12.
/// Length is measured by [`password_length`].
pub fn classify_strength(password: &str) -> StrengthResult {
    let length = password_length(password);
    let criteria = [
        length >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        has_digit(password),
        has_special(password, METER_SPECIALS),
        length >= 12,
    ];

    let score = criteria.iter().filter(|met| **met).count() as u8;
    let score = score.min(MAX_SCORE);
    tracing::trace!(score, "password strength scored");

    StrengthResult {
        score,
        label: StrengthLabel::from_score(score),
    }
}

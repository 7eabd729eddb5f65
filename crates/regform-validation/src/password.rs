//! Password validation functions

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "one special character" requirement
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+={}[]:;\"'<>,.?/\\|`~-";

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Length in UTF-16 code units, the unit a browser input reports
///
/// A character outside the Basic Multilingual Plane (most emoji) counts twice.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str, specials: &str) -> bool {
    password.chars().any(|c| specials.contains(c))
}

/// Validates the submission rule for passwords
///
/// Requires a [`password_length`] of at least 8, one ASCII digit and one character from
/// [`PASSWORD_SPECIALS`]. The value is never trimmed. Line terminators are
/// rejected outright since a password input cannot hold them.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) {
        return false;
    }

    password_length(password) >= MIN_PASSWORD_LENGTH
        && has_digit(password)
        && has_special(password, PASSWORD_SPECIALS)
}

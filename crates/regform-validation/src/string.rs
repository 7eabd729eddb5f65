//! Text field validators (name, email, mobile, gender, password confirmation)

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as a browser's `trim()` and `\s` see it, as a regex class body.
///
/// Differs from Unicode `White_Space`: U+FEFF is included, U+0085 is not.
pub const FORM_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Letters and whitespace only, at least 3 characters
static FULL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-z{FORM_WHITESPACE}]{{3,}}$"))
        .expect("full name pattern compiles")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$",
        ws = FORM_WHITESPACE
    ))
    .expect("email pattern compiles")
});

// Ten ASCII digits, the first one 6-9
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("mobile pattern compiles"));

/// Membership in [`FORM_WHITESPACE`]
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strips leading and trailing [`is_form_whitespace`] characters
pub fn trim_form_whitespace(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

pub fn is_valid_full_name(name: &str) -> bool {
    FULL_NAME_REGEX.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}

/// A gender option counts as selected when its value is non-empty
pub fn is_selected(value: &str) -> bool {
    !value.is_empty()
}

/// Exact, case- and whitespace-sensitive comparison; an empty confirmation never matches
pub fn passwords_match(confirm: &str, password: &str) -> bool {
    !confirm.is_empty() && confirm == password
}

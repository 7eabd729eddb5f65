//! Numeric validation functions

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;

/// Checks `min <= value <= max`
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Parses the leading base-10 integer of `s`.
///
/// Leading whitespace and one `+`/`-` sign are accepted, then the longest run
/// of ASCII digits is read and the rest ignored: `"25abc"` gives 25,
/// `"18.9"` gives 18. Returns `None` when no digit follows. Values too large
/// for `i64` saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for digit in run {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen.then(|| if negative { -value } else { value })
}

/// Age is valid when its leading integer lies in 18..=100
pub fn is_valid_age(age: &str) -> bool {
    parse_leading_int(age).is_some_and(|n| in_range(n, MIN_AGE, MAX_AGE))
}

pub mod check;
pub mod field;
pub mod strength;

use colored::{ColoredString, Colorize};
use regform::{FieldFeedback, Validity};

/// Status glyph colored like the form's success/error tokens
pub(crate) fn glyph(feedback: &FieldFeedback) -> ColoredString {
    match feedback.validity {
        Validity::Valid => feedback.glyph.green().bold(),
        Validity::Invalid => feedback.glyph.red().bold(),
        Validity::Unknown => feedback.glyph.normal(),
    }
}

/// One report line: glyph, field id, and the failure message if any
pub(crate) fn feedback_line(feedback: &FieldFeedback) -> String {
    let message = feedback.message.unwrap_or_default();
    format!(
        "{} {:<16} {}",
        glyph(feedback),
        feedback.field.as_str(),
        message.dimmed()
    )
    .trim_end()
    .to_string()
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

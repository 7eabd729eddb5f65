use crate::commands::{feedback_line, print_json};
use crate::config::OutputFormat;
use anyhow::Result;
use regform::{controller, FieldFeedback, FieldId, RuleContext};

/// Returns whether the value passes the field's rule
pub fn run(
    field: FieldId,
    value: &str,
    password: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    if field == FieldId::ConfirmPassword && password.is_none() {
        tracing::warn!(
            "no --password given; confirmPassword is compared against an empty password"
        );
    }

    let ctx = RuleContext { password };
    let result = controller::validate_field(field, value, &ctx);
    let feedback = FieldFeedback::for_result(field, &result);

    match format {
        OutputFormat::Text => println!("{}", feedback_line(&feedback)),
        OutputFormat::Json => print_json(&feedback)?,
    }

    Ok(result.valid)
}

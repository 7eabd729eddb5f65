use crate::commands::{feedback_line, print_json};
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use regform::controller::{self, FormValidation};
use regform::{FieldFeedback, FormValues};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads form values as JSON from `file`, or stdin when `None`
pub fn read_values(file: Option<&Path>) -> Result<FormValues> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read form values: {:?}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read form values from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Form values must be a JSON object keyed by field id")
}

pub fn render(validation: &FormValidation) -> String {
    let mut lines: Vec<String> = validation
        .per_field
        .iter()
        .map(|(field, result)| feedback_line(&FieldFeedback::for_result(*field, result)))
        .collect();

    let failed = validation.failures().count();
    lines.push(String::new());
    lines.push(if validation.all_valid {
        "Form accepted".green().bold().to_string()
    } else {
        format!("Form rejected: {} of {} fields invalid", failed, validation.per_field.len())
            .red()
            .bold()
            .to_string()
    });

    lines.join("\n")
}

/// Returns whether the submission was accepted
pub fn run(file: Option<&Path>, format: OutputFormat) -> Result<bool> {
    let values = read_values(file)?;
    let validation = controller::validate_all(&values);

    match format {
        OutputFormat::Text => println!("{}", render(&validation)),
        OutputFormat::Json => print_json(&validation)?,
    }

    Ok(validation.all_valid)
}

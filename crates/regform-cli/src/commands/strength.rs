use crate::commands::print_json;
use crate::config::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use regform::strength::MAX_SCORE;
use regform::{StrengthLabel, StrengthMeter};

const BAR_WIDTH: usize = 20;

fn paint(text: String, label: StrengthLabel) -> String {
    match label {
        StrengthLabel::VeryWeak => text.red().to_string(),
        StrengthLabel::Weak => text.bright_red().to_string(),
        StrengthLabel::Fair => text.yellow().to_string(),
        StrengthLabel::Strong => text.bright_green().to_string(),
        StrengthLabel::VeryStrong => text.green().to_string(),
    }
}

pub fn render(meter: Option<&StrengthMeter>) -> String {
    let Some(meter) = meter else {
        return "(empty password: meter hidden)".to_string();
    };

    let filled = BAR_WIDTH * usize::from(meter.percent) / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    format!(
        "{} {:>3}%  {} (score {}/{})",
        paint(bar, meter.label),
        meter.percent,
        paint(meter.text.to_string(), meter.label),
        meter.score,
        MAX_SCORE
    )
}

pub fn run(password: &str, format: OutputFormat) -> Result<()> {
    let meter = StrengthMeter::for_password(password);

    match format {
        OutputFormat::Text => println!("{}", render(meter.as_ref())),
        OutputFormat::Json => print_json(&meter)?,
    }

    Ok(())
}

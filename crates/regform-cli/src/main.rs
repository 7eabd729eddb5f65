mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};
use regform::FieldId;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "Check registration form values against the signup rules", long_about = None)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, default_value = "regform.toml")]
    config: PathBuf,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a whole submission given as a JSON object of field values
    Check {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Live-validate one field
    Field {
        /// Field id: fullName, email, mobile, age, gender, password, confirmPassword
        field: FieldId,

        /// Raw field value
        value: String,

        /// Current password, needed for confirmPassword
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Score a password for the strength meter
    Strength {
        /// Password to score
        password: String,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("REGFORM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    init_tracing(&config);

    if !config.output.color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let format = cli.format.unwrap_or(config.output.format);
    tracing::debug!(?format, config = ?cli.config, "starting");

    match cli.command {
        Commands::Check { file } => {
            let accepted = commands::check::run(file.as_deref(), format)?;
            Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Field {
            field,
            value,
            password,
        } => {
            let valid = commands::field::run(field, &value, password.as_deref(), format)?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Strength { password } => {
            commands::strength::run(&password, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

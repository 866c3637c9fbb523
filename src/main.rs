//! `console-log`: emit one colored log line from the command line.

use std::process::ExitCode;

use clap::Parser;

use console_logger::{observability, Logger, LoggerError};

#[derive(Parser)]
#[command(name = "console-log")]
#[command(about = "Print a leveled, color-coded log line to stdout", long_about = None)]
struct Cli {
    /// Application name shown on the line
    #[arg(long, default_value = "app")]
    app: String,

    /// Application version shown on the line
    #[arg(long, default_value = "0.1.0")]
    app_version: String,

    /// Suppress a severity (repeatable)
    #[arg(long = "disable-type", value_name = "SEVERITY")]
    disable_types: Vec<String>,

    /// Turn the logger off before logging
    #[arg(long)]
    disabled: bool,

    /// Emit the initialization line first
    #[arg(long)]
    init: bool,

    /// Print the final logger state as JSON on stderr
    #[arg(long)]
    show_config: bool,

    /// info, debug, warning, success, error or critical
    severity: String,

    code: String,

    action: String,

    message: String,
}

fn main() -> ExitCode {
    observability::logging::init("warn");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ LoggerError::UnknownSeverity(_)) => {
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), LoggerError> {
    let mut logger = Logger::new(cli.app.as_str(), cli.app_version.as_str());

    for name in &cli.disable_types {
        logger.disable_type_name(name);
    }
    if cli.disabled {
        logger.disable();
    }
    if cli.init {
        logger.initialize(cli.app.as_str(), cli.app_version.as_str())?;
    }

    logger.custom_log(&cli.severity, &cli.code, &cli.action, &cli.message)?;

    if cli.show_config {
        match serde_json::to_string_pretty(&logger.config()) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize logger state"),
        }
    }

    Ok(())
}

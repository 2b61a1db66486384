//! CLI entry point: parses arguments, initialises logging and runs the sweep.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use graphgen::cli::{Cli, run_cli};
use graphgen::logging::{self, LoggingError};

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_cli(&cli).context("failed to generate graphs")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let message = format!("{err:#}");
        error!(error = %message, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

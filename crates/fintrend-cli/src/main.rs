mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    if !init_tracing(cli.verbose) {
        eprintln!("warning: a tracing subscriber is already installed; keeping it");
    }

    commands::run(&cli).await?;
    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr so stdout stays parseable with `--format json`.
///
/// Returns `false` when a global subscriber was already set.
#[must_use]
fn init_tracing(verbose: bool) -> bool {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_tracing_init_reports_existing_subscriber() {
        let _first = init_tracing(false);
        assert!(!init_tracing(true));
    }
}

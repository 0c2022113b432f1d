mod show;
mod watch;

use fintrend_core::{DashboardConfig, FinancialsClient, ValidationError};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = build_config(cli)?;
    let client = FinancialsClient::from_config(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Show(args) => show::run(args, client, &mut out, cli.format, cli.pretty).await,
        Command::Watch => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            watch::run(client, stdin, &mut out, cli.format, cli.pretty)
                .await
                .map(|_| ())
        }
    }
}

/// Environment first, then command-line flags.
fn build_config(cli: &Cli) -> Result<DashboardConfig, ValidationError> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(api_base) = &cli.api_base {
        config = config.with_api_base(api_base)?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    Ok(config)
}

//! CLI argument definitions for fintrend.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `show` | Render the dashboard once for the given tickers |
//! | `watch` | Re-render for every ticker list read from stdin |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--api-base` | `$FINTREND_API_BASE` or `http://127.0.0.1:8002` | Financials API base URL |
//! | `--timeout-ms` | `$FINTREND_TIMEOUT_MS` or `3000` | Request timeout in ms |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! fintrend show AAPL
//! fintrend show AAPL,MSFT GOOGL --format json --pretty
//! printf 'AAPL\nAAPL,MSFT\n' | fintrend watch
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Quarterly financial metrics dashboard for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "fintrend",
    author,
    version,
    about = "Quarterly financial metrics dashboard",
    long_about = "Fetches quarterly EBITDA, revenue and net income for one or more tickers \
from the financials API and renders trend charts, a delta table and summary cards.\n\
\n\
One ticker with data renders a single-company analysis. Several render a comparison."
)]
pub struct Cli {
    /// Output format for the rendered dashboard.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Financials API base URL.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log pipeline steps to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Charts, cards and tables drawn as text.
    Table,
    /// The dashboard frame as a JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the dashboard once.
    ///
    /// Tickers may be given as separate arguments or comma-separated.
    ///
    /// # Examples
    ///
    ///   fintrend show AAPL
    ///   fintrend show AAPL,MSFT,GOOGL
    Show(ShowArgs),

    /// Re-render for each ticker list read from stdin, one per line.
    ///
    /// Errors are reported and the loop continues with the next line.
    Watch,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// One or more tickers (e.g., AAPL MSFT or AAPL,MSFT).
    #[arg(required = true, num_args = 1..)]
    pub tickers: Vec<String>,
}

impl ShowArgs {
    /// Arguments joined into the comma-separated form the dashboard parses.
    pub fn ticker_input(&self) -> String {
        self.tickers.join(",")
    }
}

//! Long-lived dashboard driven by ticker lists on stdin.
//!
//! The same dashboard, and therefore the same chart registry, serves every
//! line, so widgets are replaced rather than accumulated across refreshes.

use std::io::Write;

use fintrend_core::{Dashboard, FinancialsClient, FrameSurface};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchReport {
    pub rendered: usize,
    pub failed: usize,
}

pub async fn run(
    client: FinancialsClient,
    input: impl AsyncBufRead + Unpin,
    out: &mut impl Write,
    format: OutputFormat,
    pretty: bool,
) -> Result<WatchReport, CliError> {
    let mut dashboard = Dashboard::new(client, FrameSurface::new());
    let mut report = WatchReport::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        match dashboard.run_cycle(&line).await {
            Ok(outcome) => {
                debug!(?outcome, "watch cycle rendered");
                report.rendered += 1;
                output::render_to(out, &dashboard.surface().snapshot(), format, pretty)?;
            }
            Err(error) => {
                debug!(code = error.code(), "watch cycle failed");
                report.failed += 1;
                writeln!(
                    out,
                    "status: {}",
                    output::status_line(dashboard.surface().status())
                )?;
            }
        }
        out.flush()?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fintrend_core::{DashboardConfig, MockHttpClient};

    use super::*;

    #[tokio::test]
    async fn errors_do_not_stop_the_loop() {
        let http = Arc::new(MockHttpClient::json(
            r#"[{"ticker": "AAPL", "revenue_last_4": [10, 9]}]"#,
        ));
        let client = FinancialsClient::new(http.clone(), &DashboardConfig::default());
        let input: &[u8] = b"AAPL\n , \nAAPL\n";
        let mut buffer = Vec::new();

        let report = run(client, input, &mut buffer, OutputFormat::Table, false)
            .await
            .expect("watch completes");

        assert_eq!(report, WatchReport { rendered: 2, failed: 1 });
        assert_eq!(http.request_count(), 2);
        let text = String::from_utf8(buffer).expect("utf-8");
        assert!(text.contains("status: error [input.invalid]"));
    }
}

use std::io::Write;

use fintrend_core::{Dashboard, FinancialsClient, FrameSurface};

use crate::cli::{OutputFormat, ShowArgs};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &ShowArgs,
    client: FinancialsClient,
    out: &mut impl Write,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let mut dashboard = Dashboard::new(client, FrameSurface::new());
    dashboard.run_cycle(&args.ticker_input()).await?;

    output::render_to(out, &dashboard.surface().snapshot(), format, pretty)?;
    out.flush()?;
    Ok(())
}

mod text;

use std::io::Write;

use fintrend_core::DashboardFrame;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub use self::text::{frame_to_text, status_line};

#[derive(Debug, Serialize)]
struct FrameDocument<'a> {
    generated_at: String,
    frame: &'a DashboardFrame,
}

pub fn render_to(
    out: &mut impl Write,
    frame: &DashboardFrame,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let document = FrameDocument {
                generated_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
                frame,
            };
            let payload = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => {
            write!(out, "{}", frame_to_text(frame))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fintrend_core::{DashboardSurface, FrameSurface, Status};
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_output_wraps_frame_with_timestamp() {
        let mut surface = FrameSurface::new();
        surface.show_status(&Status::Ready {
            tickers: vec![String::from("AAPL")],
        });

        let mut buffer = Vec::new();
        render_to(&mut buffer, &surface.snapshot(), OutputFormat::Json, false)
            .expect("render succeeds");

        let document: Value = serde_json::from_slice(&buffer).expect("valid json");
        assert!(document["generated_at"].as_str().is_some_and(|ts| ts.contains('T')));
        assert_eq!(document["frame"]["status"]["state"], "ready");
        assert_eq!(document["frame"]["charts"], Value::Array(Vec::new()));
    }
}

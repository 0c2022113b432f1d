//! Plain-text rendering of a dashboard frame.

use fintrend_core::{
    DashboardFrame, MetricCard, MountedChart, Status, SummaryView, TableRow, TableView,
};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn frame_to_text(frame: &DashboardFrame) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &frame.title {
        lines.push(format!("== {title} =="));
    }
    lines.push(format!("status: {}", status_line(&frame.status)));

    if let Some(summary) = &frame.summary {
        lines.push(String::new());
        push_summary(&mut lines, summary);
    }

    for chart in &frame.charts {
        lines.push(String::new());
        push_chart(&mut lines, chart);
    }

    if let Some(table) = &frame.table {
        lines.push(String::new());
        push_table(&mut lines, table);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn status_line(status: &Status) -> String {
    match status {
        Status::Idle => String::from("idle"),
        Status::Loading { tickers } => format!("loading {}", tickers.join(", ")),
        Status::Ready { tickers } => format!("ready ({})", tickers.join(", ")),
        Status::Error { code, message } => format!("error [{code}]: {message}"),
    }
}

/// One block per value, scaled between the smallest and largest present value.
/// Gaps render as spaces.
pub fn sparkline(values: &[Option<f64>]) -> String {
    let present = values.iter().flatten().copied();
    let min = present.clone().fold(f64::INFINITY, f64::min);
    let max = present.fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|value| match value {
            None => ' ',
            Some(_) if range <= 0.0 => BLOCKS[BLOCKS.len() / 2 - 1],
            Some(value) => {
                let scaled = (value - min) / range * (BLOCKS.len() - 1) as f64;
                BLOCKS[(scaled.round() as usize).min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}

fn push_summary(lines: &mut Vec<String>, summary: &SummaryView) {
    match summary {
        SummaryView::Single { ticker, cards } => {
            lines.push(format!("Summary: {ticker}"));
            for card in cards {
                lines.push(format!("  {}", card_line(card)));
            }
        }
        SummaryView::Comparison { companies } => {
            lines.push(String::from("Summary"));
            for company in companies {
                lines.push(format!(
                    "  {:<8} {}",
                    company.ticker,
                    card_line(&company.headline)
                ));
            }
        }
    }
}

fn card_line(card: &MetricCard) -> String {
    format!(
        "{:<10} current {:>12}  growth {:>9}  avg {:>12}  ({} quarters)",
        card.metric.display_name(),
        optional(card.current),
        signed_pct(card.growth_pct),
        number(card.average),
        card.quarters
    )
}

fn push_chart(lines: &mut Vec<String>, chart: &MountedChart) {
    lines.push(format!("{} [{}]", chart.spec.title, chart.mount_id));
    let labels: Vec<&str> = chart.spec.labels.iter().map(|label| label.as_str()).collect();
    lines.push(format!("  periods: {}", labels.join(" ")));
    for dataset in &chart.spec.datasets {
        let values: Vec<String> = dataset.values.iter().copied().map(optional).collect();
        lines.push(format!(
            "  {:<20} {} {}  {}",
            dataset.label,
            dataset.color,
            sparkline(&dataset.values),
            values.join(" ")
        ));
    }
}

fn push_table(lines: &mut Vec<String>, table: &TableView) {
    lines.push(format!("Table: {}", table.title));
    for section in &table.sections {
        lines.push(format!("  {}", section.metric.display_name()));
        lines.push(format!(
            "    {:<6} {:>14} {:>14} {:>9}",
            "Period", "Value", "Change", "Change %"
        ));
        for row in &section.rows {
            match row {
                TableRow::NoData => lines.push(String::from("    No data available")),
                TableRow::Period(row) => lines.push(format!(
                    "    {:<6} {:>14} {:>14} {:>9} {}",
                    row.period.as_str(),
                    optional(row.value),
                    row.delta.map_or_else(|| String::from("-"), signed),
                    signed_pct(row.delta_pct),
                    row.trend.arrow()
                )),
            }
        }
    }
}

fn number(value: f64) -> String {
    format!("{value:.2}")
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), number)
}

fn signed(value: f64) -> String {
    format!("{value:+.2}")
}

fn signed_pct(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |pct| format!("{pct:+.2}%"))
}

#[cfg(test)]
mod tests {
    use fintrend_core::{
        select_and_render, ChartRegistry, FinancialRecord, FrameSurface, Metric,
    };

    use super::*;

    #[test]
    fn sparkline_scales_and_keeps_gaps() {
        assert_eq!(sparkline(&[None, Some(0.0), Some(7.0)]), " ▁█");
        assert_eq!(sparkline(&[Some(3.0), Some(3.0)]), "▄▄");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn single_company_frame_lists_charts_and_deltas() {
        let mut surface = FrameSurface::new();
        let mut registry = ChartRegistry::new();
        let records = [FinancialRecord::new("AAPL")
            .with_series(Metric::Ebitda, vec![500.0, 480.0, 450.0, 400.0])];
        select_and_render(&records, &mut registry, &mut surface).expect("rendered");

        let text = frame_to_text(&surface.snapshot());

        assert!(text.starts_with("== AAPL Analysis =="));
        assert!(text.contains("Quarterly EBITDA Trend [ebitdaChart]"));
        assert!(text.contains("#667eea"));
        assert!(text.contains("+50.00"));
        assert!(text.contains("↗"));
        assert!(text.contains("No data available"));
    }

    #[test]
    fn gap_quarter_shows_a_dash_without_change() {
        let mut surface = FrameSurface::new();
        let mut registry = ChartRegistry::new();
        let records = [FinancialRecord::new("AAPL").with_series(
            Metric::Ebitda,
            vec![Some(500.0), None, Some(450.0), Some(400.0)],
        )];
        select_and_render(&records, &mut registry, &mut surface).expect("rendered");

        let text = frame_to_text(&surface.snapshot());

        assert!(text.contains("400.00 450.00 - 500.00"));
        let gap_row = text
            .lines()
            .find(|line| line.trim_start().starts_with("Q3"))
            .expect("Q3 row");
        assert!(!gap_row.contains('+'));
        assert!(text.contains("+50.00"));
    }

    #[test]
    fn error_status_shows_code() {
        let status = Status::Error {
            code: "data.none",
            message: String::from("no financial data found for XXXX"),
        };
        assert_eq!(
            status_line(&status),
            "error [data.none]: no financial data found for XXXX"
        );
    }
}

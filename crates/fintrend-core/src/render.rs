//! Render-mode selection and the single/multi renderers.

use serde::Serialize;
use tracing::debug;

use crate::chart::{palette_color, ChartRegistry, ComparisonDataset, RenderPass};
use crate::domain::{align, FinancialRecord, Metric};
use crate::error::DashboardError;
use crate::summary::SummaryView;
use crate::surface::DashboardSurface;
use crate::table::{build_delta_table, TableSection, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Single,
    Multi,
}

/// What a render cycle will draw, decided once from the valid records.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan<'a> {
    Single(&'a FinancialRecord),
    Multi(Vec<&'a FinancialRecord>),
}

impl<'a> RenderPlan<'a> {
    /// `None` when no record has any data.
    pub fn select(records: &'a [FinancialRecord]) -> Option<Self> {
        let mut valid: Vec<&FinancialRecord> = records
            .iter()
            .filter(|record| record.is_renderable())
            .collect();

        match valid.len() {
            0 => None,
            1 => valid.pop().map(Self::Single),
            _ => Some(Self::Multi(valid)),
        }
    }

    pub const fn mode(&self) -> RenderMode {
        match self {
            Self::Single(_) => RenderMode::Single,
            Self::Multi(_) => RenderMode::Multi,
        }
    }

    pub fn tickers(&self) -> Vec<String> {
        match self {
            Self::Single(record) => vec![record.ticker.clone()],
            Self::Multi(records) => records.iter().map(|record| record.ticker.clone()).collect(),
        }
    }
}

/// Draw `plan` through an open render pass.
pub fn render_plan<S: DashboardSurface>(plan: &RenderPlan<'_>, pass: &mut RenderPass<'_, S>) {
    match plan {
        RenderPlan::Single(record) => render_single(record, pass),
        RenderPlan::Multi(records) => render_multi(records, pass),
    }
}

/// Select a plan and render it. Charts are only touched when there is data.
pub fn select_and_render<S: DashboardSurface>(
    records: &[FinancialRecord],
    registry: &mut ChartRegistry<S::Widget>,
    surface: &mut S,
) -> Result<RenderMode, DashboardError> {
    let Some(plan) = RenderPlan::select(records) else {
        return Err(DashboardError::NoData {
            tickers: records
                .iter()
                .filter(|record| !record.ticker.is_empty())
                .map(|record| record.ticker.clone())
                .collect(),
        });
    };

    let mut pass = registry.begin_pass(surface);
    render_plan(&plan, &mut pass);
    debug!(mode = ?plan.mode(), charts = pass.created(), "render pass complete");
    Ok(plan.mode())
}

fn render_single<S: DashboardSurface>(record: &FinancialRecord, pass: &mut RenderPass<'_, S>) {
    let title = format!("{} Analysis", record.ticker);
    let mut sections = Vec::with_capacity(Metric::ALL.len());

    for metric in Metric::ALL {
        let aligned = align(record.series(metric));
        let label = format!("{} {}", record.ticker, metric);
        pass.render_line_chart(metric.slot(), &aligned, &label, palette_color(0));
        sections.push(TableSection {
            metric,
            rows: build_delta_table(&aligned),
        });
    }

    pass.show_table(Some(&TableView {
        title: title.clone(),
        sections,
    }));
    pass.show_summary(&SummaryView::single(record));
    pass.show_title(&title);
}

fn render_multi<S: DashboardSurface>(records: &[&FinancialRecord], pass: &mut RenderPass<'_, S>) {
    for metric in Metric::ALL {
        let datasets: Vec<ComparisonDataset> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                ComparisonDataset::new(index, record.ticker.clone(), align(record.series(metric)))
            })
            .filter(|dataset| dataset.series.has_values())
            .collect();
        pass.render_comparison_chart(metric.slot(), &datasets);
    }

    let tickers: Vec<&str> = records.iter().map(|record| record.ticker.as_str()).collect();
    pass.show_table(None);
    pass.show_summary(&SummaryView::comparison(records.iter().copied()));
    pass.show_title(&format!(
        "Multi-Company Comparison ({})",
        tickers.join(", ")
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartKind, ChartSlot, PALETTE};
    use crate::surface::FrameSurface;
    use crate::table::TableRow;

    fn record(ticker: &str, ebitda: Vec<f64>) -> FinancialRecord {
        FinancialRecord::new(ticker).with_series(Metric::Ebitda, ebitda)
    }

    #[test]
    fn selects_by_number_of_valid_records() {
        let empty = [FinancialRecord::new("XXXX")];
        assert!(RenderPlan::select(&empty).is_none());

        let one = [record("AAPL", vec![1.0]), FinancialRecord::new("XXXX")];
        assert_eq!(
            RenderPlan::select(&one).map(|plan| plan.mode()),
            Some(RenderMode::Single)
        );

        let two = [record("AAPL", vec![1.0]), record("MSFT", vec![2.0])];
        let plan = RenderPlan::select(&two).expect("plan");
        assert_eq!(plan.mode(), RenderMode::Multi);
        assert_eq!(plan.tickers(), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn single_mode_fills_charts_table_and_title() {
        let mut surface = FrameSurface::new();
        let mut registry = ChartRegistry::new();
        let records = [record("AAPL", vec![500.0, 480.0, 450.0, 400.0])];

        let mode = select_and_render(&records, &mut registry, &mut surface).expect("rendered");

        assert_eq!(mode, RenderMode::Single);
        assert_eq!(registry.live_slots(), vec![ChartSlot::Ebitda]);
        let chart = surface.chart(ChartSlot::Ebitda).expect("ebitda chart");
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.datasets[0].label, "AAPL EBITDA");
        assert_eq!(chart.datasets[0].color, PALETTE[0]);

        let table = surface.table().expect("table");
        assert_eq!(table.sections.len(), 3);
        assert_eq!(table.sections[1].rows, vec![TableRow::NoData]);
        assert_eq!(surface.title(), Some("AAPL Analysis"));
    }

    #[test]
    fn multi_mode_clears_table_and_keeps_entity_colors() {
        let mut surface = FrameSurface::new();
        let mut registry = ChartRegistry::new();
        let records = [
            record("AAPL", vec![1.0, 2.0]),
            FinancialRecord::new("MSFT").with_series(Metric::Revenue, vec![5.0]),
            record("GOOGL", vec![3.0]),
        ];

        select_and_render(&records, &mut registry, &mut surface).expect("rendered");

        let ebitda = surface.chart(ChartSlot::Ebitda).expect("ebitda chart");
        let labels: Vec<&str> = ebitda.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["AAPL", "GOOGL"]);
        assert_eq!(ebitda.datasets[1].color, PALETTE[2]);

        let revenue = surface.chart(ChartSlot::Revenue).expect("revenue chart");
        assert_eq!(revenue.datasets[0].color, PALETTE[1]);
        assert!(surface.chart(ChartSlot::NetIncome).is_none());
        assert!(surface.table().is_none());
        assert_eq!(
            surface.title(),
            Some("Multi-Company Comparison (AAPL, MSFT, GOOGL)")
        );
    }

    #[test]
    fn no_data_leaves_surface_untouched() {
        let mut surface = FrameSurface::new();
        let mut registry = ChartRegistry::new();

        let error = select_and_render(&[FinancialRecord::new("XXXX")], &mut registry, &mut surface)
            .expect_err("no data");

        assert!(matches!(error, DashboardError::NoData { ref tickers } if tickers == &["XXXX"]));
        assert_eq!(registry.passes(), 0);
        assert!(surface.events().is_empty());
    }
}

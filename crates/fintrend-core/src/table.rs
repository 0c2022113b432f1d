//! Period-over-period delta table.

use serde::Serialize;

use crate::domain::{AlignedSeries, Metric, PeriodLabel};

/// Direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    None,
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_delta(delta: Option<f64>) -> Self {
        match delta {
            None => Self::None,
            Some(delta) if delta > 0.0 => Self::Up,
            Some(delta) if delta < 0.0 => Self::Down,
            Some(_) => Self::Flat,
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Flat => "→",
        }
    }
}

/// One period of the delta table. `value` is `None` for a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRow {
    pub period: PeriodLabel,
    pub value: Option<f64>,
    pub delta: Option<f64>,
    pub delta_pct: Option<f64>,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum TableRow {
    Period(PeriodRow),
    /// Placeholder keeping the table region visible when a series is empty.
    NoData,
}

impl TableRow {
    pub fn as_period(&self) -> Option<&PeriodRow> {
        match self {
            Self::Period(row) => Some(row),
            Self::NoData => None,
        }
    }
}

/// Build the delta table for an oldest-first series.
///
/// Changes are only computed between adjacent reported quarters; a row next to
/// a gap has no delta.
pub fn build_delta_table(series: &AlignedSeries) -> Vec<TableRow> {
    if !series.has_values() {
        return vec![TableRow::NoData];
    }

    let mut previous: Option<f64> = None;
    series
        .points()
        .map(|(period, value)| {
            let pair = value.zip(previous);
            let delta = pair.map(|(current, prior)| current - prior);
            let delta_pct = pair
                .filter(|(_, prior)| *prior != 0.0)
                .map(|(current, prior)| (current - prior) / prior.abs() * 100.0);
            previous = value;
            TableRow::Period(PeriodRow {
                period,
                value,
                delta,
                delta_pct,
                trend: Trend::from_delta(delta),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSection {
    pub metric: Metric,
    pub rows: Vec<TableRow>,
}

/// Content of the table mount point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub sections: Vec<TableSection>,
}

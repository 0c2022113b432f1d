use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Most periods a series can carry.
pub const MAX_PERIODS: usize = 4;

static LABELS: [PeriodLabel; MAX_PERIODS] = PeriodLabel::CANONICAL;

/// Quarter label on the chart x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeriodLabel {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl PeriodLabel {
    pub const CANONICAL: [PeriodLabel; MAX_PERIODS] = [
        PeriodLabel::Q1,
        PeriodLabel::Q2,
        PeriodLabel::Q3,
        PeriodLabel::Q4,
    ];

    /// The last `len` canonical labels, so the newest point always lands on `Q4`.
    pub fn trailing(len: usize) -> &'static [PeriodLabel] {
        let len = len.min(MAX_PERIODS);
        &LABELS[MAX_PERIODS - len..]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl Display for PeriodLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Oldest-first series with one period label per value. `None` is a gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignedSeries {
    values: Vec<Option<f64>>,
    labels: Vec<PeriodLabel>,
}

impl AlignedSeries {
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn labels(&self) -> &[PeriodLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether any period carries a value.
    pub fn has_values(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }

    /// Iterate `(label, value)` pairs oldest-first.
    pub fn points(&self) -> impl Iterator<Item = (PeriodLabel, Option<f64>)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }

    /// Restore the newest-first order the series was aligned from.
    pub fn to_newest_first(&self) -> Vec<Option<f64>> {
        self.values.iter().rev().copied().collect()
    }
}

/// Align a newest-first series for chronological display.
///
/// Inputs longer than four periods keep only the four newest. Labels assume the
/// newest value is the latest calendar quarter. Gaps keep their quarter.
pub fn align(series: &[Option<f64>]) -> AlignedSeries {
    let values: Vec<Option<f64>> = series.iter().take(MAX_PERIODS).rev().copied().collect();
    let labels = PeriodLabel::trailing(values.len()).to_vec();
    AlignedSeries { values, labels }
}

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::chart::ChartSlot;

/// Quarterly metric carried by a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Ebitda,
    Revenue,
    NetIncome,
}

impl Metric {
    /// Canonical display order.
    pub const ALL: [Metric; 3] = [Metric::Ebitda, Metric::Revenue, Metric::NetIncome];

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ebitda => "EBITDA",
            Self::Revenue => "Revenue",
            Self::NetIncome => "Net Income",
        }
    }

    /// Field name used by the batch endpoint.
    pub const fn wire_key(self) -> &'static str {
        match self {
            Self::Ebitda => "ebitda_last_4",
            Self::Revenue => "revenue_last_4",
            Self::NetIncome => "net_income_last_4",
        }
    }

    /// camelCase spelling accepted as a fallback.
    pub const fn alias_key(self) -> &'static str {
        match self {
            Self::Ebitda => "ebitdaLast4",
            Self::Revenue => "revenueLast4",
            Self::NetIncome => "netIncomeLast4",
        }
    }

    pub const fn slot(self) -> ChartSlot {
        match self {
            Self::Ebitda => ChartSlot::Ebitda,
            Self::Revenue => ChartSlot::Revenue,
            Self::NetIncome => ChartSlot::NetIncome,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Canonical per-ticker record. Every sequence is newest-first.
///
/// A `None` element is a quarter the API reported without a usable number. It keeps
/// its position so older values stay on their own quarter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub ticker: String,
    pub ebitda_last4: Vec<Option<f64>>,
    pub revenue_last4: Vec<Option<f64>>,
    pub net_income_last4: Vec<Option<f64>>,
}

impl FinancialRecord {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    pub fn with_series<V: Into<Option<f64>>>(
        mut self,
        metric: Metric,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        *self.series_mut(metric) = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn series(&self, metric: Metric) -> &[Option<f64>] {
        match metric {
            Metric::Ebitda => &self.ebitda_last4,
            Metric::Revenue => &self.revenue_last4,
            Metric::NetIncome => &self.net_income_last4,
        }
    }

    pub fn series_mut(&mut self, metric: Metric) -> &mut Vec<Option<f64>> {
        match metric {
            Metric::Ebitda => &mut self.ebitda_last4,
            Metric::Revenue => &mut self.revenue_last4,
            Metric::NetIncome => &mut self.net_income_last4,
        }
    }

    /// Whether `metric` has at least one reported value.
    pub fn has_data(&self, metric: Metric) -> bool {
        self.series(metric).iter().any(Option::is_some)
    }

    /// A record is renderable when at least one metric has data.
    pub fn is_renderable(&self) -> bool {
        Metric::ALL.iter().any(|metric| self.has_data(*metric))
    }
}

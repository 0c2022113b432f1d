//! Headline cards shown above the charts.

use serde::Serialize;

use crate::domain::{FinancialRecord, Metric, MAX_PERIODS};

/// `current` and `previous` are the two newest quarters and may be gaps.
/// `average` and `quarters` cover the reported values only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub metric: Metric,
    pub current: Option<f64>,
    pub previous: Option<f64>,
    pub growth_pct: Option<f64>,
    pub average: f64,
    pub quarters: usize,
}

impl MetricCard {
    /// Summarize a newest-first series. `None` when no quarter has a value.
    pub fn from_series(metric: Metric, newest_first: &[Option<f64>]) -> Option<Self> {
        let window = &newest_first[..newest_first.len().min(MAX_PERIODS)];
        let reported: Vec<f64> = window.iter().flatten().copied().collect();
        if reported.is_empty() {
            return None;
        }

        let current = window.first().copied().flatten();
        let previous = window.get(1).copied().flatten();
        let growth_pct = current
            .zip(previous)
            .filter(|(_, prior)| *prior != 0.0)
            .map(|(current, prior)| (current - prior) / prior.abs() * 100.0);
        let average = reported.iter().sum::<f64>() / reported.len() as f64;

        Some(Self {
            metric,
            current,
            previous,
            growth_pct,
            average,
            quarters: reported.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyCard {
    pub ticker: String,
    pub headline: MetricCard,
}

impl CompanyCard {
    /// Card for the first metric, in canonical order, that has data.
    pub fn for_record(record: &FinancialRecord) -> Option<Self> {
        Metric::ALL.iter().find_map(|metric| {
            MetricCard::from_series(*metric, record.series(*metric)).map(|headline| Self {
                ticker: record.ticker.clone(),
                headline,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SummaryView {
    Single {
        ticker: String,
        cards: Vec<MetricCard>,
    },
    Comparison {
        companies: Vec<CompanyCard>,
    },
}

impl SummaryView {
    pub fn single(record: &FinancialRecord) -> Self {
        let cards = Metric::ALL
            .iter()
            .filter_map(|metric| MetricCard::from_series(*metric, record.series(*metric)))
            .collect();
        Self::Single {
            ticker: record.ticker.clone(),
            cards,
        }
    }

    pub fn comparison<'a>(records: impl IntoIterator<Item = &'a FinancialRecord>) -> Self {
        Self::Comparison {
            companies: records
                .into_iter()
                .filter_map(CompanyCard::for_record)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_reports_growth_against_previous_quarter() {
        let card = MetricCard::from_series(
            Metric::Ebitda,
            &[Some(500.0), Some(400.0), Some(300.0), Some(200.0)],
        )
        .expect("card");
        assert_eq!(card.current, Some(500.0));
        assert_eq!(card.previous, Some(400.0));
        assert_eq!(card.growth_pct, Some(25.0));
        assert_eq!(card.average, 350.0);
        assert_eq!(card.quarters, 4);
    }

    #[test]
    fn single_value_has_no_growth() {
        let card = MetricCard::from_series(Metric::Revenue, &[Some(10.0)]).expect("card");
        assert_eq!(card.growth_pct, None);
        assert!(MetricCard::from_series(Metric::Revenue, &[]).is_none());
        assert!(MetricCard::from_series(Metric::Revenue, &[None]).is_none());
    }

    #[test]
    fn gap_in_previous_quarter_suppresses_growth() {
        let card = MetricCard::from_series(Metric::Ebitda, &[Some(500.0), None, Some(300.0)])
            .expect("card");
        assert_eq!(card.previous, None);
        assert_eq!(card.growth_pct, None);
        assert_eq!(card.average, 400.0);
        assert_eq!(card.quarters, 2);
    }

    #[test]
    fn company_card_falls_back_to_first_metric_with_data() {
        let record = FinancialRecord::new("NFLX").with_series(Metric::NetIncome, vec![3.0, 2.0]);
        let card = CompanyCard::for_record(&record).expect("card");
        assert_eq!(card.headline.metric, Metric::NetIncome);
        assert_eq!(card.ticker, "NFLX");
    }
}

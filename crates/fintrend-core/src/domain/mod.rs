//! # Domain Models
//!
//! Canonical types flowing through the dashboard pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Normalized stock ticker |
//! | [`TickerList`] | Parsed, duplicate-free ticker input |
//! | [`Metric`] | EBITDA, revenue or net income |
//! | [`FinancialRecord`] | Newest-first metric sequences for one ticker |
//! | [`AlignedSeries`] | Oldest-first series with quarter labels |
//! | [`PeriodLabel`] | `Q1`..`Q4` |
//!
//! ```rust
//! use fintrend_core::domain::{align, PeriodLabel};
//!
//! let aligned = align(&[Some(120.0), None, Some(100.0)]);
//! assert_eq!(aligned.values(), &[Some(100.0), None, Some(120.0)]);
//! assert_eq!(aligned.labels(), &[PeriodLabel::Q2, PeriodLabel::Q3, PeriodLabel::Q4]);
//! ```

mod record;
mod series;
mod ticker;

pub use record::{FinancialRecord, Metric};
pub use series::{align, AlignedSeries, PeriodLabel, MAX_PERIODS};
pub use ticker::{Ticker, TickerList};

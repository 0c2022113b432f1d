use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Normalized stock ticker.
///
/// Only emptiness is checked. Exchange suffixes and index symbols such as
/// `7203.T` or `^GSPC` are passed to the API as typed, percent-encoded in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Trim and uppercase a ticker.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}

/// Non-empty, duplicate-free list of tickers in the order the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerList(Vec<Ticker>);

impl TickerList {
    /// Parse a comma-separated ticker input such as `" aapl, MSFT,,aapl "`.
    ///
    /// Empty entries are skipped and repeated tickers keep their first position.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut tickers: Vec<Ticker> = Vec::new();
        for raw in input.split(',') {
            if raw.trim().is_empty() {
                continue;
            }
            let ticker = Ticker::parse(raw)?;
            if !tickers.contains(&ticker) {
                tickers.push(ticker);
            }
        }

        if tickers.is_empty() {
            return Err(ValidationError::EmptyTickerList);
        }
        Ok(Self(tickers))
    }

    pub fn as_slice(&self) -> &[Ticker] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of `ticker` in the request, compared by its normalized text.
    pub fn position(&self, ticker: &str) -> Option<usize> {
        self.0.iter().position(|candidate| candidate.as_str() == ticker)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|ticker| ticker.as_str().to_owned()).collect()
    }
}

impl Display for TickerList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_strings().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_ticker() {
        let parsed = Ticker::parse(" aapl ").expect("ticker should parse");
        assert_eq!(parsed.as_str(), "AAPL");
    }

    #[test]
    fn empty_ticker_is_rejected() {
        assert_eq!(
            Ticker::parse(" \t ").expect_err("must fail"),
            ValidationError::EmptyTicker
        );
    }

    #[test]
    fn exchange_suffixes_and_index_symbols_are_accepted() {
        let list = TickerList::parse("aapl, 7203.t,0700.HK, ^gspc").expect("list should parse");
        assert_eq!(list.to_strings(), vec!["AAPL", "7203.T", "0700.HK", "^GSPC"]);
    }

    #[test]
    fn list_skips_empty_entries_and_duplicates() {
        let list = TickerList::parse(" aapl, MSFT,, aapl ,brk.b ").expect("list should parse");
        assert_eq!(list.to_strings(), vec!["AAPL", "MSFT", "BRK.B"]);
        assert_eq!(list.position("MSFT"), Some(1));
        assert_eq!(list.to_string(), "AAPL,MSFT,BRK.B");
    }

    #[test]
    fn whitespace_only_list_is_empty() {
        assert_eq!(
            TickerList::parse("  , ,\t").expect_err("must fail"),
            ValidationError::EmptyTickerList
        );
        assert_eq!(
            TickerList::parse("").expect_err("must fail"),
            ValidationError::EmptyTickerList
        );
    }
}

//! Client for the financials batch endpoint.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::domain::{FinancialRecord, TickerList};
use crate::error::DashboardError;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::normalize::normalize_payload;

/// Fetches and normalizes financial records. Cheap to clone.
#[derive(Clone)]
pub struct FinancialsClient {
    http: Arc<dyn HttpClient>,
    api_base: String,
    timeout_ms: u64,
}

impl FinancialsClient {
    pub fn new(http: Arc<dyn HttpClient>, config: &DashboardConfig) -> Self {
        Self {
            http,
            api_base: config.api_base().to_owned(),
            timeout_ms: config.timeout_ms(),
        }
    }

    /// Client using the reqwest transport.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `{api_base}/financials/batch/{A,B,C}` with each ticker percent-encoded.
    pub fn batch_url(&self, tickers: &TickerList) -> String {
        let joined = tickers
            .as_slice()
            .iter()
            .map(|ticker| urlencoding::encode(ticker.as_str()).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}/financials/batch/{}", self.api_base, joined)
    }

    /// Fetch records for `tickers`, ordered by request position.
    ///
    /// The response order is not trusted; records are matched by their `ticker`.
    pub async fn fetch_batch(
        &self,
        tickers: &TickerList,
    ) -> Result<Vec<FinancialRecord>, DashboardError> {
        let url = self.batch_url(tickers);
        let request = HttpRequest::get(&url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let started = Instant::now();
        let response = self.http.execute(request).await.map_err(|error| {
            warn!(%url, error = %error, "financials request failed");
            DashboardError::NetworkFailure {
                api_base: self.api_base.clone(),
                message: error.message().to_owned(),
            }
        })?;
        debug!(
            %url,
            status = response.status,
            latency_ms = started.elapsed().as_millis() as u64,
            "financials response received"
        );

        if !response.is_success() {
            return Err(DashboardError::HttpError {
                status: response.status,
            });
        }

        let payload: Value = serde_json::from_str(&response.body).map_err(|error| {
            DashboardError::MalformedResponse {
                message: error.to_string(),
            }
        })?;
        Ok(order_by_request(normalize_payload(&payload), tickers))
    }
}

impl std::fmt::Debug for FinancialsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialsClient")
            .field("api_base", &self.api_base)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

/// Requested tickers first in request order, then unrequested ones in arrival
/// order. A ticker seen twice keeps its first record.
pub fn order_by_request(
    records: Vec<FinancialRecord>,
    tickers: &TickerList,
) -> Vec<FinancialRecord> {
    let mut kept: Vec<FinancialRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !record.ticker.is_empty() && kept.iter().any(|seen| seen.ticker == record.ticker) {
            warn!(ticker = %record.ticker, "duplicate record in response; keeping the first");
            continue;
        }
        kept.push(record);
    }

    // Stable sort keeps arrival order among unrequested tickers.
    kept.sort_by_key(|record| tickers.position(&record.ticker).unwrap_or(usize::MAX));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;
    use crate::http_client::{HttpError, HttpResponse, MockHttpClient};

    fn client(http: Arc<MockHttpClient>) -> FinancialsClient {
        FinancialsClient::new(http, &DashboardConfig::default())
    }

    fn tickers(input: &str) -> TickerList {
        TickerList::parse(input).expect("valid tickers")
    }

    #[test]
    fn batch_url_joins_tickers_with_commas() {
        let http = Arc::new(MockHttpClient::json("[]"));
        assert_eq!(
            client(http).batch_url(&tickers("aapl,brk.b")),
            "http://127.0.0.1:8002/financials/batch/AAPL,BRK.B"
        );
    }

    #[tokio::test]
    async fn response_is_reordered_by_ticker_field() {
        let http = Arc::new(MockHttpClient::json(
            r#"[
                {"ticker": "ZZZ", "ebitda_last_4": [9]},
                {"ticker": "MSFT", "ebitda_last_4": [2]},
                {"ticker": "AAPL", "ebitda_last_4": [1]},
                {"ticker": "MSFT", "ebitda_last_4": [3]}
            ]"#,
        ));

        let records = client(http.clone())
            .fetch_batch(&tickers("AAPL,MSFT"))
            .await
            .expect("fetch succeeds");

        let order: Vec<&str> = records.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(order, vec!["AAPL", "MSFT", "ZZZ"]);
        assert_eq!(records[1].series(Metric::Ebitda), &[Some(2.0)]);
        assert_eq!(http.requests()[0].headers.get("accept").map(String::as_str), Some("application/json"));
        assert_eq!(http.requests()[0].timeout_ms, 3_000);
    }

    #[tokio::test]
    async fn non_2xx_is_an_http_error() {
        let http = Arc::new(MockHttpClient::responding(HttpResponse::new(502, "bad gateway")));
        let error = client(http)
            .fetch_batch(&tickers("AAPL"))
            .await
            .expect_err("must fail");
        assert_eq!(error, DashboardError::HttpError { status: 502 });
    }

    #[tokio::test]
    async fn transport_error_is_a_network_failure() {
        let http = Arc::new(MockHttpClient::failing(HttpError::connect("connection refused")));
        let error = client(http)
            .fetch_batch(&tickers("AAPL"))
            .await
            .expect_err("must fail");
        assert!(matches!(
            error,
            DashboardError::NetworkFailure { ref api_base, .. } if api_base == "http://127.0.0.1:8002"
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let http = Arc::new(MockHttpClient::json("<html>oops</html>"));
        let error = client(http)
            .fetch_batch(&tickers("AAPL"))
            .await
            .expect_err("must fail");
        assert!(matches!(error, DashboardError::MalformedResponse { .. }));
    }
}

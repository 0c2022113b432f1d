//! Render-cycle entry point.
//!
//! A cycle runs in three steps so the fetch can happen outside a mutable borrow
//! of the dashboard:
//!
//! 1. [`Dashboard::begin_cycle`] parses the ticker input, issues a cycle token
//!    and shows the loading status.
//! 2. The caller fetches with a clone of [`Dashboard::client`].
//! 3. [`Dashboard::complete_cycle`] drops stale results, reports errors, or
//!    renders.
//!
//! [`Dashboard::run_cycle`] chains the three for the common sequential case.
//! Failures only change the status line; charts, table, summary and title keep
//! showing the last successful cycle.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::FinancialsClient;
use crate::chart::ChartRegistry;
use crate::cycle::{CycleToken, CycleTracker};
use crate::domain::{FinancialRecord, TickerList};
use crate::error::DashboardError;
use crate::render::{select_and_render, RenderMode};
use crate::surface::{DashboardSurface, Status};

/// A started cycle waiting for its fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRequest {
    token: CycleToken,
    tickers: TickerList,
}

impl CycleRequest {
    pub const fn token(&self) -> CycleToken {
        self.token
    }

    pub fn tickers(&self) -> &TickerList {
        &self.tickers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CycleOutcome {
    Rendered {
        token: CycleToken,
        mode: RenderMode,
        tickers: Vec<String>,
    },
    /// A newer cycle started before this one completed; nothing was drawn.
    Superseded { token: CycleToken },
}

pub struct Dashboard<S: DashboardSurface> {
    client: FinancialsClient,
    cycles: CycleTracker,
    registry: ChartRegistry<S::Widget>,
    surface: S,
}

impl<S: DashboardSurface> Dashboard<S> {
    pub fn new(client: FinancialsClient, surface: S) -> Self {
        Self {
            client,
            cycles: CycleTracker::new(),
            registry: ChartRegistry::new(),
            surface,
        }
    }

    pub fn client(&self) -> &FinancialsClient {
        &self.client
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn registry(&self) -> &ChartRegistry<S::Widget> {
        &self.registry
    }

    /// Run one full cycle for a comma-separated ticker list.
    pub async fn run_cycle(&mut self, input: &str) -> Result<CycleOutcome, DashboardError> {
        let request = self.begin_cycle(input)?;
        let fetched = self.client.fetch_batch(&request.tickers).await;
        self.complete_cycle(&request, fetched)
    }

    /// Validate input and start a cycle. Invalid input makes no network call.
    pub fn begin_cycle(&mut self, input: &str) -> Result<CycleRequest, DashboardError> {
        let tickers = match TickerList::parse(input) {
            Ok(tickers) => tickers,
            Err(error) => {
                let error = DashboardError::from(error);
                self.report(&error);
                return Err(error);
            }
        };

        let token = self.cycles.issue();
        debug!(%token, tickers = %tickers, "render cycle started");
        self.surface.show_status(&Status::Loading {
            tickers: tickers.to_strings(),
        });
        Ok(CycleRequest { token, tickers })
    }

    /// Finish a cycle with its fetch result.
    pub fn complete_cycle(
        &mut self,
        request: &CycleRequest,
        fetched: Result<Vec<FinancialRecord>, DashboardError>,
    ) -> Result<CycleOutcome, DashboardError> {
        if !self.cycles.is_current(request.token) {
            warn!(
                token = %request.token,
                latest = ?self.cycles.latest(),
                "discarding result of superseded cycle"
            );
            return Ok(CycleOutcome::Superseded {
                token: request.token,
            });
        }

        let records = match fetched {
            Ok(records) => records,
            Err(error) => {
                self.report(&error);
                return Err(error);
            }
        };

        match select_and_render(&records, &mut self.registry, &mut self.surface) {
            Ok(mode) => {
                let tickers: Vec<String> = records
                    .iter()
                    .filter(|record| record.is_renderable())
                    .map(|record| record.ticker.clone())
                    .collect();
                info!(token = %request.token, ?mode, tickers = ?tickers, "render cycle complete");
                self.surface.show_status(&Status::Ready {
                    tickers: tickers.clone(),
                });
                Ok(CycleOutcome::Rendered {
                    token: request.token,
                    mode,
                    tickers,
                })
            }
            Err(DashboardError::NoData { .. }) => {
                let error = DashboardError::NoData {
                    tickers: request.tickers.to_strings(),
                };
                self.report(&error);
                Err(error)
            }
            Err(error) => {
                self.report(&error);
                Err(error)
            }
        }
    }

    fn report(&mut self, error: &DashboardError) {
        warn!(code = error.code(), error = %error, "render cycle failed");
        self.surface.show_status(&Status::Error {
            code: error.code(),
            message: error.to_string(),
        });
    }
}

impl<S: DashboardSurface> Drop for Dashboard<S> {
    fn drop(&mut self) {
        if self.registry.live_count() > 0 {
            self.registry.destroy_all(&mut self.surface);
        }
    }
}

//! # Fintrend Core
//!
//! Pipeline behind the quarterly financial-metrics dashboard.
//!
//! ## Overview
//!
//! A render cycle takes a comma-separated ticker list, fetches one batch of
//! records from the financials API and draws either a single-company view or a
//! multi-company comparison:
//!
//! - **Normalizer** turns loosely-typed JSON into [`FinancialRecord`]s
//! - **Series aligner** orders values oldest-first with `Q1`..`Q4` labels
//! - **Render selector** picks single or multi mode from the records that have data
//! - **Chart registry** owns every live chart widget, one per slot
//! - **Table builder** derives period-over-period deltas
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Batch endpoint client |
//! | [`chart`] | Chart slots, specs, palette and widget registry |
//! | [`config`] | API base URL and timeout |
//! | [`cycle`] | Cycle tokens for stale-result detection |
//! | [`dashboard`] | Render-cycle entry point |
//! | [`domain`] | Tickers, metrics, records and aligned series |
//! | [`error`] | Error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`normalize`] | Raw JSON to records |
//! | [`render`] | Mode selection and renderers |
//! | [`summary`] | Headline metric cards |
//! | [`surface`] | Dashboard surface trait and in-memory frame |
//! | [`table`] | Delta table |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fintrend_core::{Dashboard, DashboardConfig, FinancialsClient, FrameSurface};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::from_env()?;
//!     let mut dashboard = Dashboard::new(FinancialsClient::from_config(&config), FrameSurface::new());
//!
//!     dashboard.run_cycle("AAPL,MSFT").await?;
//!     println!("{:?}", dashboard.surface().title());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │ "AAPL,MSFT"
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Dashboard      │────▶│ Financials API   │
//! │  (cycle token)  │     │ (HttpClient)     │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │ JSON
//!          │                       ▼
//!          │              ┌──────────────────┐
//!          │              │ Normalizer       │
//!          │              └────────┬─────────┘
//!          ▼                       │ records
//! ┌─────────────────┐◀─────────────┘
//! │ Render Selector │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Chart Registry  │────▶│ DashboardSurface │
//! │ + Table Builder │     │ (FrameSurface)   │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a [`DashboardError`] with a stable code:
//!
//! ```rust
//! use fintrend_core::{DashboardError, ErrorKind};
//!
//! fn describe(error: &DashboardError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::InvalidInput => "fix the ticker list",
//!         ErrorKind::NoData => "no financial data for those tickers",
//!         _ => "the financials API could not be used",
//!     }
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod cycle;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod normalize;
pub mod render;
pub mod summary;
pub mod surface;
pub mod table;

// API client
pub use api::{order_by_request, FinancialsClient};

// Charts
pub use chart::{
    palette_color, ChartDataset, ChartKind, ChartRegistry, ChartSlot, ChartSpec, Color,
    ComparisonDataset, RenderPass, PALETTE, TABLE_MOUNT_ID,
};

// Configuration
pub use config::DashboardConfig;

// Render cycles
pub use cycle::{CycleToken, CycleTracker};
pub use dashboard::{CycleOutcome, CycleRequest, Dashboard};

// Domain models
pub use domain::{
    align, AlignedSeries, FinancialRecord, Metric, PeriodLabel, Ticker, TickerList, MAX_PERIODS,
};

// Error types
pub use error::{DashboardError, ErrorKind, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, MockHttpClient,
    ReqwestHttpClient,
};

// Normalization
pub use normalize::{normalize, normalize_payload};

// Rendering
pub use render::{render_plan, select_and_render, RenderMode, RenderPlan};
pub use summary::{CompanyCard, MetricCard, SummaryView};
pub use surface::{
    DashboardFrame, DashboardSurface, FrameSurface, FrameWidget, MountedChart, Status,
    SurfaceEvent,
};
pub use table::{build_delta_table, PeriodRow, TableRow, TableSection, TableView, Trend};

use thiserror::Error;

/// Validation errors for tickers and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker list cannot be empty")]
    EmptyTickerList,
    #[error("ticker cannot be empty")]
    EmptyTicker,

    #[error("api base must start with http:// or https://: '{value}'")]
    InvalidApiBase { value: String },
    #[error("timeout must be a positive number of milliseconds: '{value}'")]
    InvalidTimeout { value: String },
}

/// Category of a failed render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NetworkFailure,
    HttpError,
    NoData,
    MalformedResponse,
}

/// Error ending a render cycle. None of these are fatal to the dashboard.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    #[error("please enter stock ticker symbols (e.g., AAPL or AAPL,MSFT,GOOGL): {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("cannot connect to the financials API at {api_base}: {message}")]
    NetworkFailure { api_base: String, message: String },

    #[error("failed to fetch data: HTTP {status}")]
    HttpError { status: u16 },

    #[error("no financial data found for {}", tickers.join(", "))]
    NoData { tickers: Vec<String> },

    #[error("financials API returned a malformed body: {message}")]
    MalformedResponse { message: String },
}

impl DashboardError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NetworkFailure { .. } => ErrorKind::NetworkFailure,
            Self::HttpError { .. } => ErrorKind::HttpError,
            Self::NoData { .. } => ErrorKind::NoData,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => "input.invalid",
            ErrorKind::NetworkFailure => "network.failure",
            ErrorKind::HttpError => "http.status",
            ErrorKind::NoData => "data.none",
            ErrorKind::MalformedResponse => "response.malformed",
        }
    }
}

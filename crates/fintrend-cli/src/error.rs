use fintrend_core::{DashboardError, ErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] fintrend_core::ValidationError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Dashboard(error) => match error.kind() {
                ErrorKind::InvalidInput => 2,
                ErrorKind::NoData => 3,
                ErrorKind::NetworkFailure => 4,
                ErrorKind::HttpError => 5,
                ErrorKind::MalformedResponse => 6,
            },
            Self::Serialization(_) | Self::Timestamp(_) => 7,
            Self::Io(_) => 10,
        }
    }
}

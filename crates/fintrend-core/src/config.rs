//! Dashboard configuration: API location and request timeout.

use std::env;

use crate::ValidationError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8002";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

pub const API_BASE_ENV: &str = "FINTREND_API_BASE";
pub const TIMEOUT_ENV: &str = "FINTREND_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    api_base: String,
    timeout_ms: u64,
}

impl DashboardConfig {
    pub fn new(api_base: &str, timeout_ms: u64) -> Result<Self, ValidationError> {
        Ok(Self {
            api_base: validate_api_base(api_base)?,
            timeout_ms: validate_timeout(timeout_ms)?,
        })
    }

    /// Defaults overridden by `FINTREND_API_BASE` and `FINTREND_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let mut config = Self::default();
        if let Some(api_base) = lookup(API_BASE_ENV) {
            config = config.with_api_base(&api_base)?;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidTimeout { value: raw.clone() })?;
            config = config.with_timeout_ms(timeout_ms)?;
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, ValidationError> {
        self.api_base = validate_api_base(api_base)?;
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        self.timeout_ms = validate_timeout(timeout_ms)?;
        Ok(self)
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::from(DEFAULT_API_BASE),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

fn validate_api_base(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty());

    if !has_scheme || !has_host {
        return Err(ValidationError::InvalidApiBase {
            value: input.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

fn validate_timeout(timeout_ms: u64) -> Result<u64, ValidationError> {
    if timeout_ms == 0 {
        return Err(ValidationError::InvalidTimeout {
            value: timeout_ms.to_string(),
        });
    }
    Ok(timeout_ms)
}

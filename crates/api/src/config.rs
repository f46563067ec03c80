//! Runtime configuration from environment variables.
//!
//! - `SALEBOOK_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `SALEBOOK_LOG_FORMAT`: `json` (default) or `pretty`
//! - `RUST_LOG`: log filter, read by `salebook-observability`

use std::net::SocketAddr;

use salebook_observability::LogFormat;
use thiserror::Error;

pub const ADDR_VAR: &str = "SALEBOOK_ADDR";
pub const LOG_FORMAT_VAR: &str = "SALEBOOK_LOG_FORMAT";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    pub log_format: LogFormat,
    /// Problems worth logging once a subscriber is installed.
    pub warnings: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut warnings = Vec::new();

        let addr_text = lookup(ADDR_VAR).unwrap_or_else(|| {
            warnings.push(format!("{ADDR_VAR} not set; using {DEFAULT_ADDR}"));
            DEFAULT_ADDR.to_string()
        });
        let addr = addr_text.parse().map_err(|source| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr_text.clone(),
            source,
        })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(text) => text.parse().unwrap_or_else(|e| {
                warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using json"));
                LogFormat::default()
            }),
        };

        Ok(Self {
            addr,
            log_format,
            warnings,
        })
    }
}

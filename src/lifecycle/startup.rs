//! Startup orchestration.
//!
//! Validation and client construction happen before a listener is bound, so
//! a misconfigured relay never accepts a single request.

use thiserror::Error;

use crate::config::{validate_config, ConfigError, RelayConfig};
use crate::relay::RelayClient;

/// Errors that stop the relay from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Validate `config` and build the relay client it describes.
pub fn build_relay_client(config: &RelayConfig) -> Result<RelayClient, StartupError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let url = config
        .upstream
        .resolved_url()
        .map_err(|e| ConfigError::Validation(vec![e]))?;

    Ok(RelayClient::new(url, config.upstream.timeout())?)
}

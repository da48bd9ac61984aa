//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::ValidationError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values supplied on the command line or through environment variables.
/// Each one, when present, wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub upstream_url: Option<String>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut RelayConfig) {
        if let Some(url) = &self.upstream_url {
            config.upstream.url = Some(url.clone());
        }
        if let Some(addr) = &self.bind_address {
            config.listener.bind_address = addr.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

/// Read a TOML config file without validating it.
pub fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: file (or defaults) then overrides.
///
/// Validation is left to the caller so that logging can be initialised from
/// the resolved observability section before any validation error is reported.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => RelayConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

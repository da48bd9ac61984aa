//! Configuration validation.
//!
//! Serde handles syntax; this module checks meaning. Validation is a pure
//! function over `RelayConfig` and reports every problem it finds, not just
//! the first one.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.url is not set (use the config file, --lambda-url or LAMBDA_URL)")]
    MissingUpstreamUrl,

    #[error("upstream.url '{url}' is not a valid URL: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream.url '{url}' must use http or https, not '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("upstream.timeout_secs must be greater than zero when set")]
    ZeroTimeout,

    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check a configuration before it is accepted into the system.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.upstream.resolved_url() {
        errors.push(e);
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RelayConfig {
        let mut config = RelayConfig::default();
        config.upstream.url = Some("http://127.0.0.1:9000/deadline".into());
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(validate_config(&valid_config()), Ok(()));
    }

    #[test]
    fn test_default_config_requires_upstream() {
        let errors = validate_config(&RelayConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingUpstreamUrl]);
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = valid_config();
        config.upstream.url = Some("file:///etc/passwd".into());
        config.upstream.timeout_secs = Some(0);
        config.listener.bind_address = "localhost".into();
        config.limits.max_body_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
        assert!(errors.contains(&ValidationError::InvalidBindAddress("localhost".into())));
    }
}

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags / environment overrides (lambdaURL, bind address)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults except the upstream URL
//! - A missing upstream URL is a startup failure, never a per-request one

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{read_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, RelayConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};

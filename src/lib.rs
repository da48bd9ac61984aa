//! Deadline reminder relay.
//!
//! Accepts `POST /compute-deadline` and forwards the JSON body to the
//! configured upstream deadline service, returning its answer to the caller.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::RelayClient;

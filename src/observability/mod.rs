//! Observability subsystem.
//!
//! Logging only: request spans come from `TraceLayer` and carry the request
//! id; the relay adds upstream status and latency events.

pub mod logging;

pub use logging::init_logging;

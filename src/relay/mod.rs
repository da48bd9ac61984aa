//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! DeadlineRequest (from the inbound handler)
//!     → client.rs (serialize, POST to upstream)
//!     → upstream (Lambda-backed deadline service)
//!     → client.rs (status check, deserialize)
//!     → DeadlineResponse | RelayError
//! ```
//!
//! # Design Decisions
//! - No retries, no backoff, no circuit breaking: one call per request
//! - Every failure is returned to the caller, never swallowed

pub mod client;
pub mod types;

pub use client::RelayClient;
pub use types::{DeadlineRequest, DeadlineResponse, RelayError, RelayResult};

//! Transport records and relay error definitions.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Caller input for a deadline reminder.
///
/// The shape is owned by the upstream service, so the record is carried as an
/// ordered JSON object and never inspected here. Numbers keep their original
/// text (`arbitrary_precision`), so ids wider than 64 bits and decimals such
/// as `1.10` are forwarded exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeadlineRequest(Map<String, Value>);

impl DeadlineRequest {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for DeadlineRequest {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Result computed by the upstream service, returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeadlineResponse(Map<String, Value>);

impl DeadlineResponse {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for DeadlineResponse {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Errors that can occur while relaying a request upstream.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream could not be reached, or the exchange broke off.
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("Upstream responded with status {status}")]
    Upstream { status: StatusCode, body: String },

    /// The upstream body was not a JSON object.
    #[error("Malformed upstream response: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl RelayError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RelayError::Connection(e) if e.is_timeout())
    }
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

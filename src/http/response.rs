//! Error responses.
//!
//! Maps inbound rejections and relay failures to HTTP statuses:
//! - malformed inbound JSON: the extractor's 4xx (400, 413, 415 or 422)
//! - upstream 4xx/5xx: the same status, passed through
//! - upstream non-2xx outside 4xx/5xx, malformed upstream JSON, unreachable
//!   upstream: 502 Bad Gateway
//! - upstream timeout: 504 Gateway Timeout

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::relay::RelayError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The inbound body could not be mapped to a request record.
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Relay(#[from] RelayError),

    /// The task driving the upstream call panicked or was aborted.
    #[error("Relay task failed: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Relay(RelayError::Upstream { status, .. })
                if status.is_client_error() || status.is_server_error() =>
            {
                *status
            }
            ApiError::Relay(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Relay(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable identifier for the `error` field of the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) => "deserialization_error",
            ApiError::Relay(RelayError::Deserialization(_)) => "deserialization_error",
            ApiError::Relay(RelayError::Upstream { .. }) => "upstream_error",
            ApiError::Relay(RelayError::Connection(_)) => "connection_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        if let ApiError::Relay(RelayError::Upstream { status: upstream, body: detail }) = &self {
            body["upstream_status"] = json!(upstream.as_u16());
            body["upstream_body"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

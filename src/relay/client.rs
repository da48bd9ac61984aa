//! Upstream HTTP client.
//!
//! # Responsibilities
//! - POST the caller's record to the configured upstream as JSON
//! - Turn the upstream reply into a `DeadlineResponse` or a `RelayError`
//!
//! One `reqwest::Client` is built at startup and reused for every call. It
//! carries no per-request state, so the relay can be shared across tasks.

use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use url::Url;

use crate::relay::types::{DeadlineRequest, DeadlineResponse, RelayError, RelayResult};

#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    upstream_url: Url,
}

impl RelayClient {
    /// Build a client for `upstream_url`.
    ///
    /// Redirects are not followed: a 3xx is reported as an upstream error
    /// rather than silently turning the POST into a GET.
    pub fn new(upstream_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("deadline-relay/", env!("CARGO_PKG_VERSION")))
            .redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            upstream_url,
        })
    }

    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }

    /// Forward `request` and wait for the upstream's answer.
    pub async fn relay(&self, request: &DeadlineRequest) -> RelayResult<DeadlineResponse> {
        let start = Instant::now();

        let response = self
            .http
            .post(self.upstream_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(upstream = %self.upstream_url, error = %e, "Upstream unreachable");
                RelayError::Connection(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(RelayError::Connection)?;

        tracing::debug!(
            status = %status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream responded"
        );

        if !status.is_success() {
            tracing::warn!(status = %status, "Upstream returned an error status");
            return Err(RelayError::Upstream {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Upstream body is not a JSON object");
            RelayError::Deserialization(e)
        })
    }
}

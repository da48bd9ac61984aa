//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::relay::{DeadlineRequest, DeadlineResponse};

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `POST /compute-deadline`
///
/// Relays the body to the upstream deadline service and returns its answer.
/// A body that does not map to a `DeadlineRequest` is rejected here, before
/// any upstream call is made.
///
/// The upstream call runs on its own task so that a caller hanging up does
/// not cut the exchange short.
pub async fn compute_deadline(
    State(state): State<AppState>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Result<Json<DeadlineResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            status = %rejection.status(),
            reason = %rejection.body_text(),
            "Rejected inbound body"
        );
        ApiError::from(rejection)
    })?;

    tracing::debug!(fields = request.fields().len(), "Relaying deadline request");

    let relay = state.relay.clone();
    let outcome = tokio::spawn(async move { relay.relay(&request).await })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Relay task did not complete");
            ApiError::Internal(e.to_string())
        })?;

    match outcome {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!(error = %e, "Relay failed");
            Err(e.into())
        }
    }
}

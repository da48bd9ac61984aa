//! Request identification.
//!
//! Every inbound request gets an `x-request-id` (a caller-supplied one is
//! kept). The id is recorded on the request span and echoed on the response.

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Span for `TraceLayer` carrying method, path and request id.
pub fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let request = Request::new(());
        let mut make = UuidRequestId;
        let first = make.make_request_id(&request).unwrap();
        let second = make.make_request_id(&request).unwrap();

        let first = first.header_value().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second.header_value().to_str().unwrap());
    }
}

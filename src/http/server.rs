//! HTTP server setup.
//!
//! # Responsibilities
//! - Validate configuration and build the relay client (fail fast)
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, body limit)
//! - Serve until the shutdown signal fires

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use url::Url;

use crate::config::RelayConfig;
use crate::http::handlers::{compute_deadline, health};
use crate::http::request::{request_span, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::shutdown::ShutdownListener;
use crate::lifecycle::startup::{self, StartupError};
use crate::relay::RelayClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayClient>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
    relay: Arc<RelayClient>,
}

impl HttpServer {
    /// Create a new server. Fails when the configuration is invalid, most
    /// notably when no upstream URL was supplied, so a server that exists can
    /// always relay.
    pub fn new(config: RelayConfig) -> Result<Self, StartupError> {
        let relay = Arc::new(startup::build_relay_client(&config)?);

        let state = AppState {
            relay: relay.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            relay,
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// `limits.max_body_size` is the only body limit: axum's own 2MB default
    /// for extractors is switched off so it cannot undercut a larger setting.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/compute-deadline", post(compute_deadline))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(DefaultBodyLimit::disable())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size)),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.relay.upstream_url(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn upstream_url(&self) -> &Url {
        self.relay.upstream_url()
    }
}

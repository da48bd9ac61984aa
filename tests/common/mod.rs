//! Shared utilities for integration tests: mock upstreams and a running relay.

use axum::Router;
use deadline_relay::config::RelayConfig;
use deadline_relay::http::HttpServer;
use deadline_relay::lifecycle::Shutdown;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve `router` on an ephemeral port, returning its address.
pub async fn start_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

#[allow(dead_code)]
pub struct RunningRelay {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningRelay {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Configuration forwarding to `upstream_url`, otherwise default.
#[allow(dead_code)]
pub fn relay_config(upstream_url: String) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream.url = Some(upstream_url);
    config
}

/// Start the relay on an ephemeral port, forwarding to `upstream_url`.
pub async fn start_relay(upstream_url: String) -> RunningRelay {
    start_relay_with(relay_config(upstream_url)).await
}

/// Start the relay with a custom configuration. The listener address in
/// `config` is ignored; an ephemeral port is used instead.
#[allow(dead_code)]
pub async fn start_relay_with(config: RelayConfig) -> RunningRelay {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    RunningRelay {
        addr,
        shutdown,
        task,
    }
}

/// Test client that ignores proxy settings from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

//! Deadline reminder relay.
//!
//! ```text
//!     Caller                      deadline-relay                        Upstream
//!  ──────────── POST ──────────▶ ┌──────────────┐    ┌────────────┐
//!  /compute-deadline             │   handlers   │───▶│   relay    │── POST ──▶ lambdaURL
//!                                │ (JSON in/out)│    │   client   │
//!  ◀─────────── JSON ─────────── └──────────────┘◀───└────────────┘◀── JSON ──
//! ```
//!
//! Configuration comes from an optional TOML file plus flags and environment
//! variables. Without an upstream URL the process exits before binding.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use deadline_relay::config::{resolve_config, ConfigOverrides};
use deadline_relay::http::HttpServer;
use deadline_relay::lifecycle::{signals, Shutdown, StartupError};
use deadline_relay::observability;

#[derive(Parser)]
#[command(name = "deadline-relay", version)]
#[command(about = "Relays deadline reminder requests to the upstream deadline service")]
struct Args {
    /// Path to a TOML config file.
    #[arg(short, long, env = "DEADLINE_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Upstream endpoint (overrides `upstream.url`).
    #[arg(long, env = "LAMBDA_URL")]
    lambda_url: Option<String>,

    /// Address to listen on (overrides `listener.bind_address`).
    #[arg(long, env = "BIND_ADDRESS")]
    bind: Option<String>,

    /// Log level (overrides `observability.log_level`).
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        // Deployments that set the property-style name still work.
        upstream_url: args.lambda_url.or_else(|| std::env::var("lambdaURL").ok()),
        bind_address: args.bind,
        log_level: args.log_level,
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;

    observability::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "deadline-relay starting");

    let server = match HttpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start");
            return Err(e.into());
        }
    };

    let bind_address = server.config().listener.bind_address.clone();
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        upstream = %server.upstream_url(),
        max_body_size = server.config().limits.max_body_size,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

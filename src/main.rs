//! Minimal JSON echo service.
//!
//! A small HTTP service built with Tokio and Axum:
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────┐
//!     ─────────────────────────▶│  http/server  ──▶  http/handlers │
//!                               │  (router +        (greeting,     │
//!     Client Response           │   middleware)      echo check)   │
//!     ◀─────────────────────────│                                  │
//!                               │  ┌────────┐ ┌─────────┐ ┌──────┐ │
//!                               │  │ config │ │lifecycle│ │ logs │ │
//!                               │  └────────┘ └─────────┘ └──────┘ │
//!                               └──────────────────────────────────┘
//! ```
//!
//! Endpoints:
//! - `GET /` returns a static greeting
//! - `POST /data` validates that the body is a JSON object and echoes it
//!
//! The service is stateless; every request is independent.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use echo_api::config::{self, ServiceConfig};
use echo_api::http::HttpServer;
use echo_api::lifecycle::Shutdown;
use echo_api::observability::logging;

#[derive(Parser)]
#[command(name = "echo-api")]
#[command(about = "Minimal JSON echo service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => config::load_config(&path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.logging);

    tracing::info!("echo-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

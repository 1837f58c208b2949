//! Shared utilities for integration testing.

use std::net::SocketAddr;

use echo_api::config::ServiceConfig;
use echo_api::http::HttpServer;
use echo_api::lifecycle::Shutdown;

/// Spawn the service on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the
/// handle closes the channel and stops the server task.
pub async fn spawn_service() -> (SocketAddr, Shutdown) {
    let config = ServiceConfig::default();
    let shutdown = Shutdown::new();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

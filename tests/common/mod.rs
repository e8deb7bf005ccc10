//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use item_service::http::HttpServer;
use item_service::lifecycle::Shutdown;
use item_service::store::ItemStore;

/// Start the service on an ephemeral port over the given store.
///
/// Returns the bound address and the shutdown coordinator; dropping the
/// coordinator without triggering leaves the task running until the test
/// runtime tears down.
pub async fn spawn_server(store: Arc<dyn ItemStore>, ready: bool) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(store, Arc::new(AtomicBool::new(ready)));

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Wait for the listener task to start accepting
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

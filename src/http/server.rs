//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener and serve with graceful shutdown
//!
//! # Design Decisions
//! - The store is injected into state as a trait object, so tests swap in
//!   the in-memory implementation without touching the router
//! - No request timeout layer: a database call is allowed to take as long
//!   as the platform lets it, and only its own request waits

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::http::handlers;
use crate::http::request_id::RequestUuid;
use crate::lifecycle;
use crate::store::ItemStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    /// Whether startup schema initialization succeeded.
    pub ready: Arc<AtomicBool>,
}

/// HTTP server for the item service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(store: Arc<dyn ItemStore>, ready: Arc<AtomicBool>) -> Self {
        let state = AppState { store, ready };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/ready", get(handlers::ready))
            .route(
                "/api/items",
                get(handlers::list_items).post(handlers::create_item),
            )
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestUuid))
    }

    /// Run the server, accepting connections on the given listener until an
    /// OS signal arrives or the shutdown coordinator fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(lifecycle::shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

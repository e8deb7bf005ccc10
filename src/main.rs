//! Item Service
//!
//! A stateless CRUD backend built with Tokio and Axum, backed by a
//! PostgreSQL connection pool.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │               ITEM SERVICE                │
//!                      │                                           │
//!     Client Request   │  ┌─────────┐    ┌──────────┐              │
//!     ─────────────────┼─▶│  http   │───▶│ handlers │              │
//!                      │  │ server  │    └────┬─────┘              │
//!                      │  └─────────┘         │                    │
//!                      │                      ▼                    │
//!                      │               ┌──────────────┐            │      ┌──────────┐
//!                      │               │  ItemStore   │────────────┼─────▶│ Postgres │
//!                      │               │ (pg/memory)  │            │      └──────────┘
//!                      │               └──────────────┘            │
//!                      │                                           │
//!                      │  ┌────────────────────────────────────┐   │
//!                      │  │        Cross-Cutting Concerns       │   │
//!                      │  │  config │ lifecycle │ tracing       │   │
//!                      │  └────────────────────────────────────┘   │
//!                      └──────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_service::config::AppConfig;
use item_service::http::HttpServer;
use item_service::lifecycle::Shutdown;
use item_service::store::{ItemStore, PgItemStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("item-service v0.1.0 starting");

    let config = AppConfig::from_env();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        db_host = %config.database.host,
        db_port = config.database.port,
        db_name = %config.database.name,
        "Configuration loaded"
    );

    // The pool connects lazily, so a missing database surfaces at request
    // time rather than here.
    let store: Arc<dyn ItemStore> = Arc::new(PgItemStore::new(&config.database)?);

    // Best-effort schema init. Failure leaves the service running degraded,
    // with /ready reporting the state.
    let ready = Arc::new(AtomicBool::new(false));
    match store.ensure_schema().await {
        Ok(()) => {
            ready.store(true, Ordering::Release);
            tracing::info!("Schema initialized");
        }
        Err(e) => {
            tracing::error!(error = %e, "Schema initialization failed, serving degraded");
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(store, ready);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

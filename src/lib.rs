//! Item Service Library
//!
//! A stateless CRUD backend for the item store, built with Tokio and Axum.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

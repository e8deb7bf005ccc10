//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, state injection)
//!     → handlers.rs (deserialize, delegate to store, serialize)
//!     → error.rs (classify store failures into status codes)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request_id;
pub mod server;

pub use error::ApiError;
pub use request_id::RequestUuid;
pub use server::{AppState, HttpServer};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (per-variable override with hardcoded fallback)
//!     → AppConfig (immutable for the process lifetime)
//!     → shared with subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Every field has a default so the service runs with zero configuration
//! - Config is immutable once loaded; no reload mechanism
//! - Credentials ride in the environment, matching the deployment platform's
//!   secret injection

pub mod loader;
pub mod schema;

pub use schema::AppConfig;
pub use schema::DatabaseConfig;
pub use schema::ListenerConfig;

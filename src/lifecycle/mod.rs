//! Process lifecycle coordination.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Create store → Schema init (best-effort) → Serve
//!
//! Shutdown:
//!     SIGINT or Shutdown::trigger → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};

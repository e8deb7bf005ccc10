//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → ItemStore trait method
//!     → postgres.rs (production: sqlx pool, one query per call)
//!     → memory.rs (tests: Vec behind a Mutex)
//! ```
//!
//! # Design Decisions
//! - The store is an explicitly owned `Arc<dyn ItemStore>` created at
//!   startup and injected into handler state, never accessed globally
//! - Errors are classified into a small taxonomy so callers can branch on
//!   failure class instead of matching message strings
//! - No retries, transactions, or circuit breaking: one call, one statement,
//!   auto-committed

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgItemStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Item, NewItem};

/// Failure classes surfaced by any store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Internal(String),
}

/// Persistence seam for item records.
///
/// Items are append-only: there is deliberately no update or delete.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Idempotently create the backing schema.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// All items, ordered by ascending id.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Insert one item; the store assigns `id` and `created_at`.
    async fn insert(&self, new: NewItem) -> Result<Item, StoreError>;
}

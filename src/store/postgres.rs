//! PostgreSQL-backed item store.
//!
//! # Responsibilities
//! - Own the shared connection pool for the process lifetime
//! - Idempotent schema creation at startup
//! - One auto-committed statement per trait call
//!
//! # Design Decisions
//! - The pool is created lazily so the process can come up (degraded) while
//!   the database is still unreachable; readiness reflects the difference
//! - No statement timeouts: a hung database call suspends only the request
//!   awaiting it

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use crate::config::DatabaseConfig;
use crate::model::{Item, NewItem};
use crate::store::{ItemStore, StoreError};

const CREATE_ITEMS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255),
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Item store backed by a shared `sqlx` connection pool.
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Create the store and its pool. Connections are established on first
    /// use, not here.
    pub fn new(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPool::connect_lazy(&config.connection_url())?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_ITEMS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, created_at FROM items ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn insert(&self, new: NewItem) -> Result<Item, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description) VALUES ($1, $2) \
             RETURNING id, name, description, created_at",
        )
        .bind(new.name)
        .bind(new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(err.to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

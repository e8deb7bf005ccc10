//! Domain records matching the persisted table schema.
//!
//! # Design Decisions
//! - `Item` derives `sqlx::FromRow` so query results map directly to it
//! - `name` and `description` are nullable in the schema, so both are
//!   `Option<String>` here; serialization emits explicit `null`s
//! - `id` and `created_at` are generated by the database and never set by
//!   the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted item row.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create payload. Both fields are optional; absent fields persist as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

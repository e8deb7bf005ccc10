//! In-memory item store for tests.
//!
//! Mirrors the database's observable behavior: monotonically increasing ids
//! assigned by a sequence, timestamps assigned at insertion. A failing mode
//! stands in for a missing table or unreachable database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::model::{Item, NewItem};
use crate::store::{ItemStore, StoreError};

pub struct MemoryStore {
    inner: Mutex<Inner>,
    failing: bool,
}

struct Inner {
    next_id: i32,
    rows: Vec<Item>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
            failing: false,
        }
    }

    /// A store whose every call fails, as if the table were never created.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Internal(
                "relation \"items\" does not exist".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        let mut rows = inner.rows.clone();
        rows.sort_by_key(|item| item.id);
        Ok(rows)
    }

    async fn insert(&self, new: NewItem) -> Result<Item, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let item = Item {
            id: inner.next_id,
            name: new.name,
            description: new.description,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.rows.push(item.clone());
        Ok(item)
    }
}

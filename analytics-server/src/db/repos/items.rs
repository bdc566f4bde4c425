//! Item repository
//!
//! - create: single INSERT ... RETURNING, id assigned by the store
//! - list: full table scan ordered by id (no pagination)

use sqlx::any::AnyRow;
use sqlx::Row;

use crate::db::{Database, DbError};
use crate::models::Item;

/// Item repository
pub struct ItemRepo<'a> {
    db: &'a Database,
}

impl<'a> ItemRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a new item and return it with the id the store assigned.
    ///
    /// The statement runs in autocommit mode, so the row is durable once
    /// this returns.
    pub async fn create(&self, name: &str) -> Result<Item, DbError> {
        let row = sqlx::query("INSERT INTO items (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(self.db.pool())
            .await?;

        let item = item_from_row(&row)?;
        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    /// Every stored item in insertion order.
    pub async fn list(&self) -> Result<Vec<Item>, DbError> {
        let rows = sqlx::query("SELECT id, name FROM items ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(item_from_row).collect()
    }
}

fn item_from_row(row: &AnyRow) -> Result<Item, DbError> {
    Ok(Item {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

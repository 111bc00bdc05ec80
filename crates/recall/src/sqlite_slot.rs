//! SQLite-backed [`Slot`] implementation.
//!
//! Maps the slot operations onto the `slots` key-value table created
//! by [`migrate`](crate::migrate).

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use recall_core::store::Slot;

/// SQLite implementation of the [`Slot`] trait.
///
/// Wraps a [`SqlitePool`] and translates `get`/`put` into statements
/// against the `slots (key, value, updated_at)` table.
pub struct SqliteSlot {
    pool: SqlitePool,
}

impl SqliteSlot {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[allow(dead_code)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Slot for SqliteSlot {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO slots (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

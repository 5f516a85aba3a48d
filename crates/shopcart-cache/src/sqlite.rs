//! SQLite implementation of ILocalStorage
//!
//! Stores each key as one row of the `local_storage` table. Values are kept
//! verbatim; `updated_at` records the last write as RFC 3339 text.

use chrono::Utc;
use sqlx::SqlitePool;

use shopcart_core::ports::ILocalStorage;

/// SQLite-backed local storage
///
/// Survives process restarts, which gives the cart the same lifetime as
/// browser local storage gives it on the web.
pub struct SqliteLocalStorage {
    pool: SqlitePool,
}

impl SqliteLocalStorage {
    /// Creates a storage instance over an already-migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists stored keys in lexical order
    pub async fn keys(&self) -> anyhow::Result<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM local_storage ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }
}

#[async_trait::async_trait]
impl ILocalStorage for SqliteLocalStorage {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        tracing::trace!(key, bytes = value.len(), "Stored local item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        tracing::trace!(key, removed = result.rows_affected(), "Removed local item");
        Ok(())
    }
}

//! shopcart Cache - Client-side local storage
//!
//! Adapters for the `ILocalStorage` port from `shopcart-core`:
//! - [`SqliteLocalStorage`] - durable storage in a SQLite database file
//! - [`MemoryLocalStorage`] - process-local storage for tests and dry runs
//!
//! ## Architecture
//!
//! Both types are driven (secondary) adapters in the hexagonal architecture.
//! The cart store only sees the port, so a CLI session and a test suite can
//! share the same store logic over different backends.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use shopcart_cache::{DatabasePool, SqliteLocalStorage};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = DatabasePool::new(Path::new("/home/user/.local/share/shopcart/storage.db")).await?;
//! let storage = SqliteLocalStorage::new(pool.pool().clone());
//! // Use storage as ILocalStorage...
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod pool;
pub mod sqlite;

pub use memory::MemoryLocalStorage;
pub use pool::DatabasePool;
pub use sqlite::SqliteLocalStorage;

/// Errors that can occur during storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to establish a database connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::QueryFailed(e.to_string())
    }
}

//! Local storage port (driven/secondary port)
//!
//! A string key/value store with the semantics of browser local storage:
//! values are opaque text, writes replace, removal of a missing key is not
//! an error. The cart store keeps its mapping here as JSON under one key.

/// Port trait for persistent client-side key/value storage
#[async_trait::async_trait]
pub trait ILocalStorage: Send + Sync {
    /// Returns the value stored under `key`, if any
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Removes `key`; succeeds when the key does not exist
    async fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}

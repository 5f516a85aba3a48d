//! In-memory implementation of ILocalStorage
//!
//! Nothing outlives the process. Used by tests and by the CLI when no
//! database path is wanted.

use std::collections::HashMap;

use tokio::sync::RwLock;

use shopcart_core::ports::ILocalStorage;

/// Process-local key/value storage
#[derive(Default)]
pub struct MemoryLocalStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryLocalStorage {
    /// Creates an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `entries`
    pub fn with_items<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns true if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ILocalStorage for MemoryLocalStorage {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

//! Per-invocation context shared by all commands
//!
//! Resolves the configuration from the global flags and builds the
//! adapters (API client, local storage, cart store) commands need.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::debug;

use shopcart_api::ApiClient;
use shopcart_cache::{DatabasePool, SqliteLocalStorage};
use shopcart_core::config::Config;
use shopcart_sync::CartStore;

/// Configuration and adapter factory for one CLI run
pub struct CliContext {
    pub config: Config,
    pub config_path: PathBuf,
}

impl CliContext {
    /// Loads the configuration
    ///
    /// An explicit `--config` path must exist and parse. Without one, the
    /// default path is used and a missing file means defaults. The
    /// `SHOPCART_API_URL` variable overrides the file, and `--api-url`
    /// overrides both.
    pub fn load(config_path: Option<&str>, api_url: Option<String>) -> Result<Self> {
        let (config_path, config) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = Config::load(&path)
                    .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
                (path, config)
            }
            None => {
                let path = Config::default_path();
                let config = Config::load_or_default(&path);
                (path, config)
            }
        };

        let config = config.with_env_overrides().with_api_url_override(api_url);

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Logs where the configuration came from; call once logging is set up
    pub fn log_resolved(&self) {
        debug!(
            config_path = %self.config_path.display(),
            base_url = %self.config.api.base_url,
            "Configuration resolved"
        );
    }

    /// Fails with every validation message if the configuration is invalid
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.config.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Invalid configuration: {}", messages.join("; "))
    }

    /// Builds the storefront client from the `api` section
    pub fn api_client(&self) -> Result<Arc<ApiClient>> {
        self.ensure_valid()?;
        let client = ApiClient::from_config(&self.config.api)
            .context("Failed to create storefront API client")?;
        Ok(Arc::new(client))
    }

    /// Opens local storage and returns a cart store hydrated from it
    pub async fn open_cart_store(&self) -> Result<CartStore> {
        let client = self.api_client()?;

        let pool = DatabasePool::new(&self.config.storage.database)
            .await
            .context("Failed to open local storage")?;
        let storage = Arc::new(SqliteLocalStorage::new(pool.pool().clone()));

        let store = CartStore::new(client, storage, self.config.storage.cart_key.clone());
        store
            .try_init_cart()
            .await
            .context("Failed to restore saved cart")?;
        Ok(store)
    }
}

//! Catalog port (driven/secondary port)
//!
//! Read-only access to the storefront catalog. Uses `anyhow::Result`
//! because transport errors are adapter-specific.

use crate::domain::{Category, CategoryId, Product, ProductId};

/// Port trait for product and category queries
#[async_trait::async_trait]
pub trait ICatalogApi: Send + Sync {
    /// Lists every product
    async fn list_products(&self) -> anyhow::Result<Vec<Product>>;

    /// Retrieves a single product
    async fn get_product(&self, id: ProductId) -> anyhow::Result<Product>;

    /// Lists the products of one category
    async fn list_products_by_category(
        &self,
        category_id: CategoryId,
    ) -> anyhow::Result<Vec<Product>>;

    /// Lists every category
    async fn list_categories(&self) -> anyhow::Result<Vec<Category>>;

    /// Retrieves a single category
    async fn get_category(&self, id: CategoryId) -> anyhow::Result<Category>;
}

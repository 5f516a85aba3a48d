//! Product endpoints
//!
//! - `GET /api/products`
//! - `GET /api/products/{id}`
//! - `GET /api/products/category/{categoryId}`

use tracing::debug;

use shopcart_core::domain::{CategoryId, Product, ProductId};

use crate::client::ApiClient;
use crate::ApiError;

/// Product call sites, borrowed from an [`ApiClient`]
pub struct ProductEndpoints<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductEndpoints<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists every product
    pub async fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Fetching all products");
        self.client.get("/api/products").await
    }

    /// Retrieves a product by id
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ApiError> {
        debug!(%id, "Fetching product");
        self.client.get(&format!("/api/products/{id}")).await
    }

    /// Lists the products of a category
    pub async fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ApiError> {
        debug!(%category_id, "Fetching products by category");
        self.client
            .get(&format!("/api/products/category/{category_id}"))
            .await
    }
}

//! Category endpoints
//!
//! - `GET /api/categories`
//! - `GET /api/categories/{id}`

use shopcart_core::domain::{Category, CategoryId};

use crate::client::ApiClient;
use crate::ApiError;

/// Category call sites, borrowed from an [`ApiClient`]
pub struct CategoryEndpoints<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoryEndpoints<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists every category
    pub async fn get_all(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get("/api/categories").await
    }

    /// Retrieves a category by id
    pub async fn get_by_id(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.client.get(&format!("/api/categories/{id}")).await
    }
}

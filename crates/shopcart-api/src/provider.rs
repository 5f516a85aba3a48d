//! Port implementations for [`ApiClient`]
//!
//! Implements [`ICatalogApi`] and [`ICartApi`] from `shopcart-core` by
//! delegating to the typed endpoint modules.
//!
//! ## Design Notes
//!
//! - Errors cross the port boundary as `anyhow::Error` wrapping [`ApiError`],
//!   so callers can `downcast_ref::<ApiError>()` to inspect status codes.
//! - No state is held beyond the client itself, so no locking is needed.
//!
//! [`ApiError`]: crate::ApiError

use anyhow::Result;

use shopcart_core::domain::{
    CartDetails, CartItemRequest, CartMapping, CartResponse, CartSnapshotRequest, Category,
    CategoryId, Product, ProductId,
};
use shopcart_core::ports::{ICartApi, ICatalogApi};

use crate::client::ApiClient;

#[async_trait::async_trait]
impl ICatalogApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products().get_all().await?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        Ok(self.products().get_by_id(id).await?)
    }

    async fn list_products_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>> {
        Ok(self.products().get_by_category(category_id).await?)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories().get_all().await?)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category> {
        Ok(self.categories().get_by_id(id).await?)
    }
}

#[async_trait::async_trait]
impl ICartApi for ApiClient {
    async fn add_item(&self, request: &CartItemRequest) -> Result<CartResponse> {
        Ok(self.cart().add_item(request).await?)
    }

    async fn get_cart(&self, cart: &CartMapping) -> Result<CartDetails> {
        Ok(self.cart().get_cart(cart).await?)
    }

    async fn update_item(&self, request: &CartItemRequest) -> Result<CartResponse> {
        Ok(self.cart().update_item(request).await?)
    }

    async fn remove_item(
        &self,
        product_id: ProductId,
        request: &CartSnapshotRequest,
    ) -> Result<CartResponse> {
        Ok(self.cart().remove_item(product_id, request).await?)
    }
}

//! Remote cart port (driven/secondary port)
//!
//! The server keeps no cart of its own: every call carries the client's
//! current [`CartMapping`] and the server answers with the authoritative
//! mapping after applying the change (stock limits and other rules are
//! enforced there).
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific; the HTTP adapter's typed error can be recovered
//!   with `downcast_ref`.
//! - Mutations return the raw [`CartResponse`]; deciding what a response
//!   without a `cart` field means is left to the caller.

use crate::domain::{
    CartDetails, CartItemRequest, CartMapping, CartResponse, CartSnapshotRequest, ProductId,
};

/// Port trait for the remote cart endpoints
#[async_trait::async_trait]
pub trait ICartApi: Send + Sync {
    /// Adds `quantity` units of a product on top of the given cart
    async fn add_item(&self, request: &CartItemRequest) -> anyhow::Result<CartResponse>;

    /// Computes the details projection for a cart
    async fn get_cart(&self, cart: &CartMapping) -> anyhow::Result<CartDetails>;

    /// Sets the quantity of a product in the given cart
    async fn update_item(&self, request: &CartItemRequest) -> anyhow::Result<CartResponse>;

    /// Removes a product from the given cart
    async fn remove_item(
        &self,
        product_id: ProductId,
        request: &CartSnapshotRequest,
    ) -> anyhow::Result<CartResponse>;
}

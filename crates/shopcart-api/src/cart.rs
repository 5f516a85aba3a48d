//! Cart endpoints
//!
//! The backend is stateless with respect to carts: each call sends the
//! client's mapping and receives the result.
//!
//! | call | method | path | body | response |
//! |---|---|---|---|---|
//! | [`add_item`](CartEndpoints::add_item) | POST | `/api/cart/add` | `{product_id, quantity, cart}` | `{cart}` |
//! | [`get_cart`](CartEndpoints::get_cart) | POST | `/api/cart` | mapping | details |
//! | [`update_item`](CartEndpoints::update_item) | PUT | `/api/cart/update` | `{product_id, quantity, cart}` | `{cart}` |
//! | [`remove_item`](CartEndpoints::remove_item) | DELETE | `/api/cart/remove/{id}` | `{cart}` | `{cart}` |

use reqwest::Method;
use tracing::debug;

use shopcart_core::domain::{
    CartDetails, CartItemRequest, CartMapping, CartResponse, CartSnapshotRequest, ProductId,
};

use crate::client::ApiClient;
use crate::ApiError;

/// Cart call sites, borrowed from an [`ApiClient`]
pub struct CartEndpoints<'a> {
    client: &'a ApiClient,
}

impl<'a> CartEndpoints<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Adds a product on top of the cart carried in `request`
    pub async fn add_item(&self, request: &CartItemRequest) -> Result<CartResponse, ApiError> {
        debug!(
            product_id = %request.product_id,
            quantity = %request.quantity,
            lines = request.cart.len(),
            "Adding item to cart"
        );
        self.client
            .send(Method::POST, "/api/cart/add", Some(request))
            .await
    }

    /// Computes the details projection of `cart`
    pub async fn get_cart(&self, cart: &CartMapping) -> Result<CartDetails, ApiError> {
        self.client.send(Method::POST, "/api/cart", Some(cart)).await
    }

    /// Sets the quantity of a product in the cart carried in `request`
    pub async fn update_item(&self, request: &CartItemRequest) -> Result<CartResponse, ApiError> {
        debug!(
            product_id = %request.product_id,
            quantity = %request.quantity,
            "Updating cart item"
        );
        self.client
            .send(Method::PUT, "/api/cart/update", Some(request))
            .await
    }

    /// Removes a product from the cart carried in `request`
    ///
    /// The cart snapshot travels in the body of the DELETE request.
    pub async fn remove_item(
        &self,
        product_id: ProductId,
        request: &CartSnapshotRequest,
    ) -> Result<CartResponse, ApiError> {
        debug!(%product_id, "Removing item from cart");
        self.client
            .send(
                Method::DELETE,
                &format!("/api/cart/remove/{product_id}"),
                Some(request),
            )
            .await
    }
}

//! Cart store
//!
//! The [`CartStore`] owns the client-side cart: the product → quantity
//! mapping, the server-computed details projection and a loading indicator.
//!
//! ## Mutation protocol
//!
//! Every mutation (add, update, remove) follows the same four steps:
//!
//! 1. **Snapshot** the current mapping
//! 2. **Mutate remotely**: send the snapshot plus the change to the backend
//! 3. **Replace**: persist the `cart` returned by the backend and adopt it
//! 4. **Refresh** the details projection
//!
//! The client never computes the post-mutation mapping itself. A response
//! without a `cart` field fails the action and leaves the state untouched.
//!
//! ## Concurrency
//!
//! Mutations are serialized through a FIFO gate held for the whole sequence,
//! so a mutation always snapshots the result of the one before it. Getters
//! never wait on the gate.
//!
//! ## Error reporting
//!
//! The plain actions (`add_to_cart`, ...) log failures and return `bool`.
//! The `try_*` variants return the underlying [`CartError`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use shopcart_core::domain::{
    CartDetails, CartItemRequest, CartMapping, CartResponse, CartSnapshotRequest, DomainError,
    ProductId, Quantity,
};
use shopcart_core::ports::{ICartApi, ILocalStorage};

use crate::CartError;

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Default)]
struct CartState {
    /// Authoritative product → quantity mapping
    items: CartMapping,
    /// Last fetched projection; `None` until fetched or after a clear
    details: Option<CartDetails>,
}

/// Decrements the in-flight counter when dropped
struct LoadingGuard<'a>(&'a AtomicUsize);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

// ============================================================================
// CartStore
// ============================================================================

/// Client-side shopping cart synchronized with the storefront backend
///
/// Constructed once at application start and shared behind an `Arc`.
///
/// ## Dependencies
///
/// - `api`: remote cart calls (ICartApi)
/// - `storage`: persistence of the mapping (ILocalStorage)
/// - `storage_key`: key the mapping is stored under
pub struct CartStore {
    api: Arc<dyn ICartApi>,
    storage: Arc<dyn ILocalStorage>,
    storage_key: String,
    state: RwLock<CartState>,
    /// Serializes mutations in arrival order
    gate: Mutex<()>,
    /// Number of actions currently awaiting I/O
    in_flight: AtomicUsize,
    closed: AtomicBool,
}

impl CartStore {
    /// Creates a store with an empty cart
    ///
    /// Call [`init_cart`](Self::init_cart) to restore a previously saved cart.
    pub fn new(
        api: Arc<dyn ICartApi>,
        storage: Arc<dyn ILocalStorage>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            api,
            storage,
            storage_key: storage_key.into(),
            state: RwLock::new(CartState::default()),
            gate: Mutex::new(()),
            in_flight: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Key the mapping is persisted under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Snapshot of the current mapping
    pub fn cart_items(&self) -> CartMapping {
        self.read().items.clone()
    }

    /// Current details projection, if one has been fetched
    pub fn cart_details(&self) -> Option<CartDetails> {
        self.read().details.clone()
    }

    /// Sum of all quantities in the mapping
    pub fn items_count(&self) -> u64 {
        self.read().items.total_quantity()
    }

    /// Total reported by the last details fetch, or 0
    pub fn total_price(&self) -> f64 {
        self.read().details.as_ref().map_or(0.0, |d| d.total)
    }

    /// Returns true if the mapping has at least one line
    pub fn has_items(&self) -> bool {
        !self.read().items.is_empty()
    }

    /// Returns true while any action is awaiting I/O
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Returns true once [`shutdown`](Self::shutdown) has been called
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Restores the saved cart from local storage and fetches its details
    ///
    /// A missing entry leaves the cart empty without contacting the server.
    /// An unreadable entry is discarded and the cart starts empty.
    pub async fn init_cart(&self) -> bool {
        report("initialize cart", self.try_init_cart().await)
    }

    /// See [`init_cart`](Self::init_cart)
    pub async fn try_init_cart(&self) -> Result<(), CartError> {
        let _gate = self.lock_mutations().await?;
        let _loading = self.begin_loading();

        let saved = self
            .storage
            .get_item(&self.storage_key)
            .await
            .map_err(CartError::Storage)?;

        let Some(text) = saved.filter(|s| !s.is_empty()) else {
            debug!(key = %self.storage_key, "No saved cart");
            return Ok(());
        };

        match CartMapping::from_json_str(&text) {
            Ok(items) => {
                info!(lines = items.len(), "Restored cart from local storage");
                self.write().items = items;
                self.refresh_details().await;
            }
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Discarding unreadable saved cart");
                self.write().items = CartMapping::new();
            }
        }
        Ok(())
    }

    /// Adds `quantity` units of a product
    ///
    /// Returns false if the quantity is zero, the call fails or the response
    /// carries no cart.
    pub async fn add_to_cart(&self, product_id: ProductId, quantity: u32) -> bool {
        report("add to cart", self.try_add_to_cart(product_id, quantity).await)
    }

    /// See [`add_to_cart`](Self::add_to_cart); returns the adopted mapping
    pub async fn try_add_to_cart(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartMapping, CartError> {
        let quantity = Quantity::new(quantity)?;
        let _gate = self.lock_mutations().await?;
        let _loading = self.begin_loading();

        let request = CartItemRequest {
            product_id,
            quantity,
            cart: self.cart_items(),
        };
        debug!(%product_id, %quantity, "Adding to cart");

        let response = self.api.add_item(&request).await.map_err(CartError::Api)?;
        self.adopt(response).await
    }

    /// Fetches the details projection for the current mapping
    ///
    /// An empty cart gets the empty projection without a server call.
    /// On failure the previous details are kept.
    pub async fn fetch_cart_details(&self) -> bool {
        report("fetch cart details", self.try_fetch_cart_details().await)
    }

    /// See [`fetch_cart_details`](Self::fetch_cart_details)
    pub async fn try_fetch_cart_details(&self) -> Result<CartDetails, CartError> {
        let _gate = self.gate.lock().await;
        self.load_details().await
    }

    /// Sets the quantity of a product
    ///
    /// Zero or a negative quantity removes the product.
    pub async fn update_quantity(&self, product_id: ProductId, quantity: i64) -> bool {
        report(
            "update cart",
            self.try_update_quantity(product_id, quantity).await,
        )
    }

    /// See [`update_quantity`](Self::update_quantity); returns the adopted mapping
    pub async fn try_update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartMapping, CartError> {
        if quantity <= 0 {
            return self.try_remove_from_cart(product_id).await;
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::InvalidQuantity(format!("{quantity} is too large")))
            .and_then(Quantity::new)?;

        let _gate = self.lock_mutations().await?;
        let _loading = self.begin_loading();

        let request = CartItemRequest {
            product_id,
            quantity,
            cart: self.cart_items(),
        };
        debug!(%product_id, %quantity, "Updating cart quantity");

        let response = self
            .api
            .update_item(&request)
            .await
            .map_err(CartError::Api)?;
        self.adopt(response).await
    }

    /// Removes a product from the cart
    pub async fn remove_from_cart(&self, product_id: ProductId) -> bool {
        report("remove from cart", self.try_remove_from_cart(product_id).await)
    }

    /// See [`remove_from_cart`](Self::remove_from_cart); returns the adopted mapping
    pub async fn try_remove_from_cart(
        &self,
        product_id: ProductId,
    ) -> Result<CartMapping, CartError> {
        let _gate = self.lock_mutations().await?;
        let _loading = self.begin_loading();

        let request = CartSnapshotRequest {
            cart: self.cart_items(),
        };
        debug!(%product_id, "Removing from cart");

        let response = self
            .api
            .remove_item(product_id, &request)
            .await
            .map_err(CartError::Api)?;
        self.adopt(response).await
    }

    /// Empties the cart locally and deletes the saved entry
    ///
    /// The server is not contacted. Details go back to `None`.
    pub async fn clear_cart(&self) -> bool {
        report("clear cart", self.try_clear_cart().await)
    }

    /// See [`clear_cart`](Self::clear_cart)
    pub async fn try_clear_cart(&self) -> Result<(), CartError> {
        let _gate = self.lock_mutations().await?;

        self.storage
            .remove_item(&self.storage_key)
            .await
            .map_err(CartError::Storage)?;

        {
            let mut state = self.write();
            state.items = CartMapping::new();
            state.details = None;
        }

        info!("Cart cleared");
        Ok(())
    }

    /// Stops accepting mutations
    ///
    /// Waits for the mutation in progress, if any. Later mutations fail
    /// with [`CartError::Closed`] without contacting the server.
    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let _gate = self.gate.lock().await;
        info!("Cart store shut down");
    }

    // ========================================================================
    // Internals (callers hold the gate)
    // ========================================================================

    /// Persists and adopts the cart returned by a mutation, then refreshes details
    async fn adopt(&self, response: CartResponse) -> Result<CartMapping, CartError> {
        let cart = response.cart.ok_or(CartError::MissingCart)?;

        let text = cart.to_json_string()?;
        self.storage
            .set_item(&self.storage_key, &text)
            .await
            .map_err(CartError::Storage)?;

        self.write().items = cart.clone();
        info!(lines = cart.len(), items = cart.total_quantity(), "Cart updated");

        self.refresh_details().await;
        Ok(cart)
    }

    /// Reloads details, logging instead of failing
    async fn refresh_details(&self) {
        if let Err(e) = self.load_details().await {
            error!(error = %e, "Error fetching cart details");
        }
    }

    async fn load_details(&self) -> Result<CartDetails, CartError> {
        let items = self.cart_items();
        if items.is_empty() {
            let details = CartDetails::empty();
            self.write().details = Some(details.clone());
            return Ok(details);
        }

        let _loading = self.begin_loading();
        let details = self.api.get_cart(&items).await.map_err(CartError::Api)?;
        debug!(
            lines = details.items.len(),
            total = details.total,
            "Fetched cart details"
        );
        self.write().details = Some(details.clone());
        Ok(details)
    }

    async fn lock_mutations(&self) -> Result<MutexGuard<'_, ()>, CartError> {
        if self.is_closed() {
            return Err(CartError::Closed);
        }
        let guard = self.gate.lock().await;
        // shutdown may have happened while queued
        if self.is_closed() {
            return Err(CartError::Closed);
        }
        Ok(guard)
    }

    fn begin_loading(&self) -> LoadingGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard(&self.in_flight)
    }

    fn read(&self) -> RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Logs a failed action and collapses the result to a success flag
fn report<T>(action: &str, result: Result<T, CartError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            error!(action, error = %e, "Cart action failed");
            false
        }
    }
}

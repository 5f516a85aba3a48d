//! shopcart Sync - Cart store
//!
//! Provides:
//! - A client-side cart kept as a product → quantity mapping
//! - Persistence of that mapping to local storage
//! - Server-authoritative mutations (every change round-trips through the backend)
//! - The cart details projection used for display
//!
//! ## Modules
//!
//! - [`store`] - [`CartStore`], its getters and its actions

pub mod store;

pub use store::CartStore;

use thiserror::Error;

use shopcart_core::domain::DomainError;

/// Errors that can occur during cart store actions
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart backend call failed (transport, status or decoding)
    #[error("Cart API error: {0:#}")]
    Api(anyhow::Error),

    /// Reading or writing local storage failed
    #[error("Local storage error: {0:#}")]
    Storage(anyhow::Error),

    /// The backend answered without a `cart` field
    #[error("Server response did not include a cart")]
    MissingCart,

    /// A domain-level error (invalid quantity, unencodable cart)
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The store has been shut down
    #[error("Cart store is shut down")]
    Closed,
}

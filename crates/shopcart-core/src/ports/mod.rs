//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the cart store and the
//! CLI depend on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`ICatalogApi`] - Read-only product and category queries
//! - [`ICartApi`] - Remote cart mutations and the cart details projection
//! - [`ILocalStorage`] - String key/value persistence for client state

pub mod cart_api;
pub mod catalog_api;
pub mod local_storage;

pub use cart_api::ICartApi;
pub use catalog_api::ICatalogApi;
pub use local_storage::ILocalStorage;

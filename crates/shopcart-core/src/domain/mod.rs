//! Domain entities and value types
//!
//! This module contains the core domain types for shopcart:
//! - Newtypes for catalog identifiers and cart quantities
//! - The cart mapping, request/response bodies and the cart details projection
//! - Catalog records (products and categories)
//! - Domain-specific error types

pub mod cart;
pub mod catalog;
pub mod errors;
pub mod newtypes;

// Re-export commonly used types
pub use cart::{
    CartDetails, CartItemRequest, CartLine, CartMapping, CartResponse, CartSnapshotRequest,
};
pub use catalog::{Category, Product};
pub use errors::DomainError;
pub use newtypes::*;

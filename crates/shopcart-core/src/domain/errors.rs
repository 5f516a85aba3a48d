//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including identifier and quantity validation and malformed cart documents.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Quantity outside the accepted range
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A serialized cart mapping could not be decoded
    #[error("Malformed cart: {0}")]
    MalformedCart(String),
}

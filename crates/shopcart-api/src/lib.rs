//! shopcart API - Storefront REST client
//!
//! Provides an async client for:
//! - Product and category listing
//! - Remote cart mutations (add, update, remove) and the cart details projection
//! - Request observation (logging and diagnostics) decoupled from the transport
//!
//! ## Modules
//!
//! - [`client`] - HTTP client with base URL, JSON headers and observer dispatch
//! - [`observer`] - Request/response/error observer hooks
//! - [`products`], [`categories`], [`cart`] - Typed call sites per resource
//! - [`provider`] - Port implementations (`ICatalogApi`, `ICartApi`)

pub mod cart;
pub mod categories;
pub mod client;
pub mod observer;
pub mod products;
pub mod provider;

pub use client::{ApiClient, ApiClientBuilder};
pub use observer::{ApiObserver, ErrorInfo, RequestInfo, ResponseInfo, TracingObserver};

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when communicating with the storefront backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}: {body}")]
    Status {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
        /// Response body text, possibly empty
        body: String,
    },

    /// The request did not complete within the configured timeout
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout, if known
        timeout: Option<Duration>,
    },

    /// A network-level error occurred
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The request body could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be constructed
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// HTTP status code for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true for a 404 response
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

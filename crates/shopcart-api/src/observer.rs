//! Request observers
//!
//! The [`ApiClient`](crate::ApiClient) invokes every registered observer
//! before a request is sent, after a successful response has been decoded,
//! and when a call fails. Observers see copies of the traffic and cannot
//! alter it.
//!
//! [`TracingObserver`] is installed by default and reports through `tracing`.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error};

/// An outbound request as seen by observers
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub method: Method,
    pub url: String,
    /// JSON body, if the call sends one
    pub body: Option<Value>,
}

/// A successful response as seen by observers
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    pub method: Method,
    pub url: String,
    pub status: u16,
    /// Decoded JSON body (`Null` for an empty body)
    pub body: Value,
}

/// A failed call as seen by observers
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub method: Method,
    pub url: String,
    /// Status code when the server answered
    pub status: Option<u16>,
    /// Response body text when the server answered
    pub body: Option<String>,
    /// Rendered error
    pub message: String,
}

/// Hook invoked by the HTTP client around every call
///
/// All methods default to no-ops so implementations override only what
/// they need.
pub trait ApiObserver: Send + Sync {
    /// Called before the request is sent
    fn on_request(&self, _request: &RequestInfo) {}

    /// Called after a 2xx response body has been parsed as JSON
    fn on_response(&self, _response: &ResponseInfo) {}

    /// Called when the call fails for any reason
    fn on_error(&self, _error: &ErrorInfo) {}
}

/// Observer that logs traffic through `tracing`
///
/// Requests and responses are logged at `debug`, failures at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ApiObserver for TracingObserver {
    fn on_request(&self, request: &RequestInfo) {
        debug!(
            method = %request.method,
            url = %request.url,
            body = ?request.body,
            "API request"
        );
    }

    fn on_response(&self, response: &ResponseInfo) {
        debug!(
            method = %response.method,
            url = %response.url,
            status = response.status,
            body = %response.body,
            "API response"
        );
    }

    fn on_error(&self, error: &ErrorInfo) {
        error!(
            method = %error.method,
            url = %error.url,
            status = ?error.status,
            body = ?error.body,
            "API error: {}",
            error.message
        );
    }
}

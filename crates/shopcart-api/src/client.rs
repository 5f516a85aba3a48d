//! Storefront HTTP client
//!
//! Provides a typed HTTP client for the storefront REST backend.
//! Handles base URL construction, JSON headers, body encoding and decoding,
//! and dispatch to the registered [`ApiObserver`]s.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shopcart_api::ApiClient;
//!
//! # async fn example() -> Result<(), shopcart_api::ApiError> {
//! let client = ApiClient::new("http://localhost:8000");
//! let products = client.products().get_all().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

use std::{sync::Arc, time::Duration};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use shopcart_core::config::ApiConfig;

use crate::cart::CartEndpoints;
use crate::categories::CategoryEndpoints;
use crate::observer::{ApiObserver, ErrorInfo, RequestInfo, ResponseInfo, TracingObserver};
use crate::products::ProductEndpoints;
use crate::ApiError;

const JSON: &str = "application/json";

// ============================================================================
// ApiClient
// ============================================================================

/// HTTP client for the storefront backend
///
/// Wraps `reqwest::Client` with a fixed base URL and JSON headers. Every
/// call goes through [`ApiClient::send`], which notifies observers and maps
/// transport failures and non-2xx statuses to [`ApiError`]. There is no
/// retry: failures are returned to the caller as-is.
pub struct ApiClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
    /// Per-request timeout applied by `client`, kept for error reporting
    timeout: Option<Duration>,
    /// Observers notified on request, response and error
    observers: Vec<Arc<dyn ApiObserver>>,
}

impl ApiClient {
    /// Creates a client for `base_url` with default settings and the
    /// [`TracingObserver`] installed
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
            timeout: None,
            observers: vec![Arc::new(TracingObserver)],
        }
    }

    /// Starts a builder for a client with custom timeout, user agent or observers
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a client from the `api` configuration section
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the HTTP client cannot be built
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Self::builder(config.base_url.clone()).user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Registers an additional observer
    pub fn add_observer(&mut self, observer: Arc<dyn ApiObserver>) {
        self.observers.push(observer);
        debug!(count = self.observers.len(), "Observer attached to ApiClient");
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured per-request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Product endpoints
    pub fn products(&self) -> ProductEndpoints<'_> {
        ProductEndpoints::new(self)
    }

    /// Category endpoints
    pub fn categories(&self) -> CategoryEndpoints<'_> {
        CategoryEndpoints::new(self)
    }

    /// Cart endpoints
    pub fn cart(&self) -> CartEndpoints<'_> {
        CartEndpoints::new(self)
    }

    /// Full URL for an API path such as `/api/products`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Creates a request builder for the given method and path
    ///
    /// Prepends the base URL and sets the JSON `Content-Type` and `Accept`
    /// headers.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
    }

    /// Sends a GET request and decodes the JSON response
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    /// Sends a request with an optional JSON body and decodes the JSON response
    ///
    /// Observers receive `on_request` before sending, then either
    /// `on_response` or `on_error`.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let request_info = RequestInfo {
            method: method.clone(),
            url: url.clone(),
            body,
        };
        self.notify(|o| o.on_request(&request_info));

        let mut builder = self.request(method.clone(), path);
        if let Some(ref body) = request_info.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = self.transport_error(&url, e);
                return Err(self.fail(&method, &url, None, None, err));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let err = self.transport_error(&url, e);
                return Err(self.fail(&method, &url, Some(status.as_u16()), None, err));
            }
        };

        if !status.is_success() {
            let err = ApiError::Status {
                status: status.as_u16(),
                url: url.clone(),
                body: text.clone(),
            };
            return Err(self.fail(&method, &url, Some(status.as_u16()), Some(text), err));
        }

        let value: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    let err = ApiError::InvalidResponse(format!("{url}: {e}"));
                    return Err(self.fail(&method, &url, Some(status.as_u16()), Some(text), err));
                }
            }
        };

        let response_info = ResponseInfo {
            method: method.clone(),
            url: url.clone(),
            status: status.as_u16(),
            body: value,
        };
        self.notify(|o| o.on_response(&response_info));

        serde_json::from_value(response_info.body).map_err(|e| {
            let err = ApiError::InvalidResponse(format!("{url}: {e}"));
            self.fail(&method, &url, Some(status.as_u16()), None, err)
        })
    }

    fn notify(&self, f: impl Fn(&dyn ApiObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }

    /// Reports an error to observers and hands it back for returning
    fn fail(
        &self,
        method: &Method,
        url: &str,
        status: Option<u16>,
        body: Option<String>,
        err: ApiError,
    ) -> ApiError {
        let info = ErrorInfo {
            method: method.clone(),
            url: url.to_string(),
            status,
            body,
            message: err.to_string(),
        };
        self.notify(|o| o.on_error(&info));
        err
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            ApiError::NetworkError(err)
        }
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ============================================================================
// ApiClientBuilder
// ============================================================================

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    observers: Vec<Arc<dyn ApiObserver>>,
    tracing: bool,
}

impl ApiClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
            observers: Vec::new(),
            tracing: true,
        }
    }

    /// Sets a per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds an observer after the default one
    pub fn observer(mut self, observer: Arc<dyn ApiObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Leaves out the default [`TracingObserver`]
    pub fn without_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// Builds the client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if reqwest rejects the settings
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ref user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;

        let mut observers: Vec<Arc<dyn ApiObserver>> = Vec::new();
        if self.tracing {
            observers.push(Arc::new(TracingObserver));
        }
        observers.extend(self.observers);

        Ok(ApiClient {
            client,
            base_url: normalize_base_url(self.base_url),
            timeout: self.timeout,
            observers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let client = ApiClient::new("http://localhost:8000");
        let request = client
            .request(Method::GET, "/api/products")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/products");

        let content_type = request.headers().get("content-type").unwrap();
        assert_eq!(content_type.to_str().unwrap(), "application/json");
        let accept = request.headers().get("accept").unwrap();
        assert_eq!(accept.to_str().unwrap(), "application/json");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://shop.example.com/ ");
        assert_eq!(client.base_url(), "https://shop.example.com");
        assert_eq!(
            client.url("/api/cart/add"),
            "https://shop.example.com/api/cart/add"
        );
    }

    #[test]
    fn test_from_config_applies_timeout() {
        let config = ApiConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: Some(7),
            user_agent: "shopcart-test".to_string(),
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(7)));
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_default_client_has_tracing_observer() {
        let client = ApiClient::new("http://localhost");
        assert_eq!(client.observers.len(), 1);
        assert!(client.timeout().is_none());
    }

    #[test]
    fn test_builder_observers() {
        let client = ApiClient::builder("http://localhost")
            .without_tracing()
            .build()
            .unwrap();
        assert!(client.observers.is_empty());

        let mut client = ApiClient::builder("http://localhost")
            .observer(Arc::new(TracingObserver))
            .build()
            .unwrap();
        assert_eq!(client.observers.len(), 2);
        client.add_observer(Arc::new(TracingObserver));
        assert_eq!(client.observers.len(), 3);
    }
}

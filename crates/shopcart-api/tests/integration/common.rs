//! Shared test helpers for storefront API integration tests
//!
//! Provides wiremock-based mock server setup for the storefront endpoints.
//! Each helper mounts the necessary mock endpoints; `setup_api_mock`
//! returns a configured ApiClient pointing at the mock server.

use std::sync::{Arc, Mutex};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopcart_api::{ApiClient, ApiObserver, ErrorInfo, RequestInfo, ResponseInfo};

/// One observed event, flattened for assertions
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request { method: String, url: String },
    Response { url: String, status: u16 },
    Error { url: String, status: Option<u16> },
}

/// Observer that records every event it sees
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl ApiObserver for RecordingObserver {
    fn on_request(&self, request: &RequestInfo) {
        self.events.lock().unwrap().push(Event::Request {
            method: request.method.to_string(),
            url: request.url.clone(),
        });
    }

    fn on_response(&self, response: &ResponseInfo) {
        self.events.lock().unwrap().push(Event::Response {
            url: response.url.clone(),
            status: response.status,
        });
    }

    fn on_error(&self, error: &ErrorInfo) {
        self.events.lock().unwrap().push(Event::Error {
            url: error.url.clone(),
            status: error.status,
        });
    }
}

/// Starts a mock server and returns a (MockServer, ApiClient) pair.
pub async fn setup_api_mock() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

/// Like [`setup_api_mock`], with a recording observer attached.
pub async fn setup_observed_mock() -> (MockServer, ApiClient, Arc<RecordingObserver>) {
    let server = MockServer::start().await;
    let observer = Arc::new(RecordingObserver::default());
    let client = ApiClient::builder(server.uri())
        .without_tracing()
        .observer(observer.clone())
        .build()
        .expect("build client");
    (server, client, observer)
}

/// Sample product JSON as served by the backend
pub fn product_json(id: u64, name: &str, price: f64, category_id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "price": price,
        "category_id": category_id,
        "image_url": format!("https://cdn.example.com/{id}.png"),
        "created_at": "2025-10-01T12:00:00"
    })
}

/// Mounts `GET {route}` answering `body` with status 200.
pub async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

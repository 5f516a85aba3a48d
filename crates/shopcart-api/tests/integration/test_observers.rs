//! Integration tests for observer notifications

use shopcart_api::ApiClient;
use shopcart_core::domain::{CartMapping, ProductId};
use std::sync::Arc;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::common::{self, Event, RecordingObserver};

#[tokio::test]
async fn test_success_notifies_request_then_response() {
    let (server, client, observer) = common::setup_observed_mock().await;

    common::mount_get(&server, "/api/categories", serde_json::json!([])).await;

    client.categories().get_all().await.expect("list categories");

    let url = format!("{}/api/categories", server.uri());
    assert_eq!(
        observer.events(),
        vec![
            Event::Request {
                method: "GET".to_string(),
                url: url.clone(),
            },
            Event::Response { url, status: 200 },
        ]
    );
}

#[tokio::test]
async fn test_status_error_notifies_request_then_error() {
    let (server, client, observer) = common::setup_observed_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/products/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let _ = client.products().get_by_id(ProductId::new(5)).await;

    let url = format!("{}/api/products/5", server.uri());
    assert_eq!(
        observer.events(),
        vec![
            Event::Request {
                method: "GET".to_string(),
                url: url.clone(),
            },
            Event::Error {
                url,
                status: Some(404),
            },
        ]
    );
}

#[tokio::test]
async fn test_cart_call_reports_method() {
    let (server, client, observer) = common::setup_observed_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [],
            "total": 0,
            "items_count": 0
        })))
        .mount(&server)
        .await;

    client
        .cart()
        .get_cart(&CartMapping::new())
        .await
        .expect("get cart");

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        Event::Request { method, .. } if method == "POST"
    ));
}

#[tokio::test]
async fn test_transport_failure_notifies_error_without_status() {
    let observer = Arc::new(RecordingObserver::default());
    let client = ApiClient::builder("http://127.0.0.1:9")
        .without_tracing()
        .observer(observer.clone())
        .build()
        .expect("build client");

    let _ = client.products().get_all().await;

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        Event::Error {
            url: "http://127.0.0.1:9/api/products".to_string(),
            status: None,
        }
    );
}

#[tokio::test]
async fn test_every_observer_is_notified() {
    let (server, client, first) = common::setup_observed_mock().await;
    let second = Arc::new(RecordingObserver::default());
    let mut client = client;
    client.add_observer(second.clone());

    common::mount_get(&server, "/api/products", serde_json::json!([])).await;

    client.products().get_all().await.expect("list products");

    assert_eq!(first.events(), second.events());
    assert_eq!(second.events().len(), 2);
}

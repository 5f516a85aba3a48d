//! Integration tests for cart endpoints

use std::time::Duration;

use shopcart_api::{ApiClient, ApiError};
use shopcart_core::domain::{
    CartItemRequest, CartMapping, CartSnapshotRequest, ProductId, Quantity,
};
use shopcart_core::ports::ICartApi;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::common;

fn mapping(entries: &[(u64, u32)]) -> CartMapping {
    entries
        .iter()
        .map(|&(id, qty)| (ProductId::new(id), Quantity::new(qty).unwrap()))
        .collect()
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_add_item_posts_snapshot() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .and(body_json(serde_json::json!({
            "product_id": 42,
            "quantity": 2,
            "cart": {"7": 1}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"cart": {"7": 1, "42": 2}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CartItemRequest {
        product_id: ProductId::new(42),
        quantity: Quantity::new(2).unwrap(),
        cart: mapping(&[(7, 1)]),
    };
    let response = client.cart().add_item(&request).await.expect("add item");

    assert_eq!(response.cart, Some(mapping(&[(7, 1), (42, 2)])));
}

#[tokio::test]
async fn test_update_item_uses_put() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("PUT"))
        .and(path("/api/cart/update"))
        .and(body_json(serde_json::json!({
            "product_id": 42,
            "quantity": 5,
            "cart": {"42": 2}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"cart": {"42": 5}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CartItemRequest {
        product_id: ProductId::new(42),
        quantity: Quantity::new(5).unwrap(),
        cart: mapping(&[(42, 2)]),
    };
    let response = client.update_item(&request).await.expect("update item");

    assert_eq!(response.cart, Some(mapping(&[(42, 5)])));
}

#[tokio::test]
async fn test_remove_item_sends_delete_with_body() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("DELETE"))
        .and(path("/api/cart/remove/42"))
        .and(body_json(serde_json::json!({"cart": {"7": 1, "42": 2}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"cart": {"7": 1}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CartSnapshotRequest {
        cart: mapping(&[(7, 1), (42, 2)]),
    };
    let response = client
        .cart()
        .remove_item(ProductId::new(42), &request)
        .await
        .expect("remove item");

    assert_eq!(response.cart, Some(mapping(&[(7, 1)])));
}

#[tokio::test]
async fn test_response_without_cart_field() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})),
        )
        .mount(&server)
        .await;

    let request = CartItemRequest {
        product_id: ProductId::new(1),
        quantity: Quantity::ONE,
        cart: CartMapping::new(),
    };
    let response = client.cart().add_item(&request).await.expect("add item");

    assert!(response.cart.is_none());
}

#[tokio::test]
async fn test_returned_cart_drops_zero_quantities() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("PUT"))
        .and(path("/api/cart/update"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"cart": {"1": 0, "2": 3}})),
        )
        .mount(&server)
        .await;

    let request = CartItemRequest {
        product_id: ProductId::new(2),
        quantity: Quantity::new(3).unwrap(),
        cart: mapping(&[(1, 1), (2, 1)]),
    };
    let cart = client
        .cart()
        .update_item(&request)
        .await
        .expect("update item")
        .cart
        .expect("cart field");

    assert_eq!(cart, mapping(&[(2, 3)]));
}

// ============================================================================
// Details
// ============================================================================

#[tokio::test]
async fn test_get_cart_posts_mapping() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .and(body_json(serde_json::json!({"42": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {"product_id": 42, "quantity": 2, "name": "Lamp", "price": 30.0, "subtotal": 60.0}
            ],
            "total": 60.0,
            "items_count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let details = client
        .cart()
        .get_cart(&mapping(&[(42, 2)]))
        .await
        .expect("get cart");

    assert_eq!(details.items.len(), 1);
    assert_eq!(details.items[0].subtotal, Some(60.0));
    assert_eq!(details.total, 60.0);
    assert_eq!(details.items_count, 2);
}

#[tokio::test]
async fn test_get_cart_for_empty_mapping() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [],
            "total": 0,
            "items_count": 0
        })))
        .mount(&server)
        .await;

    let details = client.get_cart(&CartMapping::new()).await.expect("get cart");
    assert!(details.items.is_empty());
    assert_eq!(details.total, 0.0);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_bad_request_is_status_error() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Product not available"})),
        )
        .mount(&server)
        .await;

    let request = CartItemRequest {
        product_id: ProductId::new(3),
        quantity: Quantity::ONE,
        cart: CartMapping::new(),
    };
    let err = client.cart().add_item(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = wiremock::MockServer::start().await;
    let client = ApiClient::builder(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .expect("build client");

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"items": [], "total": 0, "items_count": 0}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.cart().get_cart(&CartMapping::new()).await.unwrap_err();

    match err {
        ApiError::Timeout { url, timeout } => {
            assert!(url.ends_with("/api/cart"));
            assert_eq!(timeout, Some(Duration::from_millis(200)));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

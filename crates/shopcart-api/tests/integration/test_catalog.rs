//! Integration tests for product and category endpoints

use shopcart_api::ApiError;
use shopcart_core::domain::{CategoryId, ProductId};
use shopcart_core::ports::ICatalogApi;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

use crate::common;

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_get_all_products() {
    let (server, client) = common::setup_api_mock().await;

    common::mount_get(
        &server,
        "/api/products",
        serde_json::json!([
            common::product_json(1, "Mug", 9.5, 2),
            common::product_json(2, "Teapot", 24.0, 2),
        ]),
    )
    .await;

    let products = client.products().get_all().await.expect("list products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[1].name, "Teapot");
    assert_eq!(products[1].category_id, Some(CategoryId::new(2)));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (server, client) = common::setup_api_mock().await;

    common::mount_get(&server, "/api/products/42", common::product_json(42, "Lamp", 30.0, 5))
        .await;

    let product = client
        .products()
        .get_by_id(ProductId::new(42))
        .await
        .expect("get product");

    assert_eq!(product.id, ProductId::new(42));
    assert_eq!(product.price, 30.0);
    assert!(product.created_at.is_some());
}

#[tokio::test]
async fn test_get_products_by_category() {
    let (server, client) = common::setup_api_mock().await;

    common::mount_get(
        &server,
        "/api/products/category/5",
        serde_json::json!([common::product_json(42, "Lamp", 30.0, 5)]),
    )
    .await;

    let products = client
        .products()
        .get_by_category(CategoryId::new(5))
        .await
        .expect("list by category");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].category_id, Some(CategoryId::new(5)));
}

#[tokio::test]
async fn test_requests_carry_json_headers() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client.products().get_all().await.expect("list products");
    assert!(products.is_empty());
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_get_all_categories() {
    let (server, client) = common::setup_api_mock().await;

    common::mount_get(
        &server,
        "/api/categories",
        serde_json::json!([
            {"id": 1, "name": "Kitchen", "slug": "kitchen"},
            {"id": 2, "name": "Garden"}
        ]),
    )
    .await;

    let categories = client.categories().get_all().await.expect("list categories");

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].slug.as_deref(), Some("kitchen"));
    assert!(categories[1].slug.is_none());
}

#[tokio::test]
async fn test_get_category_through_port() {
    let (server, client) = common::setup_api_mock().await;

    common::mount_get(
        &server,
        "/api/categories/2",
        serde_json::json!({"id": 2, "name": "Garden", "description": "Outdoor"}),
    )
    .await;

    let category = client
        .get_category(CategoryId::new(2))
        .await
        .expect("get category");

    assert_eq!(category.name, "Garden");
    assert_eq!(category.description.as_deref(), Some("Outdoor"));
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn test_product_not_found() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/products/999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"detail": "Product not found"})),
        )
        .mount(&server)
        .await;

    let err = client
        .products()
        .get_by_id(ProductId::new(999))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        ApiError::Status { status, url, body } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/products/999"));
            assert!(body.contains("Product not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_through_port_can_be_downcast() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_product(ProductId::new(7)).await.unwrap_err();
    let api_err = err.downcast_ref::<ApiError>().expect("ApiError inside anyhow");
    assert!(api_err.is_not_found());
}

#[tokio::test]
async fn test_malformed_json_is_invalid_response() {
    let (server, client) = common::setup_api_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.products().get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unexpected_shape_is_invalid_response() {
    let (server, client) = common::setup_api_mock().await;

    common::mount_get(&server, "/api/categories", serde_json::json!({"items": []})).await;

    let err = client.categories().get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 9 (discard) on test machines
    let client = shopcart_api::ApiClient::new("http://127.0.0.1:9");

    let err = client.products().get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError(_)));
}

//! Integration tests for SqliteLocalStorage
//!
//! Most tests use an in-memory database; the persistence tests reopen a
//! database file in a temporary directory.

use shopcart_cache::{DatabasePool, SqliteLocalStorage};
use shopcart_core::domain::{CartMapping, ProductId, Quantity};
use shopcart_core::ports::ILocalStorage;

// ============================================================================
// Test helpers
// ============================================================================

async fn setup() -> SqliteLocalStorage {
    let pool = DatabasePool::in_memory()
        .await
        .expect("Failed to create in-memory database");
    SqliteLocalStorage::new(pool.pool().clone())
}

// ============================================================================
// Basic operations
// ============================================================================

#[tokio::test]
async fn test_missing_key_returns_none() {
    let storage = setup().await;
    assert!(storage.get_item("shopping_cart").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_then_get() {
    let storage = setup().await;

    storage.set_item("shopping_cart", r#"{"42":2}"#).await.unwrap();

    let value = storage.get_item("shopping_cart").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"{"42":2}"#));
}

#[tokio::test]
async fn test_set_replaces_previous_value() {
    let storage = setup().await;

    storage.set_item("shopping_cart", r#"{"1":1}"#).await.unwrap();
    storage.set_item("shopping_cart", r#"{"1":3}"#).await.unwrap();

    let value = storage.get_item("shopping_cart").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"{"1":3}"#));
    assert_eq!(storage.keys().await.unwrap(), vec!["shopping_cart"]);
}

#[tokio::test]
async fn test_remove_item() {
    let storage = setup().await;

    storage.set_item("a", "1").await.unwrap();
    storage.set_item("b", "2").await.unwrap();
    storage.remove_item("a").await.unwrap();

    assert!(storage.get_item("a").await.unwrap().is_none());
    assert_eq!(storage.get_item("b").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_remove_missing_key_is_ok() {
    let storage = setup().await;
    storage.remove_item("never-set").await.unwrap();
}

#[tokio::test]
async fn test_values_are_stored_verbatim() {
    let storage = setup().await;

    // Storage does not validate; decoding is the caller's concern
    storage.set_item("shopping_cart", "not json {").await.unwrap();
    assert_eq!(
        storage.get_item("shopping_cart").await.unwrap().as_deref(),
        Some("not json {")
    );
}

#[tokio::test]
async fn test_keys_are_sorted() {
    let storage = setup().await;

    storage.set_item("zeta", "z").await.unwrap();
    storage.set_item("alpha", "a").await.unwrap();

    assert_eq!(storage.keys().await.unwrap(), vec!["alpha", "zeta"]);
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("storage.db");

    let cart: CartMapping = [(ProductId::new(42), Quantity::new(2).unwrap())]
        .into_iter()
        .collect();

    {
        let pool = DatabasePool::new(&db_path).await.unwrap();
        let storage = SqliteLocalStorage::new(pool.pool().clone());
        storage
            .set_item("shopping_cart", &cart.to_json_string().unwrap())
            .await
            .unwrap();
        pool.close().await;
    }

    let pool = DatabasePool::new(&db_path).await.unwrap();
    let storage = SqliteLocalStorage::new(pool.pool().clone());
    let stored = storage.get_item("shopping_cart").await.unwrap().unwrap();

    assert_eq!(CartMapping::from_json_str(&stored).unwrap(), cart);
}

#[tokio::test]
async fn test_removal_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("storage.db");

    {
        let pool = DatabasePool::new(&db_path).await.unwrap();
        let storage = SqliteLocalStorage::new(pool.pool().clone());
        storage.set_item("shopping_cart", "{}").await.unwrap();
        storage.remove_item("shopping_cart").await.unwrap();
        pool.close().await;
    }

    let pool = DatabasePool::new(&db_path).await.unwrap();
    let storage = SqliteLocalStorage::new(pool.pool().clone());
    assert!(storage.get_item("shopping_cart").await.unwrap().is_none());
}

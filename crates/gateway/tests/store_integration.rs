//! Gateway <-> store integration
//!
//! Drives the gateway contract against the store simulator, including
//! the failure modes: absence as `Ok(None)`, transport failure as
//! `RemoteUnavailable`, idempotent delete, full-overwrite update.

use std::sync::Arc;

use agora_core::{Category, ContactDetails, ProductDraft, ProductId, SellerId};
use agora_gateway::{GatewayError, ProductGateway};
use rust_decimal_macros::dec;
use store_sim::MemoryStore;

fn draft(name: &str, seller: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: dec!(1200),
        description: "like new".to_string(),
        image_url: "https://example.com/item.jpg".to_string(),
        category: Category::Books,
        seller_id: SellerId::new(seller),
        contact: ContactDetails::from_fields("555-0101", "", ""),
    }
}

#[tokio::test]
async fn create_then_fetch_round_trip() {
    let store = MemoryStore::new();
    let gateway = ProductGateway::new(Arc::new(store));

    let id = gateway.create(draft("Linear Algebra", "s1")).await.unwrap();

    let all = gateway.fetch_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);

    let one = gateway.fetch_one(&id).await.unwrap().unwrap();
    assert_eq!(one.name, "Linear Algebra");
    assert_eq!(one.seller_id, SellerId::new("s1"));
}

#[tokio::test]
async fn fetch_one_distinguishes_absence_from_transport_failure() {
    let store = MemoryStore::new();
    let gateway = ProductGateway::new(Arc::new(store.clone()));
    let missing = ProductId::new("no-such-doc");

    // Absent document: not an error
    assert_eq!(gateway.fetch_one(&missing).await, Ok(None));

    // Unreachable backend: an error
    store.set_offline(true);
    assert!(matches!(
        gateway.fetch_one(&missing).await,
        Err(GatewayError::RemoteUnavailable(_))
    ));
}

#[tokio::test]
async fn fetch_by_seller_returns_only_that_seller() {
    let store = MemoryStore::new();
    store.seed(draft("A", "s1")).await;
    store.seed(draft("B", "s2")).await;
    let gateway = ProductGateway::new(Arc::new(store));

    let mine = gateway.fetch_by_seller(&SellerId::new("s2")).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "B");
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let store = MemoryStore::new();
    let id = store.seed(draft("Old title", "s1")).await;
    let gateway = ProductGateway::new(Arc::new(store));

    let mut edited = draft("New title", "s1");
    edited.price = dec!(999);
    gateway.update(&id, edited).await.unwrap();

    let product = gateway.fetch_one(&id).await.unwrap().unwrap();
    assert_eq!(product.name, "New title");
    assert_eq!(product.price, dec!(999));
    assert!(product.updated_at.is_some());
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let store = MemoryStore::new();
    let gateway = ProductGateway::new(Arc::new(store));
    let missing = ProductId::new("gone");

    let err = gateway.update(&missing, draft("X", "s1")).await.unwrap_err();
    assert_eq!(err, GatewayError::NotFound(missing));
}

#[tokio::test]
async fn delete_is_idempotent_in_effect() {
    let store = MemoryStore::new();
    let id = store.seed(draft("A", "s1")).await;
    let gateway = ProductGateway::new(Arc::new(store));

    gateway.delete(&id).await.unwrap();
    // Second delete of the same id still succeeds
    gateway.delete(&id).await.unwrap();
    assert_eq!(gateway.fetch_one(&id).await, Ok(None));
}

#[tokio::test]
async fn backend_schema_rejection_propagates_unchanged() {
    let store = MemoryStore::new();
    let gateway = ProductGateway::new(Arc::new(store));

    assert!(matches!(
        gateway.create(draft("", "s1")).await,
        Err(GatewayError::ValidationRejected(_))
    ));
}

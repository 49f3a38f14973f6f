use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use agora_core::{Product, ProductDraft, ProductId, SellerId, Timestamp};
use agora_ports::{DocumentStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory products collection
///
/// Documents are kept in insertion order, which is what the hosted
/// store happens to return for unfiltered reads. Callers must not rely
/// on it.
#[derive(Default)]
struct Collection {
    docs: Vec<Product>,
}

impl Collection {
    fn position(&self, id: &ProductId) -> Option<usize> {
        self.docs.iter().position(|p| &p.id == id)
    }
}

/// In-memory `DocumentStore` implementation
///
/// Cheap to clone via `Arc`; all state is shared.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collection: Arc<RwLock<Collection>>,
    offline: Arc<AtomicBool>,
    write_calls: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backend being unreachable: every subsequent call
    /// fails with `RemoteUnavailable` until switched back
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of mutating calls (insert/replace/remove) that reached
    /// the store, including failed ones
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Insert a fixture directly, bypassing the port and its counters.
    /// Returns the minted id.
    pub async fn seed(&self, draft: ProductDraft) -> ProductId {
        let id = Self::mint_id();
        let product = draft.into_product(id.clone(), Utc::now());
        self.collection.write().await.docs.push(product);
        id
    }

    fn mint_id() -> ProductId {
        ProductId::new(Uuid::new_v4().to_string())
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::RemoteUnavailable(
                "simulated network failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// Backend-side schema rules, applied on top of whatever the
    /// client already validated
    fn check_schema(draft: &ProductDraft) -> StoreResult<()> {
        if draft.name.is_empty() {
            return Err(StoreError::ValidationRejected(
                "name must be non-empty".to_string(),
            ));
        }
        if draft.price < Decimal::ONE {
            return Err(StoreError::ValidationRejected(
                "price must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Product>> {
        self.check_online()?;
        Ok(self.collection.read().await.docs.clone())
    }

    async fn list_by_seller(&self, seller_id: &SellerId) -> StoreResult<Vec<Product>> {
        self.check_online()?;
        Ok(self
            .collection
            .read()
            .await
            .docs
            .iter()
            .filter(|p| &p.seller_id == seller_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        self.check_online()?;
        let collection = self.collection.read().await;
        Ok(collection.position(id).map(|i| collection.docs[i].clone()))
    }

    async fn insert(&self, draft: ProductDraft) -> StoreResult<ProductId> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Self::check_schema(&draft)?;
        let id = Self::mint_id();
        let product = draft.into_product(id.clone(), Utc::now());
        debug!("store-sim: insert {id}");
        self.collection.write().await.docs.push(product);
        Ok(id)
    }

    async fn replace(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        updated_at: Timestamp,
    ) -> StoreResult<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Self::check_schema(&draft)?;
        let mut collection = self.collection.write().await;
        let Some(index) = collection.position(id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        // seller_id is immutable after creation; the backend's security
        // rules reject a write that tries to change it
        if collection.docs[index].seller_id != draft.seller_id {
            return Err(StoreError::ValidationRejected(
                "seller_id cannot change".to_string(),
            ));
        }
        let created_at = collection.docs[index].created_at;
        let mut product = draft.into_product(id.clone(), created_at);
        product.updated_at = Some(updated_at);
        debug!("store-sim: replace {id}");
        collection.docs[index] = product;
        Ok(())
    }

    async fn remove(&self, id: &ProductId) -> StoreResult<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let mut collection = self.collection.write().await;
        if let Some(index) = collection.position(id) {
            debug!("store-sim: remove {id}");
            collection.docs.remove(index);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MemoryStore"
    }
}

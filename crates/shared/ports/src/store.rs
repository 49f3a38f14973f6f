use agora_core::{Product, ProductDraft, ProductId, SellerId, Timestamp};
use async_trait::async_trait;

use crate::error::StoreResult;

/// Port for the hosted document store holding the products collection
///
/// This is the client-library surface of the remote store, kept opaque:
/// implementations may talk to a real backend or an in-memory simulator.
/// Only the gateway is permitted to call through this port.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read every document in the collection. The returned order is
    /// whatever the store produced and carries no guarantee.
    async fn list_all(&self) -> StoreResult<Vec<Product>>;

    /// Read documents whose seller_id field equals the given seller
    async fn list_by_seller(&self, seller_id: &SellerId) -> StoreResult<Vec<Product>>;

    /// Point lookup. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: &ProductId) -> StoreResult<Option<Product>>;

    /// Insert a new document; the store assigns the id and the
    /// creation timestamp
    async fn insert(&self, draft: ProductDraft) -> StoreResult<ProductId>;

    /// Replace an existing document wholesale (not a merge-patch),
    /// stamping the client-assigned update time. The store keeps its
    /// own creation timestamp. Fails with `NotFound` if the id is gone.
    async fn replace(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        updated_at: Timestamp,
    ) -> StoreResult<()>;

    /// Remove a document. Removing an absent id succeeds.
    async fn remove(&self, id: &ProductId) -> StoreResult<()>;

    /// Implementation name for debugging
    fn name(&self) -> &str {
        "DocumentStore"
    }
}

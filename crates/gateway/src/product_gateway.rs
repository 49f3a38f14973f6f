//! Product Gateway - CRUD against the products collection
//!
//! All reads return the store's sequence untouched; display ordering is
//! the caller's concern. All mutations are single independent document
//! operations with no retry, timeout, or cancellation.

use std::sync::Arc;

use agora_core::{Product, ProductDraft, ProductId, SellerId};
use agora_ports::{DocumentStore, StoreError};
use chrono::Utc;
use log::{debug, info, warn};

use crate::error::GatewayResult;

/// The sole component issuing remote calls against the products collection
pub struct ProductGateway {
    store: Arc<dyn DocumentStore>,
}

impl ProductGateway {
    /// Create a gateway over the given store client
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read every product in the collection
    pub async fn fetch_all(&self) -> GatewayResult<Vec<Product>> {
        debug!("fetch_all: reading products collection");
        let products = self.store.list_all().await.inspect_err(|e| {
            warn!("fetch_all failed: {e}");
        })?;
        debug!("fetch_all: {} products", products.len());
        Ok(products)
    }

    /// Read the products listed by one seller
    pub async fn fetch_by_seller(&self, seller_id: &SellerId) -> GatewayResult<Vec<Product>> {
        debug!("fetch_by_seller: seller={seller_id}");
        let products = self.store.list_by_seller(seller_id).await.inspect_err(|e| {
            warn!("fetch_by_seller failed for {seller_id}: {e}");
        })?;
        debug!("fetch_by_seller: {} products for {seller_id}", products.len());
        Ok(products)
    }

    /// Point lookup by id
    ///
    /// Absence is `Ok(None)`, kept distinct from transport failure.
    pub async fn fetch_one(&self, id: &ProductId) -> GatewayResult<Option<Product>> {
        debug!("fetch_one: id={id}");
        let product = self.store.get(id).await.inspect_err(|e| {
            warn!("fetch_one failed for {id}: {e}");
        })?;
        if product.is_none() {
            debug!("fetch_one: {id} not found");
        }
        Ok(product)
    }

    /// Create a new listing; the store assigns the id and creation time
    ///
    /// The draft has already passed form validation, but the backend may
    /// still reject it against its own schema rules.
    pub async fn create(&self, draft: ProductDraft) -> GatewayResult<ProductId> {
        debug!("create: '{}' by {}", draft.name, draft.seller_id);
        let id = self.store.insert(draft).await.inspect_err(|e| {
            warn!("create failed: {e}");
        })?;
        info!("create: new product {id}");
        Ok(id)
    }

    /// Overwrite an existing listing with the full draft
    ///
    /// Full-overwrite semantics, not a merge-patch: every field of the
    /// stored document is replaced. Safe here because only the owning
    /// seller ever writes a record. Stamps `updated_at` client-side.
    pub async fn update(&self, id: &ProductId, draft: ProductDraft) -> GatewayResult<()> {
        debug!("update: id={id}");
        self.store
            .replace(id, draft, Utc::now())
            .await
            .inspect_err(|e| {
                warn!("update failed for {id}: {e}");
            })?;
        info!("update: product {id} overwritten");
        Ok(())
    }

    /// Delete a listing
    ///
    /// Idempotent in effect: deleting an id that is already gone is
    /// treated as success.
    pub async fn delete(&self, id: &ProductId) -> GatewayResult<()> {
        debug!("delete: id={id}");
        match self.store.remove(id).await {
            Ok(()) => {
                info!("delete: product {id} removed");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                debug!("delete: {id} already absent");
                Ok(())
            }
            Err(e) => {
                warn!("delete failed for {id}: {e}");
                Err(e.into())
            }
        }
    }
}

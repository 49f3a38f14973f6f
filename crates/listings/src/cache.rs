//! Listing Cache - transient snapshot of the products collection
//!
//! Holds a non-authoritative copy; the remote store is the sole source
//! of truth. Every `load` replaces the whole snapshot. There is no
//! incremental merge: after any successful mutation the correct move is
//! a fresh `load`, trading an extra round trip for guaranteed agreement
//! with the store. Do not replace this with local patching unless
//! staleness detection comes with it.

use agora_core::{Product, ProductId, SellerId};
use agora_gateway::{GatewayResult, ProductGateway};
use log::{debug, warn};

/// Which read populates the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Full collection read, for the public browse page
    All,
    /// Seller-scoped read, for the dashboard
    BySeller(SellerId),
}

/// In-memory snapshot of product documents, in received order
///
/// Distinguishes "never loaded" from "loaded and empty": both render
/// the same to an end user, but tests and flows need to tell a missing
/// snapshot apart from an empty one.
#[derive(Default)]
pub struct ListingCache {
    snapshot: Option<Vec<Product>>,
}

impl ListingCache {
    /// Create an unloaded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire snapshot with a fresh read through the gateway
    ///
    /// On failure the previous snapshot is left untouched, so a failed
    /// refresh never blanks data the user is already looking at.
    pub async fn load(
        &mut self,
        gateway: &ProductGateway,
        source: SnapshotSource,
    ) -> GatewayResult<()> {
        let products = match &source {
            SnapshotSource::All => gateway.fetch_all().await?,
            SnapshotSource::BySeller(seller_id) => gateway.fetch_by_seller(seller_id).await?,
        };
        debug!("cache load: {} products ({source:?})", products.len());
        self.snapshot = Some(Self::collapse_duplicates(products));
        Ok(())
    }

    /// Current snapshot in received order; empty when unloaded
    pub fn get(&self) -> &[Product] {
        self.snapshot.as_deref().unwrap_or(&[])
    }

    /// True once a `load` has completed since creation or the last
    /// `invalidate`
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Point lookup within the snapshot
    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.get().iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }

    /// Clear to the unloaded state
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    /// Ids are unique in the store, so duplicates in one read indicate
    /// a misbehaving backend; keep the last record seen per id
    fn collapse_duplicates(products: Vec<Product>) -> Vec<Product> {
        let mut out: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if let Some(existing) = out.iter_mut().find(|p| p.id == product.id) {
                warn!("duplicate id {} in snapshot, keeping last", product.id);
                *existing = product;
            } else {
                out.push(product);
            }
        }
        out
    }
}

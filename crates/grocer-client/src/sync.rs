//! # Product Snapshot Sync
//!
//! Owns the authoritative local snapshot of the product collection and
//! mediates every mutation against the backend.
//!
//! ## The Mutate-Then-Reload Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ProductSync Operations                              │
//! │                                                                         │
//! │  create(input) ──► POST /products ──► ok? ──► GET /products ──► swap   │
//! │  update(id, in) ─► PUT  /products/{id} ► ok? ► GET /products ──► swap   │
//! │  delete(id) ────► DELETE /products/{id} ok? ► GET /products ──► swap   │
//! │                                                                         │
//! │  Any failure, at either step: error propagates, snapshot UNTOUCHED.    │
//! │  The snapshot is replaced as a whole value, never patched in place.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Re-Fetch After Every Mutation?
//! The backend is the source of truth for generated ids and derived fields
//! (stock after automatic deduction, for instance). Re-fetching the whole
//! collection keeps the snapshot within one round trip of server state with
//! no client-side drift logic to get wrong. Do not "optimize" this into
//! optimistic local patching - that changes observable behavior whenever
//! anything else mutates the collection.
//!
//! ## Concurrency
//! Mutations are not serialized against each other. Two rapid deletes each
//! run their own mutate+reload sequence and the last reload wins - an
//! accepted race for a single-user tool. A reader always sees the old or the
//! new snapshot, never a mix.

use std::sync::Arc;

use grocer_core::{Product, ProductInput};
use tracing::{debug, info};

use crate::error::ClientResult;
use crate::remote::RemoteStore;

/// Authoritative local snapshot of the product collection.
#[derive(Debug)]
pub struct ProductSync {
    remote: Arc<RemoteStore>,
    snapshot: Vec<Product>,
}

impl ProductSync {
    /// Creates a sync core with an empty snapshot. Call [`Self::load_all`]
    /// to populate it.
    pub fn new(remote: Arc<RemoteStore>) -> Self {
        ProductSync {
            remote,
            snapshot: Vec::new(),
        }
    }

    /// The last known server state, in server order.
    pub fn snapshot(&self) -> &[Product] {
        &self.snapshot
    }

    /// Looks up a product in the snapshot by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.snapshot.iter().find(|p| p.id == id)
    }

    /// Fetches the full collection and replaces the snapshot.
    ///
    /// On failure the previous snapshot is left unchanged - the fetch
    /// completes into a local value before anything is overwritten.
    pub async fn load_all(&mut self) -> ClientResult<&[Product]> {
        let products = self.remote.list_products().await?;
        info!(count = products.len(), "product snapshot replaced");
        self.snapshot = products;
        Ok(&self.snapshot)
    }

    /// Creates a product, then resynchronizes the snapshot.
    ///
    /// Returns the created record as the backend answered it (id assigned).
    pub async fn create(&mut self, input: &ProductInput) -> ClientResult<Product> {
        debug!(name = %input.name, "creating product");
        let created = self.remote.create_product(input).await?;
        self.load_all().await?;
        Ok(created)
    }

    /// Updates a product, then resynchronizes the snapshot.
    pub async fn update(&mut self, id: &str, input: &ProductInput) -> ClientResult<Product> {
        debug!(id = %id, "updating product");
        let updated = self.remote.update_product(id, input).await?;
        self.load_all().await?;
        Ok(updated)
    }

    /// Deletes a product, then resynchronizes the snapshot.
    ///
    /// Confirmation ("really delete Milk?") is a human-facing guard that
    /// belongs to the presentation layer, not enforced here.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        debug!(id = %id, "deleting product");
        self.remote.delete_product(id).await?;
        self.load_all().await?;
        Ok(())
    }
}

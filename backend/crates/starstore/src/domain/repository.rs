//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.

use crate::domain::entities::{History, Product, Purchase};
use crate::error::StoreResult;

/// Purchase repository trait
#[trait_variant::make(PurchaseRepository: Send)]
pub trait LocalPurchaseRepository {
    /// Persist a full purchase record
    async fn create(&self, purchase: &Purchase) -> StoreResult<()>;
}

/// History repository trait
#[trait_variant::make(HistoryRepository: Send)]
pub trait LocalHistoryRepository {
    /// Persist a redacted history projection
    async fn create(&self, history: &History) -> StoreResult<()>;

    /// List all history records in the store's natural order
    async fn list_all(&self) -> StoreResult<Vec<History>>;

    /// List history records for one client (exact match)
    async fn list_by_client(&self, client_id: &str) -> StoreResult<Vec<History>>;
}

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a catalog entry
    async fn create(&self, product: &Product) -> StoreResult<()>;

    /// List all catalog entries in the store's natural order
    async fn list_all(&self) -> StoreResult<Vec<Product>>;
}

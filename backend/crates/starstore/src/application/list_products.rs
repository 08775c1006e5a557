//! List Products Use Case

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::StoreResult;
use std::sync::Arc;

/// List Products Use Case
pub struct ListProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// List all catalog entries, unfiltered
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        self.product_repo.list_all().await
    }
}

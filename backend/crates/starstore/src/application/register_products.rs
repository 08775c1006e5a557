//! Register Products Use Case
//!
//! Persists a batch of catalog entries, one independent record per item.
//! Products carry no server-generated id beyond the store's own.

use crate::application::config::StoreConfig;
use crate::application::outcome::{BatchOutcome, ItemOutcome};
use crate::application::retry::write_with_retry;
use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use std::sync::Arc;

/// Input DTO for one product item
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub title: String,
    pub price: f64,
    pub zipcode: String,
    pub seller: String,
    pub thumbnail_hd: String,
    pub date: String,
}

/// Register Products Use Case
pub struct RegisterProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
    config: Arc<StoreConfig>,
}

impl<P> RegisterProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>, config: Arc<StoreConfig>) -> Self {
        Self {
            product_repo,
            config,
        }
    }

    /// Persist a batch of products in input order, one outcome per item
    pub async fn execute(&self, batch: Vec<ProductInput>) -> BatchOutcome {
        let mut outcome = BatchOutcome::with_capacity(batch.len());

        for (index, input) in batch.into_iter().enumerate() {
            let product = Product {
                title: input.title,
                price: input.price,
                zipcode: input.zipcode,
                seller: input.seller,
                thumbnail_hd: input.thumbnail_hd,
                date: input.date,
            };

            match write_with_retry(self.config.write_retries, "product", || {
                self.product_repo.create(&product)
            })
            .await
            {
                Ok(()) => {
                    tracing::info!(title = %product.title, "Product registered");
                    outcome.push(ItemOutcome::recorded(index, None));
                }
                Err(err) => {
                    tracing::error!(index, title = %product.title, error = %err, "Product write failed");
                    outcome.push(ItemOutcome::failed(
                        index,
                        format!("product write failed: {}", err),
                    ));
                }
            }
        }

        outcome
    }
}

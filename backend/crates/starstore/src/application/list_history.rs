//! List History Use Case
//!
//! Read side of the purchase workflow. Records were redacted at write
//! time, so they are returned as-is in the store's natural order.

use crate::domain::entities::History;
use crate::domain::repository::HistoryRepository;
use crate::error::StoreResult;
use std::sync::Arc;

/// List History Use Case
pub struct ListHistoryUseCase<H>
where
    H: HistoryRepository,
{
    history_repo: Arc<H>,
}

impl<H> ListHistoryUseCase<H>
where
    H: HistoryRepository,
{
    pub fn new(history_repo: Arc<H>) -> Self {
        Self { history_repo }
    }

    /// List all history records, unfiltered
    pub async fn list_all(&self) -> StoreResult<Vec<History>> {
        self.history_repo.list_all().await
    }

    /// List history records for one client
    ///
    /// An unknown client id is not an error; it yields an empty list.
    pub async fn list_for_client(&self, client_id: &str) -> StoreResult<Vec<History>> {
        let records = self.history_repo.list_by_client(client_id).await?;
        tracing::debug!(client_id, count = records.len(), "History listed for client");
        Ok(records)
    }
}

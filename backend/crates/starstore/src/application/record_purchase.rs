//! Record Purchase Use Case
//!
//! The core workflow: each batch item fans out into a full `Purchase`
//! record and a redacted `History` projection persisted to two coupled
//! collections. One purchase id is generated per item and shared by both
//! writes; History is written only after the Purchase write succeeded.

use crate::application::config::StoreConfig;
use crate::application::outcome::{BatchOutcome, ItemOutcome};
use crate::application::retry::write_with_retry;
use crate::domain::entities::{CreditCard, History, Purchase};
use crate::domain::repository::{HistoryRepository, PurchaseRepository};
use crate::domain::value_objects::CardNumber;
use crate::error::{StoreError, StoreResult};
use std::sync::Arc;

/// Input DTO for one purchase item
///
/// All fields are optional so that a malformed item rejects only itself,
/// not the whole batch.
#[derive(Debug, Clone, Default)]
pub struct PurchaseItemInput {
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub total_to_pay: Option<f64>,
    pub card_number: Option<String>,
    pub card_holder_name: Option<String>,
    pub value: Option<f64>,
    pub cvv: Option<i32>,
    pub exp_date: Option<String>,
}

/// A purchase item that passed boundary validation
struct ValidItem {
    client_id: String,
    client_name: String,
    total_to_pay: f64,
    credit_card: CreditCard,
}

/// Record Purchase Use Case
pub struct RecordPurchaseUseCase<P, H>
where
    P: PurchaseRepository,
    H: HistoryRepository,
{
    purchase_repo: Arc<P>,
    history_repo: Arc<H>,
    config: Arc<StoreConfig>,
}

impl<P, H> RecordPurchaseUseCase<P, H>
where
    P: PurchaseRepository,
    H: HistoryRepository,
{
    pub fn new(purchase_repo: Arc<P>, history_repo: Arc<H>, config: Arc<StoreConfig>) -> Self {
        Self {
            purchase_repo,
            history_repo,
            config,
        }
    }

    /// Process a batch of purchase items in input order
    ///
    /// The batch is not atomic: every item is attempted and gets its own
    /// outcome. The response is aggregated exactly once, after all items.
    pub async fn execute(&self, batch: Vec<PurchaseItemInput>) -> BatchOutcome {
        let mut outcome = BatchOutcome::with_capacity(batch.len());

        for (index, raw) in batch.into_iter().enumerate() {
            let item = match validate_item(raw) {
                Ok(item) => item,
                Err(err) => {
                    tracing::warn!(index, error = %err, "Purchase item rejected");
                    outcome.push(ItemOutcome::rejected(index, &err));
                    continue;
                }
            };

            // One id per item, shared by the Purchase and History writes
            let purchase = Purchase::new(
                item.client_id,
                item.client_name,
                item.total_to_pay,
                item.credit_card,
            );

            if let Err(err) = self.write_purchase(&purchase).await {
                tracing::error!(
                    index,
                    purchase_id = %purchase.purchase_id,
                    error = %err,
                    "Purchase write failed"
                );
                outcome.push(ItemOutcome::failed(
                    index,
                    format!("purchase write failed: {}", err),
                ));
                continue;
            }

            let history = History::from_purchase(&purchase);
            if let Err(err) = self.write_history(&history).await {
                // Accepted inconsistency window: the Purchase is persisted
                // but its History projection is not. The item is reported
                // failed so the caller can see it.
                tracing::error!(
                    index,
                    purchase_id = %purchase.purchase_id,
                    error = %err,
                    "History write failed after purchase was persisted"
                );
                outcome.push(ItemOutcome::failed(
                    index,
                    format!("history write failed after purchase was persisted: {}", err),
                ));
                continue;
            }

            tracing::info!(
                purchase_id = %purchase.purchase_id,
                client_id = %purchase.client_id,
                "Purchase recorded"
            );
            outcome.push(ItemOutcome::recorded(index, Some(purchase.purchase_id)));
        }

        tracing::info!(
            recorded = outcome.recorded_count(),
            rejected = outcome.rejected_count(),
            failed = outcome.failed_count(),
            "Purchase batch completed"
        );

        outcome
    }

    async fn write_purchase(&self, purchase: &Purchase) -> StoreResult<()> {
        write_with_retry(self.config.write_retries, "purchase", || {
            self.purchase_repo.create(purchase)
        })
        .await
    }

    async fn write_history(&self, history: &History) -> StoreResult<()> {
        write_with_retry(self.config.write_retries, "history", || {
            self.history_repo.create(history)
        })
        .await
    }
}

/// Validate one raw batch item before any persistence attempt
fn validate_item(raw: PurchaseItemInput) -> StoreResult<ValidItem> {
    let client_id = raw.client_id.ok_or(StoreError::MissingField("client_id"))?;
    let client_name = raw
        .client_name
        .ok_or(StoreError::MissingField("client_name"))?;
    let total_to_pay = raw
        .total_to_pay
        .ok_or(StoreError::MissingField("total_to_pay"))?;
    let card_number = CardNumber::new(
        raw.card_number
            .ok_or(StoreError::MissingField("card_number"))?,
    )?;
    let card_holder_name = raw
        .card_holder_name
        .ok_or(StoreError::MissingField("card_holder_name"))?;
    let value = raw.value.ok_or(StoreError::MissingField("value"))?;
    let cvv = raw.cvv.ok_or(StoreError::MissingField("cvv"))?;
    let exp_date = raw.exp_date.ok_or(StoreError::MissingField("exp_date"))?;

    Ok(ValidItem {
        client_id,
        client_name,
        total_to_pay,
        credit_card: CreditCard {
            card_number,
            card_holder_name,
            value,
            cvv,
            exp_date,
        },
    })
}

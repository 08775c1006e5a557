//! Batch Outcomes
//!
//! Per-item results of a batch operation. A batch is never atomic: each
//! item succeeds or fails on its own, and the caller gets one outcome per
//! input item, in input order.

use crate::error::StoreError;
use kernel::id::PurchaseId;

/// What happened to one batch item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Both writes (or the single product write) completed
    Recorded,
    /// Validation rejected the item before any persistence attempt
    Rejected,
    /// A store write failed after validation passed
    Failed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Recorded => "recorded",
            ItemStatus::Rejected => "rejected",
            ItemStatus::Failed => "failed",
        }
    }
}

/// Outcome of one batch item
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    /// Position of the item in the submitted batch
    pub index: usize,
    pub status: ItemStatus,
    /// Server-generated id, present only for recorded purchases
    pub purchase_id: Option<PurchaseId>,
    /// Failure reason, present unless the item was recorded
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn recorded(index: usize, purchase_id: Option<PurchaseId>) -> Self {
        Self {
            index,
            status: ItemStatus::Recorded,
            purchase_id,
            error: None,
        }
    }

    pub fn rejected(index: usize, error: &StoreError) -> Self {
        Self {
            index,
            status: ItemStatus::Rejected,
            purchase_id: None,
            error: Some(error.to_string()),
        }
    }

    pub fn failed(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            status: ItemStatus::Failed,
            purchase_id: None,
            error: Some(message.into()),
        }
    }
}

/// Aggregated outcomes of one batch request
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub items: Vec<ItemOutcome>,
}

impl BatchOutcome {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, outcome: ItemOutcome) {
        self.items.push(outcome);
    }

    /// True when no item was rejected or failed (empty batches succeed)
    pub fn all_succeeded(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.status == ItemStatus::Recorded)
    }

    pub fn recorded_count(&self) -> usize {
        self.count(ItemStatus::Recorded)
    }

    pub fn rejected_count(&self) -> usize {
        self.count(ItemStatus::Rejected)
    }

    pub fn failed_count(&self) -> usize {
        self.count(ItemStatus::Failed)
    }

    fn count(&self, status: ItemStatus) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == status)
            .count()
    }
}

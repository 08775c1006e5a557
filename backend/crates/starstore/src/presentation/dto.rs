//! API DTOs (Data Transfer Objects)
//!
//! Wire field names match what the store's existing clients send:
//! snake_case throughout, except the catalog's legacy `thumbnailHd`.

use crate::application::outcome::{BatchOutcome, ItemOutcome};
use crate::application::record_purchase::PurchaseItemInput;
use crate::application::register_products::ProductInput;
use crate::domain::entities::{History, Product};
use serde::{Deserialize, Serialize};

// ============================================================================
// Buy
// ============================================================================

/// One item of a POST /starstore/buy batch
///
/// Every field is optional on the wire so that one malformed item is
/// rejected on its own instead of failing the whole batch at the parser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseItemRequest {
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub total_to_pay: Option<f64>,
    pub card_number: Option<String>,
    pub card_holder_name: Option<String>,
    pub value: Option<f64>,
    pub cvv: Option<i32>,
    pub exp_date: Option<String>,
}

impl From<PurchaseItemRequest> for PurchaseItemInput {
    fn from(req: PurchaseItemRequest) -> Self {
        Self {
            client_id: req.client_id,
            client_name: req.client_name,
            total_to_pay: req.total_to_pay,
            card_number: req.card_number,
            card_holder_name: req.card_holder_name,
            value: req.value,
            cvv: req.cvv,
            exp_date: req.exp_date,
        }
    }
}

/// Per-item outcome in a batch response
#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcomeResponse {
    pub index: usize,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ItemOutcome> for ItemOutcomeResponse {
    fn from(outcome: ItemOutcome) -> Self {
        Self {
            index: outcome.index,
            status: outcome.status.as_str(),
            purchase_id: outcome.purchase_id.map(|id| id.to_string()),
            error: outcome.error,
        }
    }
}

/// Aggregated response for batch endpoints
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub recorded: usize,
    pub rejected: usize,
    pub failed: usize,
    pub items: Vec<ItemOutcomeResponse>,
}

impl From<BatchOutcome> for BatchResponse {
    fn from(outcome: BatchOutcome) -> Self {
        Self {
            recorded: outcome.recorded_count(),
            rejected: outcome.rejected_count(),
            failed: outcome.failed_count(),
            items: outcome.items.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// History
// ============================================================================

/// One record of a GET /starstore/history response
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecordResponse {
    pub client_id: String,
    pub purchase_id: String,
    pub value: f64,
    pub date: String,
    pub card_number: String,
}

impl From<History> for HistoryRecordResponse {
    fn from(history: History) -> Self {
        Self {
            client_id: history.client_id,
            purchase_id: history.purchase_id.to_string(),
            value: history.value,
            date: history.date,
            card_number: history.card_number,
        }
    }
}

// ============================================================================
// Products
// ============================================================================

/// One item of a POST /starstore/products batch
#[derive(Debug, Clone, Deserialize)]
pub struct ProductItemRequest {
    pub title: String,
    pub price: f64,
    pub zipcode: String,
    pub seller: String,
    #[serde(rename = "thumbnailHd")]
    pub thumbnail_hd: String,
    pub date: String,
}

impl From<ProductItemRequest> for ProductInput {
    fn from(req: ProductItemRequest) -> Self {
        Self {
            title: req.title,
            price: req.price,
            zipcode: req.zipcode,
            seller: req.seller,
            thumbnail_hd: req.thumbnail_hd,
            date: req.date,
        }
    }
}

/// One record of a GET /starstore/products response
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub title: String,
    pub price: f64,
    pub zipcode: String,
    pub seller: String,
    #[serde(rename = "thumbnailHd")]
    pub thumbnail_hd: String,
    pub date: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            title: product.title,
            price: product.price,
            zipcode: product.zipcode,
            seller: product.seller,
            thumbnail_hd: product.thumbnail_hd,
            date: product.date,
        }
    }
}

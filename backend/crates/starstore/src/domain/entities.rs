//! Domain Entities
//!
//! Core business entities for the starstore domain.

use crate::domain::value_objects::CardNumber;
use chrono::Local;
use kernel::id::PurchaseId;

/// Credit card details embedded in a purchase
///
/// The full card number lives here and nowhere else; the public-facing
/// `History` projection only ever sees the redacted form.
#[derive(Debug, Clone)]
pub struct CreditCard {
    pub card_number: CardNumber,
    pub card_holder_name: String,
    pub value: f64,
    pub cvv: i32,
    pub exp_date: String,
}

/// Purchase entity - the full record of one purchase item
#[derive(Debug, Clone)]
pub struct Purchase {
    pub client_id: String,
    pub purchase_id: PurchaseId,
    pub client_name: String,
    pub total_to_pay: f64,
    pub credit_card: CreditCard,
}

impl Purchase {
    /// Create a new purchase with a freshly generated id
    ///
    /// The id is generated exactly once here and shared with the History
    /// projection derived from this record.
    pub fn new(
        client_id: String,
        client_name: String,
        total_to_pay: f64,
        credit_card: CreditCard,
    ) -> Self {
        Self {
            client_id,
            purchase_id: PurchaseId::new(),
            client_name,
            total_to_pay,
            credit_card,
        }
    }
}

/// History entity - redacted public-facing projection of a purchase
#[derive(Debug, Clone)]
pub struct History {
    pub client_id: String,
    pub purchase_id: PurchaseId,
    pub value: f64,
    pub date: String,
    pub card_number: String,
}

impl History {
    /// Derive the history projection from a purchase
    ///
    /// Reuses the purchase's id, which establishes the 1:1 pairing between
    /// the two collections.
    pub fn from_purchase(purchase: &Purchase) -> Self {
        Self {
            client_id: purchase.client_id.clone(),
            purchase_id: purchase.purchase_id,
            value: purchase.credit_card.value,
            date: Local::now().format("%Y-%m-%d").to_string(),
            card_number: purchase.credit_card.card_number.redacted(),
        }
    }
}

/// Product entity - independent catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub title: String,
    pub price: f64,
    pub zipcode: String,
    pub seller: String,
    pub thumbnail_hd: String,
    pub date: String,
}

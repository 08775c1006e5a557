//! MongoDB Repository Implementations

use crate::domain::entities::{History, Product, Purchase};
use crate::domain::repository::{HistoryRepository, ProductRepository, PurchaseRepository};
use crate::error::{StoreError, StoreResult};
use futures::TryStreamExt;
use kernel::id::PurchaseId;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Collection names follow the original deployment's pluralized models
const PURCHASES: &str = "purchases";
const HISTORIES: &str = "histories";
const PRODUCTS: &str = "products";

/// MongoDB-backed repository
#[derive(Clone)]
pub struct MongoStoreRepository {
    purchases: Collection<PurchaseDocument>,
    histories: Collection<HistoryDocument>,
    products: Collection<ProductDocument>,
}

impl MongoStoreRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            purchases: db.collection(PURCHASES),
            histories: db.collection(HISTORIES),
            products: db.collection(PRODUCTS),
        }
    }
}

impl PurchaseRepository for MongoStoreRepository {
    async fn create(&self, purchase: &Purchase) -> StoreResult<()> {
        self.purchases
            .insert_one(PurchaseDocument::from(purchase))
            .await?;

        tracing::info!(
            purchase_id = %purchase.purchase_id,
            "Purchase document inserted"
        );

        Ok(())
    }
}

impl HistoryRepository for MongoStoreRepository {
    async fn create(&self, history: &History) -> StoreResult<()> {
        self.histories
            .insert_one(HistoryDocument::from(history))
            .await?;

        tracing::info!(
            purchase_id = %history.purchase_id,
            "History document inserted"
        );

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<History>> {
        let mut cursor = self.histories.find(doc! {}).await?;

        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(document.into_history()?);
        }
        Ok(records)
    }

    async fn list_by_client(&self, client_id: &str) -> StoreResult<Vec<History>> {
        let mut cursor = self
            .histories
            .find(doc! { "client_id": client_id })
            .await?;

        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(document.into_history()?);
        }
        Ok(records)
    }
}

impl ProductRepository for MongoStoreRepository {
    async fn create(&self, product: &Product) -> StoreResult<()> {
        self.products
            .insert_one(ProductDocument::from(product))
            .await?;

        tracing::info!(title = %product.title, "Product document inserted");

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let mut cursor = self.products.find(doc! {}).await?;

        let mut products = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            products.push(document.into_product());
        }
        Ok(products)
    }
}

// ============================================================================
// Document types (wire shape of the collections)
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct CreditCardDocument {
    card_number: String,
    card_holder_name: String,
    value: f64,
    cvv: i32,
    exp_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PurchaseDocument {
    client_id: String,
    purchase_id: String,
    client_name: String,
    total_to_pay: f64,
    credit_card: CreditCardDocument,
}

impl From<&Purchase> for PurchaseDocument {
    fn from(purchase: &Purchase) -> Self {
        Self {
            client_id: purchase.client_id.clone(),
            purchase_id: purchase.purchase_id.to_string(),
            client_name: purchase.client_name.clone(),
            total_to_pay: purchase.total_to_pay,
            credit_card: CreditCardDocument {
                card_number: purchase.credit_card.card_number.as_str().to_string(),
                card_holder_name: purchase.credit_card.card_holder_name.clone(),
                value: purchase.credit_card.value,
                cvv: purchase.credit_card.cvv,
                exp_date: purchase.credit_card.exp_date.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryDocument {
    client_id: String,
    purchase_id: String,
    value: f64,
    date: String,
    card_number: String,
}

impl From<&History> for HistoryDocument {
    fn from(history: &History) -> Self {
        Self {
            client_id: history.client_id.clone(),
            purchase_id: history.purchase_id.to_string(),
            value: history.value,
            date: history.date.clone(),
            card_number: history.card_number.clone(),
        }
    }
}

impl HistoryDocument {
    fn into_history(self) -> StoreResult<History> {
        let purchase_id = Uuid::parse_str(&self.purchase_id)
            .map(PurchaseId::from_uuid)
            .map_err(|e| {
                StoreError::Internal(format!("Malformed purchase_id in history document: {}", e))
            })?;

        Ok(History {
            client_id: self.client_id,
            purchase_id,
            value: self.value,
            date: self.date,
            card_number: self.card_number,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    title: String,
    price: f64,
    zipcode: String,
    seller: String,
    #[serde(rename = "thumbnailHd")]
    thumbnail_hd: String,
    date: String,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            zipcode: product.zipcode.clone(),
            seller: product.seller.clone(),
            thumbnail_hd: product.thumbnail_hd.clone(),
            date: product.date.clone(),
        }
    }
}

impl ProductDocument {
    fn into_product(self) -> Product {
        Product {
            title: self.title,
            price: self.price,
            zipcode: self.zipcode,
            seller: self.seller,
            thumbnail_hd: self.thumbnail_hd,
            date: self.date,
        }
    }
}

//! Unit tests for the starstore crate

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;
    use crate::domain::value_objects::CardNumber;

    fn credit_card(card_number: &str) -> CreditCard {
        CreditCard {
            card_number: CardNumber::new(card_number).unwrap(),
            card_holder_name: "Han Solo".to_string(),
            value: 1000.0,
            cvv: 123,
            exp_date: "12/2030".to_string(),
        }
    }

    #[test]
    fn test_purchase_ids_are_unique() {
        let a = Purchase::new(
            "c1".into(),
            "Han Solo".into(),
            1000.0,
            credit_card("1234567890123456"),
        );
        let b = Purchase::new(
            "c1".into(),
            "Han Solo".into(),
            1000.0,
            credit_card("1234567890123456"),
        );
        assert_ne!(a.purchase_id, b.purchase_id);
    }

    #[test]
    fn test_history_shares_purchase_id() {
        let purchase = Purchase::new(
            "c1".into(),
            "Han Solo".into(),
            1000.0,
            credit_card("1234567890123456"),
        );
        let history = History::from_purchase(&purchase);

        assert_eq!(history.purchase_id, purchase.purchase_id);
        assert_eq!(history.client_id, purchase.client_id);
        assert_eq!(history.value, purchase.credit_card.value);
    }

    #[test]
    fn test_history_is_redacted_while_purchase_keeps_full_number() {
        let purchase = Purchase::new(
            "c1".into(),
            "Han Solo".into(),
            1000.0,
            credit_card("1234567890123456"),
        );
        let history = History::from_purchase(&purchase);

        assert_eq!(history.card_number, "**** **** **** 3456");
        assert_eq!(purchase.credit_card.card_number.as_str(), "1234567890123456");
    }

    #[test]
    fn test_history_date_is_iso_formatted() {
        let purchase = Purchase::new(
            "c1".into(),
            "Han Solo".into(),
            1000.0,
            credit_card("1234567890123456"),
        );
        let history = History::from_purchase(&purchase);

        assert_eq!(history.date.len(), 10);
        assert_eq!(&history.date[4..5], "-");
        assert_eq!(&history.date[7..8], "-");
    }
}

#[cfg(test)]
mod usecase_tests {
    use crate::application::config::StoreConfig;
    use crate::application::list_history::ListHistoryUseCase;
    use crate::application::list_products::ListProductsUseCase;
    use crate::application::outcome::ItemStatus;
    use crate::application::record_purchase::{PurchaseItemInput, RecordPurchaseUseCase};
    use crate::application::register_products::{ProductInput, RegisterProductsUseCase};
    use crate::domain::entities::{History, Product, Purchase};
    use crate::domain::repository::{HistoryRepository, ProductRepository, PurchaseRepository};
    use crate::error::{StoreError, StoreResult};
    use std::sync::{Arc, Mutex};

    /// In-memory repository used to exercise the use cases without a
    /// running document store. Write failures can be injected per
    /// collection; each injected failure fires once.
    #[derive(Clone, Default)]
    struct InMemoryStore {
        purchases: Arc<Mutex<Vec<Purchase>>>,
        histories: Arc<Mutex<Vec<History>>>,
        products: Arc<Mutex<Vec<Product>>>,
        purchase_attempts: Arc<Mutex<u32>>,
        fail_purchase_writes: Arc<Mutex<u32>>,
        fail_history_writes: Arc<Mutex<u32>>,
    }

    fn injected_failure() -> StoreError {
        StoreError::Database(mongodb::error::Error::custom("injected write failure"))
    }

    impl PurchaseRepository for InMemoryStore {
        async fn create(&self, purchase: &Purchase) -> StoreResult<()> {
            *self.purchase_attempts.lock().unwrap() += 1;
            {
                let mut remaining = self.fail_purchase_writes.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(injected_failure());
                }
            }
            self.purchases.lock().unwrap().push(purchase.clone());
            Ok(())
        }
    }

    impl HistoryRepository for InMemoryStore {
        async fn create(&self, history: &History) -> StoreResult<()> {
            {
                let mut remaining = self.fail_history_writes.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(injected_failure());
                }
            }
            self.histories.lock().unwrap().push(history.clone());
            Ok(())
        }

        async fn list_all(&self) -> StoreResult<Vec<History>> {
            Ok(self.histories.lock().unwrap().clone())
        }

        async fn list_by_client(&self, client_id: &str) -> StoreResult<Vec<History>> {
            Ok(self
                .histories
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.client_id == client_id)
                .cloned()
                .collect())
        }
    }

    impl ProductRepository for InMemoryStore {
        async fn create(&self, product: &Product) -> StoreResult<()> {
            self.products.lock().unwrap().push(product.clone());
            Ok(())
        }

        async fn list_all(&self) -> StoreResult<Vec<Product>> {
            Ok(self.products.lock().unwrap().clone())
        }
    }

    fn purchase_item(client_id: &str, card_number: &str) -> PurchaseItemInput {
        PurchaseItemInput {
            client_id: Some(client_id.to_string()),
            client_name: Some("Han Solo".to_string()),
            total_to_pay: Some(1000.0),
            card_number: Some(card_number.to_string()),
            card_holder_name: Some("Han Solo".to_string()),
            value: Some(1000.0),
            cvv: Some(123),
            exp_date: Some("12/2030".to_string()),
        }
    }

    fn record_use_case(
        store: &InMemoryStore,
        config: StoreConfig,
    ) -> RecordPurchaseUseCase<InMemoryStore, InMemoryStore> {
        RecordPurchaseUseCase::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(config),
        )
    }

    #[tokio::test]
    async fn test_valid_batch_creates_paired_records() {
        let store = InMemoryStore::default();
        let use_case = record_use_case(&store, StoreConfig::default());

        let outcome = use_case
            .execute(vec![
                purchase_item("c1", "1234567890123456"),
                purchase_item("c2", "9999888877776666"),
            ])
            .await;

        assert!(outcome.all_succeeded());
        assert_eq!(outcome.recorded_count(), 2);

        let purchases = store.purchases.lock().unwrap();
        let histories = store.histories.lock().unwrap();
        assert_eq!(purchases.len(), 2);
        assert_eq!(histories.len(), 2);
        for (purchase, history) in purchases.iter().zip(histories.iter()) {
            assert_eq!(purchase.purchase_id, history.purchase_id);
            assert_eq!(purchase.client_id, history.client_id);
        }
    }

    #[tokio::test]
    async fn test_redaction_end_to_end() {
        let store = InMemoryStore::default();
        let use_case = record_use_case(&store, StoreConfig::default());

        use_case
            .execute(vec![purchase_item("c1", "1234567890123456")])
            .await;

        let purchases = store.purchases.lock().unwrap();
        let histories = store.histories.lock().unwrap();
        assert_eq!(
            purchases[0].credit_card.card_number.as_str(),
            "1234567890123456"
        );
        assert_eq!(histories[0].card_number, "**** **** **** 3456");
    }

    #[tokio::test]
    async fn test_batch_independence_with_invalid_card() {
        let store = InMemoryStore::default();
        let use_case = record_use_case(&store, StoreConfig::default());

        let outcome = use_case
            .execute(vec![
                purchase_item("c1", "1234567890123456"),
                // 15 digits
                purchase_item("c2", "123456789012345"),
                purchase_item("c3", "9999888877776666"),
            ])
            .await;

        assert!(!outcome.all_succeeded());
        assert_eq!(outcome.items[0].status, ItemStatus::Recorded);
        assert_eq!(outcome.items[1].status, ItemStatus::Rejected);
        assert_eq!(outcome.items[2].status, ItemStatus::Recorded);
        assert!(
            outcome.items[1]
                .error
                .as_deref()
                .unwrap()
                .contains("16 digits")
        );

        assert_eq!(store.purchases.lock().unwrap().len(), 2);
        assert_eq!(store.histories.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_per_item() {
        let store = InMemoryStore::default();
        let use_case = record_use_case(&store, StoreConfig::default());

        let mut item = purchase_item("c1", "1234567890123456");
        item.cvv = None;

        let outcome = use_case.execute(vec![item]).await;

        assert_eq!(outcome.rejected_count(), 1);
        assert!(outcome.items[0].error.as_deref().unwrap().contains("cvv"));
        assert!(store.purchases.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_purchase_write_failure_skips_history() {
        let store = InMemoryStore::default();
        *store.fail_purchase_writes.lock().unwrap() = 1;
        let use_case = record_use_case(&store, StoreConfig::without_retries());

        let outcome = use_case
            .execute(vec![purchase_item("c1", "1234567890123456")])
            .await;

        assert_eq!(outcome.failed_count(), 1);
        assert!(
            outcome.items[0]
                .error
                .as_deref()
                .unwrap()
                .starts_with("purchase write failed")
        );
        assert!(store.purchases.lock().unwrap().is_empty());
        assert!(store.histories.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_write_failure_is_reported() {
        let store = InMemoryStore::default();
        *store.fail_history_writes.lock().unwrap() = 1;
        let use_case = record_use_case(&store, StoreConfig::without_retries());

        let outcome = use_case
            .execute(vec![purchase_item("c1", "1234567890123456")])
            .await;

        // The purchase persisted; the item still counts as failed
        assert_eq!(outcome.failed_count(), 1);
        assert!(
            outcome.items[0]
                .error
                .as_deref()
                .unwrap()
                .contains("history write failed")
        );
        assert_eq!(store.purchases.lock().unwrap().len(), 1);
        assert!(store.histories.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_retry_reuses_purchase_id() {
        let store = InMemoryStore::default();
        *store.fail_purchase_writes.lock().unwrap() = 1;
        let use_case = record_use_case(&store, StoreConfig::default());

        let outcome = use_case
            .execute(vec![purchase_item("c1", "1234567890123456")])
            .await;

        assert!(outcome.all_succeeded());
        assert_eq!(*store.purchase_attempts.lock().unwrap(), 2);

        let purchases = store.purchases.lock().unwrap();
        assert_eq!(purchases.len(), 1);
        assert_eq!(outcome.items[0].purchase_id, Some(purchases[0].purchase_id));
    }

    #[tokio::test]
    async fn test_empty_batch_succeeds() {
        let store = InMemoryStore::default();
        let use_case = record_use_case(&store, StoreConfig::default());

        let outcome = use_case.execute(vec![]).await;

        assert!(outcome.all_succeeded());
        assert!(outcome.items.is_empty());
    }

    #[tokio::test]
    async fn test_list_history_filters_by_client() {
        let store = InMemoryStore::default();
        let record = record_use_case(&store, StoreConfig::default());
        record
            .execute(vec![
                purchase_item("alice", "1234567890123456"),
                purchase_item("alice", "9999888877776666"),
                purchase_item("bob", "1111222233334444"),
            ])
            .await;

        let use_case = ListHistoryUseCase::new(Arc::new(store.clone()));

        let all = use_case.list_all().await.unwrap();
        assert_eq!(all.len(), 3);

        let alice = use_case.list_for_client("alice").await.unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|h| h.client_id == "alice"));

        let unknown = use_case.list_for_client("nobody").await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_product_round_trip() {
        let store = InMemoryStore::default();
        let register = RegisterProductsUseCase::new(
            Arc::new(store.clone()),
            Arc::new(StoreConfig::default()),
        );

        let outcome = register
            .execute(vec![ProductInput {
                title: "Millennium Falcon model".to_string(),
                price: 129.9,
                zipcode: "38400000".to_string(),
                seller: "Lando".to_string(),
                thumbnail_hd: "https://example.com/falcon.jpg".to_string(),
                date: "2024-06-01".to_string(),
            }])
            .await;
        assert!(outcome.all_succeeded());

        let list = ListProductsUseCase::new(Arc::new(store.clone()));
        let products = list.list_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Millennium Falcon model");
        assert_eq!(products[0].price, 129.9);
        assert_eq!(products[0].zipcode, "38400000");
        assert_eq!(products[0].seller, "Lando");
        assert_eq!(products[0].thumbnail_hd, "https://example.com/falcon.jpg");
        assert_eq!(products[0].date, "2024-06-01");
    }
}

#[cfg(test)]
mod models_tests {
    use crate::application::outcome::{BatchOutcome, ItemOutcome};
    use crate::domain::entities::History;
    use crate::error::StoreError;
    use crate::presentation::dto::*;
    use kernel::id::PurchaseId;

    #[test]
    fn test_purchase_item_request_deserialization() {
        let json = r#"{
            "client_id": "c1",
            "client_name": "Han Solo",
            "total_to_pay": 1000.0,
            "card_number": "1234567890123456",
            "card_holder_name": "Han Solo",
            "value": 1000.0,
            "cvv": 123,
            "exp_date": "12/2030"
        }"#;
        let request: PurchaseItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.client_id.as_deref(), Some("c1"));
        assert_eq!(request.card_number.as_deref(), Some("1234567890123456"));
        assert_eq!(request.cvv, Some(123));
    }

    #[test]
    fn test_purchase_item_request_tolerates_missing_fields() {
        // Presence is validated per item in the use case, not by the parser
        let request: PurchaseItemRequest = serde_json::from_str("{}").unwrap();
        assert!(request.client_id.is_none());
        assert!(request.card_number.is_none());
    }

    #[test]
    fn test_product_item_request_wire_name() {
        let json = r#"{
            "title": "Falcon",
            "price": 129.9,
            "zipcode": "38400000",
            "seller": "Lando",
            "thumbnailHd": "https://example.com/falcon.jpg",
            "date": "2024-06-01"
        }"#;
        let request: ProductItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.thumbnail_hd, "https://example.com/falcon.jpg");
    }

    #[test]
    fn test_item_outcome_response_serialization() {
        let id = PurchaseId::new();
        let recorded = ItemOutcomeResponse::from(ItemOutcome::recorded(0, Some(id)));
        let json = serde_json::to_string(&recorded).unwrap();
        assert!(json.contains(r#""status":"recorded""#));
        assert!(json.contains(&id.to_string()));
        assert!(!json.contains("error"));

        let rejected = ItemOutcomeResponse::from(ItemOutcome::rejected(
            1,
            &StoreError::CardNumberLength(15),
        ));
        let json = serde_json::to_string(&rejected).unwrap();
        assert!(json.contains(r#""status":"rejected""#));
        assert!(json.contains("16 digits"));
        assert!(!json.contains("purchase_id"));
    }

    #[test]
    fn test_batch_response_counts() {
        let mut outcome = BatchOutcome::default();
        outcome.push(ItemOutcome::recorded(0, Some(PurchaseId::new())));
        outcome.push(ItemOutcome::rejected(1, &StoreError::MissingField("cvv")));
        outcome.push(ItemOutcome::failed(2, "purchase write failed"));

        let response = BatchResponse::from(outcome);
        assert_eq!(response.recorded, 1);
        assert_eq!(response.rejected, 1);
        assert_eq!(response.failed, 1);
        assert_eq!(response.items.len(), 3);
    }

    #[test]
    fn test_history_record_response_serialization() {
        let id = PurchaseId::new();
        let response = HistoryRecordResponse::from(History {
            client_id: "c1".to_string(),
            purchase_id: id,
            value: 1000.0,
            date: "2024-06-01".to_string(),
            card_number: "**** **** **** 3456".to_string(),
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(&id.to_string()));
        assert!(json.contains("**** **** **** 3456"));
        assert!(!json.contains("cvv"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let test_cases: Vec<(StoreError, StatusCode)> = vec![
            (
                StoreError::CardNumberLength(15),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StoreError::CardNumberNotNumeric,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StoreError::MissingField("cvv"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StoreError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                StoreError::Database(mongodb::error::Error::custom("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let status = error.status_code();
            assert_eq!(status, expected_status, "wrong status for {:?}", error);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_is_validation() {
        assert!(StoreError::CardNumberLength(15).is_validation());
        assert!(StoreError::CardNumberNotNumeric.is_validation());
        assert!(StoreError::MissingField("cvv").is_validation());
        assert!(!StoreError::Internal("test".into()).is_validation());
    }

    #[test]
    fn test_error_display() {
        assert!(
            StoreError::CardNumberLength(15)
                .to_string()
                .contains("16 digits")
        );
        assert!(
            StoreError::MissingField("cvv")
                .to_string()
                .contains("cvv")
        );
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::StoreConfig;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.write_retries, 2);
    }

    #[test]
    fn test_without_retries() {
        let config = StoreConfig::without_retries();
        assert_eq!(config.write_retries, 0);
    }
}

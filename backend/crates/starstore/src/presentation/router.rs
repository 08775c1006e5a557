//! Starstore Router

use crate::application::config::StoreConfig;
use crate::domain::repository::{HistoryRepository, ProductRepository, PurchaseRepository};
use crate::infra::mongo::MongoStoreRepository;
use crate::presentation::handlers::{self, StoreAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the starstore router with the MongoDB repository
pub fn starstore_router(repo: MongoStoreRepository, config: StoreConfig) -> Router {
    starstore_router_generic(repo, config)
}

/// Create a generic starstore router for any repository implementation
pub fn starstore_router_generic<R>(repo: R, config: StoreConfig) -> Router
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = StoreAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/buy", post(handlers::record_purchases::<R>))
        .route("/history", get(handlers::list_history::<R>))
        .route(
            "/history/{client_id}",
            get(handlers::list_client_history::<R>),
        )
        .route(
            "/products",
            post(handlers::register_products::<R>).get(handlers::list_products::<R>),
        )
        .with_state(state)
}

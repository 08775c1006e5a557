//! HTTP Handlers

use crate::application::list_history::ListHistoryUseCase;
use crate::application::list_products::ListProductsUseCase;
use crate::application::record_purchase::RecordPurchaseUseCase;
use crate::application::register_products::RegisterProductsUseCase;
use crate::application::config::StoreConfig;
use crate::domain::repository::{HistoryRepository, ProductRepository, PurchaseRepository};
use crate::error::StoreResult;
use crate::presentation::dto::{
    BatchResponse, HistoryRecordResponse, ProductItemRequest, ProductResponse,
    PurchaseItemRequest,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

/// Shared state for starstore handlers
#[derive(Clone)]
pub struct StoreAppState<R>
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<StoreConfig>,
}

/// POST /starstore/buy
///
/// Exactly one aggregated response per request: 201 when every item was
/// recorded, 207 Multi-Status with per-item outcomes otherwise.
pub async fn record_purchases<R>(
    State(state): State<StoreAppState<R>>,
    Json(batch): Json<Vec<PurchaseItemRequest>>,
) -> impl IntoResponse
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case =
        RecordPurchaseUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let outcome = use_case
        .execute(batch.into_iter().map(Into::into).collect())
        .await;

    let status = if outcome.all_succeeded() {
        StatusCode::CREATED
    } else {
        StatusCode::MULTI_STATUS
    };

    (status, Json(BatchResponse::from(outcome)))
}

/// GET /starstore/history
pub async fn list_history<R>(
    State(state): State<StoreAppState<R>>,
) -> StoreResult<Json<Vec<HistoryRecordResponse>>>
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListHistoryUseCase::new(state.repo.clone());

    let records = use_case.list_all().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /starstore/history/{client_id}
///
/// An unknown client id yields an empty array, not an error.
pub async fn list_client_history<R>(
    State(state): State<StoreAppState<R>>,
    Path(client_id): Path<String>,
) -> StoreResult<Json<Vec<HistoryRecordResponse>>>
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListHistoryUseCase::new(state.repo.clone());

    let records = use_case.list_for_client(&client_id).await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// POST /starstore/products
pub async fn register_products<R>(
    State(state): State<StoreAppState<R>>,
    Json(batch): Json<Vec<ProductItemRequest>>,
) -> impl IntoResponse
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = RegisterProductsUseCase::new(state.repo.clone(), state.config.clone());

    let outcome = use_case
        .execute(batch.into_iter().map(Into::into).collect())
        .await;

    let status = if outcome.all_succeeded() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };

    (status, Json(BatchResponse::from(outcome)))
}

/// GET /starstore/products
pub async fn list_products<R>(
    State(state): State<StoreAppState<R>>,
) -> StoreResult<Json<Vec<ProductResponse>>>
where
    R: PurchaseRepository
        + HistoryRepository
        + ProductRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());

    let products = use_case.list_all().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

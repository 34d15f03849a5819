// HTTP handlers - thin orchestration over the domain layer
// 1. Extract parameters from request
// 2. Call domain logic
// 3. Transform domain result to HTTP response

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::db::ReceiptId;
use crate::domain;
use crate::models::{PointsResponse, ProcessResponse, RawReceipt};

#[tracing::instrument(skip(state, payload))]
pub async fn process_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<RawReceipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(raw) = payload.inspect_err(|e| {
        warn!(error = %e.body_text(), "Malformed receipt body");
    })?;

    let id = domain::process_receipt(&raw, state.store.as_ref())?;

    Ok(Json(ProcessResponse {
        id: id.to_string(),
    }))
}

#[tracing::instrument(skip(state, id), fields(receipt_id = %id))]
pub async fn get_points_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<PointsResponse>> {
    let stored = state
        .store
        .get(&ReceiptId::from(id))
        .ok_or_else(|| ApiError::NotFound("No receipt found for that id".to_string()))?;

    info!(points = stored.points, "Points retrieved");

    Ok(Json(PointsResponse {
        points: stored.points,
    }))
}

pub async fn health_check() -> &'static str {
    "OK"
}

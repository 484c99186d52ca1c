use axum::extract::State;
use axum::Json;

use contracts::domain::a003_order::{OrderCreated, OrderPayload, OrderRecord};

use crate::domain::a003_order::service;
use crate::shared::data::store::AppState;
use crate::shared::error::AppError;
use crate::system::auth::extractor::CurrentSession;

/// POST /api/order
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<OrderCreated>, AppError> {
    let record = service::create(&state, &session, payload).await?;
    Ok(Json(OrderCreated { id: record.id }))
}

/// GET /api/order
pub async fn list_all(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<OrderRecord>>, AppError> {
    Ok(Json(service::list_all(&state, &session).await?))
}

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::AggregateId;
use contracts::system::auth::Permission;

use crate::domain::a001_customer::service;
use crate::shared::data::registry;
use crate::shared::data::store::AppState;
use crate::shared::error::AppError;
use crate::system::auth::extractor::{CurrentSession, ReadAccess};

/// GET /api/customer
pub async fn list_all(_: ReadAccess, State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(service::list_all(&state).await)
}

/// GET /api/customer/:id
pub async fn get_by_id(
    _: ReadAccess,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let id = service::parse_id(&id)?;
    service::get_by_id(&state, id)
        .await
        .map(Json)
        .ok_or_else(|| registry::not_found::<Customer>(&id.as_string()))
}

/// POST /api/customer
pub async fn upsert(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(dto): Json<CustomerDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    session.authorize(Permission::ManageCustomers, Utc::now())?;
    let id = if dto.id.is_some() {
        service::update(&state, dto).await?
    } else {
        service::create(&state, dto).await?
    };
    Ok(Json(json!({ "id": id.as_string() })))
}

/// POST /api/customer/testdata
pub async fn insert_test_data(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<(), AppError> {
    session.authorize(Permission::ManageCustomers, Utc::now())?;
    service::insert_test_data(&state).await
}

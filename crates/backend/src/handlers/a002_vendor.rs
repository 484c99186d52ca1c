use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use contracts::domain::a002_vendor::aggregate::{Vendor, VendorDto};
use contracts::domain::common::AggregateId;
use contracts::system::auth::Permission;

use crate::domain::a002_vendor::service;
use crate::shared::data::registry;
use crate::shared::data::store::AppState;
use crate::shared::error::AppError;
use crate::system::auth::extractor::{CurrentSession, ReadAccess};

/// GET /api/vendor
pub async fn list_all(_: ReadAccess, State(state): State<AppState>) -> Json<Vec<Vendor>> {
    Json(service::list_all(&state).await)
}

/// GET /api/vendor/:id
pub async fn get_by_id(
    _: ReadAccess,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, AppError> {
    let id = service::parse_id(&id)?;
    service::get_by_id(&state, id)
        .await
        .map(Json)
        .ok_or_else(|| registry::not_found::<Vendor>(&id.as_string()))
}

/// POST /api/vendor
pub async fn upsert(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(dto): Json<VendorDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    session.authorize(Permission::ManageVendors, Utc::now())?;
    let id = if dto.id.is_some() {
        service::update(&state, dto).await?
    } else {
        service::create(&state, dto).await?
    };
    Ok(Json(json!({ "id": id.as_string() })))
}

/// POST /api/vendor/testdata
pub async fn insert_test_data(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<(), AppError> {
    session.authorize(Permission::ManageVendors, Utc::now())?;
    service::insert_test_data(&state).await
}

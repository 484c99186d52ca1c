use crate::shared::api_utils::{get_json, post_json, ApiFailure};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::system::auth::SessionContext;
use serde::Deserialize;

#[derive(Deserialize)]
struct Saved {
    id: String,
}

pub async fn fetch_by_id(id: &str, session: Option<&SessionContext>) -> Result<Customer, ApiFailure> {
    get_json(&format!("/api/customer/{}", id), session).await
}

/// Create or update; returns the customer id
pub async fn save_form(dto: &CustomerDto, session: &SessionContext) -> Result<String, ApiFailure> {
    let saved: Saved = post_json("/api/customer", dto, Some(session)).await?;
    Ok(saved.id)
}

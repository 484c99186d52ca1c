use crate::shared::api_utils::{get_json, post_json, ApiFailure};
use contracts::domain::a002_vendor::aggregate::{Vendor, VendorDto};
use contracts::system::auth::SessionContext;
use serde::Deserialize;

#[derive(Deserialize)]
struct Saved {
    id: String,
}

pub async fn fetch_by_id(id: &str, session: Option<&SessionContext>) -> Result<Vendor, ApiFailure> {
    get_json(&format!("/api/vendor/{}", id), session).await
}

/// Create or update; returns the vendor id
pub async fn save_form(dto: &VendorDto, session: &SessionContext) -> Result<String, ApiFailure> {
    let saved: Saved = post_json("/api/vendor", dto, Some(session)).await?;
    Ok(saved.id)
}

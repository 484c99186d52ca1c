use crate::shared::api_utils::{get_json, post_json, ApiFailure};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a003_order::{OrderCreated, OrderPayload};
use contracts::system::auth::SessionContext;

pub async fn fetch_customers(session: Option<&SessionContext>) -> Result<Vec<Customer>, ApiFailure> {
    get_json("/api/customer", session).await
}

pub async fn fetch_vendors(session: Option<&SessionContext>) -> Result<Vec<Vendor>, ApiFailure> {
    get_json("/api/vendor", session).await
}

pub async fn create_order(payload: &OrderPayload, session: &SessionContext) -> Result<OrderCreated, ApiFailure> {
    post_json("/api/order", payload, Some(session)).await
}

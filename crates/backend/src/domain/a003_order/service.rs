use super::repository;
use chrono::Utc;
use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::domain::a002_vendor::aggregate::VendorId;
use contracts::domain::a003_order::{fields, FormSection, OrderPayload, OrderRecord, SectionErrors};
use contracts::domain::common::AggregateId;
use contracts::system::auth::{Permission, SessionContext};

use crate::domain::{a001_customer, a002_vendor};
use crate::shared::data::store::{AppState, Store};
use crate::shared::error::AppError;

/// Accept a submitted order.
///
/// The payload is validated again section by section, and the customer and
/// vendor it points at must exist in the registries.
pub async fn create(
    state: &AppState,
    session: &SessionContext,
    payload: OrderPayload,
) -> Result<OrderRecord, AppError> {
    session.authorize(Permission::CreateOrders, Utc::now())?;

    let mut store = state.store.write().await;

    let mut errors = payload.validate().err().unwrap_or_default();
    check_references(&store, &payload, &mut errors);
    if !errors.is_empty() {
        tracing::warn!(
            "order from {} rejected: {:?}",
            session.user.username,
            errors.keys().map(FormSection::code).collect::<Vec<_>>()
        );
        return Err(AppError::OrderValidation(errors));
    }

    let record = OrderRecord {
        id: uuid::Uuid::new_v4().to_string(),
        created_by: session.user.username.clone(),
        created_at: Utc::now(),
        payload,
    };
    tracing::info!(
        "order {} accepted from {} (customer {}, vendor {})",
        record.id,
        record.created_by,
        record.payload.customer.customer_id,
        record.payload.vendor.vendor_id
    );
    repository::insert(&mut store, record.clone());
    Ok(record)
}

pub async fn list_all(state: &AppState, session: &SessionContext) -> Result<Vec<OrderRecord>, AppError> {
    session.ensure_active(Utc::now())?;
    Ok(repository::list_all(&*state.store.read().await))
}

fn check_references(store: &Store, payload: &OrderPayload, errors: &mut SectionErrors) {
    let customer_id = payload.customer.customer_id.trim();
    if !customer_id.is_empty() {
        let known = CustomerId::from_string(customer_id)
            .map(|id| a001_customer::repository::exists(store, id))
            .unwrap_or(false);
        if !known {
            errors
                .entry(FormSection::Customer)
                .or_default()
                .insert(fields::CUSTOMER_ID, "Unknown customer");
        }
    }

    let vendor_id = payload.vendor.vendor_id.trim();
    if !vendor_id.is_empty() {
        let known = VendorId::from_string(vendor_id)
            .map(|id| a002_vendor::repository::exists(store, id))
            .unwrap_or(false);
        if !known {
            errors
                .entry(FormSection::Vendor)
                .or_default()
                .insert(fields::VENDOR_ID, "Unknown vendor");
        }
    }
}

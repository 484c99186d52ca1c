use super::repository;
use contracts::domain::a002_vendor::aggregate::{Vendor, VendorDto, VendorId};
use contracts::domain::common::AggregateId;
use contracts::enums::TypeOfWork;
use contracts::shared::contact::ContactInfo;
use contracts::shared::location::AddressSelection;

use crate::shared::data::registry;
use crate::shared::data::store::AppState;
use crate::shared::error::AppError;

pub async fn create(state: &AppState, dto: VendorDto) -> Result<VendorId, AppError> {
    dto.validate(&state.locations).map_err(AppError::Validation)?;

    let mut store = state.store.write().await;
    let vendor = Vendor::new_for_insert(&dto, repository::next_sequence(&store));
    tracing::info!(
        "vendor {} created ({}, {} service(s))",
        vendor.code,
        vendor.name,
        vendor.services.len()
    );
    Ok(repository::insert(&mut store, vendor))
}

pub async fn update(state: &AppState, dto: VendorDto) -> Result<VendorId, AppError> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    dto.validate(&state.locations).map_err(AppError::Validation)?;

    let mut store = state.store.write().await;
    let mut vendor = repository::get_by_id(&store, id)
        .ok_or_else(|| registry::not_found::<Vendor>(&id.as_string()))?;
    vendor.update(&dto);
    repository::update(&mut store, vendor);
    Ok(id)
}

pub async fn get_by_id(state: &AppState, id: VendorId) -> Option<Vendor> {
    repository::get_by_id(&*state.store.read().await, id)
}

pub async fn list_all(state: &AppState) -> Vec<Vendor> {
    repository::list_all(&*state.store.read().await)
}

pub fn parse_id(raw: &str) -> Result<VendorId, AppError> {
    VendorId::from_string(raw).map_err(AppError::BadRequest)
}

pub async fn insert_test_data(state: &AppState) -> Result<(), AppError> {
    let data = vec![
        VendorDto {
            name: "Rhine Patent Partners".into(),
            email: "docket@rhine-pp.test".into(),
            address: address("Germany", "Bavaria", "Munich"),
            services: vec![TypeOfWork::PatentDrafting, TypeOfWork::PatentFiling],
            ..Default::default()
        },
        VendorDto {
            name: "Harbour Marks".into(),
            phone: "+61 3 5550 1234".into(),
            address: address("Australia", "Victoria", "Melbourne"),
            contacts: vec![ContactInfo::Unparsed {
                raw: "ask for the trademark desk".into(),
            }],
            services: vec![TypeOfWork::TrademarkRegistration, TypeOfWork::Renewal],
            ..Default::default()
        },
    ];

    for dto in data {
        create(state, dto).await?;
    }
    Ok(())
}

fn address(country: &str, state: &str, city: &str) -> AddressSelection {
    let mut selection = AddressSelection::new();
    selection
        .on_country_change(country)
        .on_state_change(state)
        .on_city_change(city);
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;

    #[tokio::test]
    async fn vendors_get_sequential_codes() {
        let state = AppState::new(Config::embedded().unwrap());
        insert_test_data(&state).await.unwrap();
        let codes: Vec<String> = list_all(&state).await.into_iter().map(|v| v.code).collect();
        assert_eq!(codes, vec!["VEN-0001", "VEN-0002"]);
    }

    #[tokio::test]
    async fn update_of_unknown_vendor_is_not_found() {
        let state = AppState::new(Config::embedded().unwrap());
        let dto = VendorDto {
            id: Some(VendorId::new_v4().as_string()),
            name: "Ghost".into(),
            address: address("Canada", "Ontario", "Ottawa"),
            ..Default::default()
        };
        assert!(matches!(update(&state, dto).await, Err(AppError::NotFound(_))));
    }
}

use super::repository;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use contracts::domain::common::AggregateId;
use contracts::shared::contact::ContactInfo;
use contracts::shared::location::AddressSelection;

use crate::shared::data::registry;
use crate::shared::data::store::AppState;
use crate::shared::error::AppError;

/// Create a customer from a validated form
pub async fn create(state: &AppState, dto: CustomerDto) -> Result<CustomerId, AppError> {
    dto.validate(&state.locations).map_err(AppError::Validation)?;

    let mut store = state.store.write().await;
    let customer = Customer::new_for_insert(&dto, repository::next_sequence(&store));
    tracing::info!("customer {} created ({})", customer.code, customer.name);
    Ok(repository::insert(&mut store, customer))
}

pub async fn update(state: &AppState, dto: CustomerDto) -> Result<CustomerId, AppError> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    dto.validate(&state.locations).map_err(AppError::Validation)?;

    let mut store = state.store.write().await;
    let mut customer = repository::get_by_id(&store, id)
        .ok_or_else(|| registry::not_found::<Customer>(&id.as_string()))?;
    customer.update(&dto);
    repository::update(&mut store, customer);
    Ok(id)
}

pub async fn get_by_id(state: &AppState, id: CustomerId) -> Option<Customer> {
    repository::get_by_id(&*state.store.read().await, id)
}

pub async fn list_all(state: &AppState) -> Vec<Customer> {
    repository::list_all(&*state.store.read().await)
}

pub fn parse_id(raw: &str) -> Result<CustomerId, AppError> {
    CustomerId::from_string(raw).map_err(AppError::BadRequest)
}

/// Sample customers for a fresh in-memory store
pub async fn insert_test_data(state: &AppState) -> Result<(), AppError> {
    let data = vec![
        CustomerDto {
            name: "Northwind Labs".into(),
            email: "legal@northwind.test".into(),
            phone: "+1 416 555 0100".into(),
            address: address("Canada", "Ontario", "Toronto"),
            contacts: vec![ContactInfo::structured("Ann Lee", "ann@northwind.test", "")],
            ..Default::default()
        },
        CustomerDto {
            name: "Sakura Devices".into(),
            email: "ip@sakura.test".into(),
            address: address("Japan", "Osaka", "Osaka"),
            comment: Some("Design registrations only".into()),
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

    fn state() -> AppState {
        AppState::new(Config::embedded().unwrap())
    }

    #[tokio::test]
    async fn create_then_update() {
        let state = state();
        let dto = CustomerDto {
            name: "Acme".into(),
            address: address("India", "Karnataka", "Bengaluru"),
            ..Default::default()
        };
        let id = create(&state, dto).await.unwrap();
        let stored = get_by_id(&state, id).await.unwrap();
        assert_eq!(stored.code, "CUS-0001");

        let mut changed = CustomerDto::from(&stored);
        changed.name = "Acme IP".into();
        update(&state, changed).await.unwrap();
        assert_eq!(get_by_id(&state, id).await.unwrap().name, "Acme IP");
    }

    #[tokio::test]
    async fn invalid_form_is_not_stored() {
        let state = state();
        let err = create(&state, CustomerDto::default()).await.unwrap_err();
        match err {
            AppError::Validation(errors) => assert!(errors.contains("name")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(list_all(&state).await.is_empty());
    }

    #[tokio::test]
    async fn test_data_uses_known_locations() {
        let state = state();
        insert_test_data(&state).await.unwrap();
        assert_eq!(list_all(&state).await.len(), 2);
    }
}

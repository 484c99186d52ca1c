use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};

use crate::shared::data::registry;
use crate::shared::data::store::Store;

pub fn insert(store: &mut Store, customer: Customer) -> CustomerId {
    registry::insert(&mut store.customers, customer)
}

pub fn update(store: &mut Store, customer: Customer) -> bool {
    registry::replace(&mut store.customers, customer)
}

pub fn get_by_id(store: &Store, id: CustomerId) -> Option<Customer> {
    registry::find(&store.customers, id)
}

pub fn list_all(store: &Store) -> Vec<Customer> {
    registry::sorted_by_code(&store.customers)
}

pub fn exists(store: &Store, id: CustomerId) -> bool {
    registry::contains(&store.customers, id)
}

/// Sequence number used for the next generated code
pub fn next_sequence(store: &Store) -> usize {
    store.customers.len() + 1
}

use contracts::domain::a002_vendor::aggregate::{Vendor, VendorId};

use crate::shared::data::registry;
use crate::shared::data::store::Store;

pub fn insert(store: &mut Store, vendor: Vendor) -> VendorId {
    registry::insert(&mut store.vendors, vendor)
}

pub fn update(store: &mut Store, vendor: Vendor) -> bool {
    registry::replace(&mut store.vendors, vendor)
}

pub fn get_by_id(store: &Store, id: VendorId) -> Option<Vendor> {
    registry::find(&store.vendors, id)
}

pub fn list_all(store: &Store) -> Vec<Vendor> {
    registry::sorted_by_code(&store.vendors)
}

pub fn exists(store: &Store, id: VendorId) -> bool {
    registry::contains(&store.vendors, id)
}

/// Sequence number used for the next generated code
pub fn next_sequence(store: &Store) -> usize {
    store.vendors.len() + 1
}

use contracts::domain::a003_order::OrderRecord;

use crate::shared::data::store::Store;

pub fn insert(store: &mut Store, order: OrderRecord) -> String {
    let id = order.id.clone();
    store.orders.push(order);
    id
}

/// Accepted orders, newest first
pub fn list_all(store: &Store) -> Vec<OrderRecord> {
    let mut items = store.orders.clone();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

use crate::shared::config::Config;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a003_order::OrderRecord;
use contracts::shared::location::LocationTable;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory records; lost on restart
#[derive(Debug, Default)]
pub struct Store {
    pub customers: Vec<Customer>,
    pub vendors: Vec<Vendor>,
    pub orders: Vec<OrderRecord>,
}

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub locations: LocationTable,
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            locations: LocationTable::builtin(),
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

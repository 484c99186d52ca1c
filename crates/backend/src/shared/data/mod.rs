pub mod store;
pub mod registry;

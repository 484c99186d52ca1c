pub mod a001_customer;
pub mod a002_vendor;
pub mod a003_order;

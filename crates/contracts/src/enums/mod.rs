pub mod type_of_work;
pub mod vendor_status;

pub use type_of_work::TypeOfWork;
pub use vendor_status::VendorStatus;

mod view;

pub use view::VendorList;

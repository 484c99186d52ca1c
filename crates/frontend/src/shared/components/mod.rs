pub mod address_picker;
pub mod contact_list;
pub mod ui;

pub use address_picker::AddressPicker;
pub use contact_list::ContactListEditor;

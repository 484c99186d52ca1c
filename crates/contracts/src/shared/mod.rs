pub mod contact;
pub mod location;
pub mod validation;

//! Customer Details UI Module
//!
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: form state, validation and save command
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;

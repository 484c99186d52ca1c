//! Order creation wizard
//!
//! - model.rs: reference lists and order submission
//! - view_model.rs: wizard state in a signal, section commands, submit gate
//! - view.rs: section tabs and the three part forms

mod model;
mod view;
mod view_model;

pub use view::OrderWizardPage;
pub use view_model::OrderWizardViewModel;

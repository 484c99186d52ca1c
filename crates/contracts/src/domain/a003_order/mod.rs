//! Order creation: three-section wizard gate and the submitted payload

pub mod attachment;
pub mod parts;
pub mod payload;
pub mod section;
pub mod wizard;

#[cfg(test)]
mod fixtures;

pub use attachment::Attachment;
pub use parts::{fields, CustomerPart, OrderPart, VendorPart};
pub use payload::{OrderCreated, OrderPayload, OrderRecord, SectionErrors};
pub use section::{FormSection, SectionCompletionSet};
pub use wizard::{GateError, OrderWizard};

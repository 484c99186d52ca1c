use super::parts::{CustomerPart, OrderPart, VendorPart};
use super::section::FormSection;
use crate::shared::validation::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field errors grouped by wizard section
pub type SectionErrors = BTreeMap<FormSection, FieldErrors>;

/// Single record sent on submit: the three sections flattened together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(flatten)]
    pub customer: CustomerPart,
    #[serde(flatten)]
    pub vendor: VendorPart,
    #[serde(flatten)]
    pub order: OrderPart,
}

impl OrderPayload {
    /// Re-run every section validator; used by the server before accepting
    /// an order that did not go through the wizard
    pub fn validate(&self) -> Result<(), SectionErrors> {
        let mut errors = SectionErrors::new();
        for (section, section_errors) in [
            (FormSection::Customer, self.customer.validate()),
            (FormSection::Vendor, self.vendor.validate()),
            (FormSection::Order, self.order.validate()),
        ] {
            if !section_errors.is_empty() {
                errors.insert(section, section_errors);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Response of a successful order submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: String,
}

/// Accepted order as listed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: OrderPayload,
}

//! Field sets of the three wizard sections and their validators

use super::attachment::Attachment;
use crate::enums::{TypeOfWork, VendorStatus};
use crate::shared::location::AddressSelection;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// Error map keys, matching the payload's JSON field names
pub mod fields {
    pub const CUSTOMER_ID: &str = "customerId";
    pub const ORDER_ONBOARDING_DATE: &str = "orderOnboardingDate";
    pub const ORDER_FRIENDLY_IMAGE: &str = "orderFriendlyImage";
    pub const TYPE_OF_WORK: &str = "typeOfWork";
    pub const WORK_COMPLETION_DATE: &str = "workCompletionDate";
    pub const DOCUMENTS: &str = "documents";
    pub const TOTAL_INVOICE_VALUE: &str = "totalInvoiceValue";

    pub const VENDOR_ID: &str = "vendorId";
    pub const VENDOR_ONBOARDING_DATE: &str = "vendorOnboardingDate";
    pub const CURRENT_STATUS: &str = "currentStatus";
    pub const STATUS_COMMENT: &str = "statusComment";
}

// ============================================================================
// Customer Part
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPart {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub order_onboarding_date: String,
    #[serde(default)]
    pub order_friendly_image: Option<Attachment>,
    #[serde(default)]
    pub type_of_work: Option<TypeOfWork>,
    #[serde(default)]
    pub work_completion_date: String,
    #[serde(default)]
    pub documents: Vec<Attachment>,
    #[serde(default)]
    pub total_invoice_value: String,
}

impl CustomerPart {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let required = ValidationRules::required();

        required.check_string(&mut errors, fields::CUSTOMER_ID, "Customer", &self.customer_id);
        required.check_date(
            &mut errors,
            fields::ORDER_ONBOARDING_DATE,
            "Order onboarding date",
            &self.order_onboarding_date,
        );

        match &self.order_friendly_image {
            None => errors.insert(fields::ORDER_FRIENDLY_IMAGE, "Order friendly image is required"),
            Some(image) if image.is_empty() => {
                errors.insert(fields::ORDER_FRIENDLY_IMAGE, "Order friendly image is required")
            }
            Some(image) if !image.is_image() => {
                errors.insert(fields::ORDER_FRIENDLY_IMAGE, "Order friendly image must be an image file")
            }
            Some(_) => {}
        }

        if self.type_of_work.is_none() {
            errors.insert(fields::TYPE_OF_WORK, "Type of work is required");
        }

        required.check_date(
            &mut errors,
            fields::WORK_COMPLETION_DATE,
            "Work completion date",
            &self.work_completion_date,
        );

        if self.documents.iter().all(Attachment::is_empty) {
            errors.insert(fields::DOCUMENTS, "Documents / invoice are required");
        }

        required.with_min(0.0).check_amount(
            &mut errors,
            fields::TOTAL_INVOICE_VALUE,
            "Total invoice value",
            &self.total_invoice_value,
        );

        errors
    }
}

// ============================================================================
// Vendor Part
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPart {
    #[serde(default)]
    pub vendor_id: String,
    #[serde(default)]
    pub vendor_onboarding_date: String,
    #[serde(default)]
    pub current_status: Option<VendorStatus>,
    /// Requested by the UI on status change, never enforced
    #[serde(default)]
    pub status_comment: String,
}

impl VendorPart {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let required = ValidationRules::required();

        required.check_string(&mut errors, fields::VENDOR_ID, "Vendor", &self.vendor_id);
        required.check_date(
            &mut errors,
            fields::VENDOR_ONBOARDING_DATE,
            "Vendor onboarding date",
            &self.vendor_onboarding_date,
        );
        if self.current_status.is_none() {
            errors.insert(fields::CURRENT_STATUS, "Current status is required");
        }

        errors
    }

    /// Change the status; the previous comment no longer applies
    pub fn set_status(&mut self, status: Option<VendorStatus>) {
        if self.current_status != status {
            self.current_status = status;
            self.status_comment.clear();
        }
    }
}

// ============================================================================
// Order Part
// ============================================================================

/// Descriptive order attributes; none of them is mandatory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPart {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub application_number: String,
    /// Country/state of the filing office, picked with the cascading selector
    #[serde(default)]
    pub jurisdiction: AddressSelection,
    #[serde(default)]
    pub filing_deadline: String,
    #[serde(default)]
    pub remarks: String,
}

impl OrderPart {
    pub fn validate(&self) -> FieldErrors {
        FieldErrors::new()
    }
}

//! Filled-in sections shared by the order tests

use super::attachment::Attachment;
use super::parts::{CustomerPart, OrderPart, VendorPart};
use crate::enums::{TypeOfWork, VendorStatus};

pub fn valid_customer() -> CustomerPart {
    CustomerPart {
        customer_id: "0b7b4c1e-6f51-4d1e-9a53-0d3c2a0f8e11".into(),
        order_onboarding_date: "2024-03-01".into(),
        order_friendly_image: Some(Attachment::new("mark.png", "image/png", 2048)),
        type_of_work: Some(TypeOfWork::TrademarkRegistration),
        work_completion_date: "2024-06-30".into(),
        documents: vec![Attachment::new("invoice.pdf", "application/pdf", 4096)],
        total_invoice_value: "1500.00".into(),
    }
}

pub fn valid_vendor() -> VendorPart {
    VendorPart {
        vendor_id: "5d1f6a3c-2b7e-4f0a-8c9d-1e2f3a4b5c6d".into(),
        vendor_onboarding_date: "2024-03-04".into(),
        current_status: Some(VendorStatus::YetToStart),
        status_comment: String::new(),
    }
}

pub fn sample_order() -> OrderPart {
    let mut order = OrderPart {
        title: "Northwind wordmark".into(),
        application_number: "TM-2024-0042".into(),
        ..Default::default()
    };
    order.jurisdiction.on_country_change("Canada").on_state_change("Ontario");
    order
}

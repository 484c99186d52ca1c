//! Order creation wizard: Customer Part -> Vendor Part -> Order Part
//!
//! Navigation between sections is free. A section joins the completion set
//! only after its validator passes, and submission is refused until all
//! three sections are in the set.

use super::parts::{CustomerPart, OrderPart, VendorPart};
use super::payload::{OrderPayload, SectionErrors};
use super::section::{FormSection, SectionCompletionSet};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("order is incomplete, sections left: {missing:?}")]
    Incomplete { missing: Vec<FormSection> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderWizard {
    active: ActiveSection,
    completed: SectionCompletionSet,
    pub customer: CustomerPart,
    pub vendor: VendorPart,
    pub order: OrderPart,
    customer_errors: FieldErrors,
    vendor_errors: FieldErrors,
    order_errors: FieldErrors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveSection(FormSection);

impl Default for ActiveSection {
    fn default() -> Self {
        ActiveSection(FormSection::Customer)
    }
}

impl OrderWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> FormSection {
        self.active.0
    }

    pub fn completed(&self) -> &SectionCompletionSet {
        &self.completed
    }

    pub fn is_completed(&self, section: FormSection) -> bool {
        self.completed.contains(section)
    }

    /// Jump to any section regardless of completion
    pub fn select_section(&mut self, section: FormSection) {
        self.active = ActiveSection(section);
    }

    /// Run the validator of `section` without touching wizard state
    pub fn validate_section(&self, section: FormSection) -> FieldErrors {
        match section {
            FormSection::Customer => self.customer.validate(),
            FormSection::Vendor => self.vendor.validate(),
            FormSection::Order => self.order.validate(),
        }
    }

    /// Validate `section`. On success it joins the completion set and the
    /// wizard advances Customer -> Vendor -> Order; on failure the error map
    /// is stored for the section and returned.
    pub fn complete_section(&mut self, section: FormSection) -> Result<(), FieldErrors> {
        let errors = self.validate_section(section);
        if !errors.is_empty() {
            log::debug!(
                "section {} rejected: {} field error(s)",
                section.code(),
                errors.len()
            );
            *self.errors_mut(section) = errors.clone();
            return Err(errors);
        }

        self.errors_mut(section).clear();
        if self.completed.mark(section) {
            log::debug!("section {} completed", section.code());
        }
        if let Some(next) = section.next() {
            self.active = ActiveSection(next);
        }
        Ok(())
    }

    pub fn errors(&self, section: FormSection) -> &FieldErrors {
        match section {
            FormSection::Customer => &self.customer_errors,
            FormSection::Vendor => &self.vendor_errors,
            FormSection::Order => &self.order_errors,
        }
    }

    fn errors_mut(&mut self, section: FormSection) -> &mut FieldErrors {
        match section {
            FormSection::Customer => &mut self.customer_errors,
            FormSection::Vendor => &mut self.vendor_errors,
            FormSection::Order => &mut self.order_errors,
        }
    }

    pub fn field_error(&self, section: FormSection, field: &str) -> Option<&str> {
        self.errors(section).get(field)
    }

    /// Drop the stored message of one field, e.g. once the user edits it
    pub fn clear_field_error(&mut self, section: FormSection, field: &str) {
        self.errors_mut(section).remove(field);
    }

    /// Store errors reported for a submitted payload and move to the first
    /// section that has any. The completion set is left as it is.
    pub fn apply_errors(&mut self, errors: SectionErrors) {
        let mut first = None;
        for (section, field_errors) in errors {
            if field_errors.is_empty() {
                continue;
            }
            first.get_or_insert(section);
            *self.errors_mut(section) = field_errors;
        }
        if let Some(section) = first {
            self.active = ActiveSection(section);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.completed.is_complete()
    }

    /// Aggregated payload, available only once every section is complete
    pub fn payload(&self) -> Option<OrderPayload> {
        if !self.can_submit() {
            return None;
        }
        Some(OrderPayload {
            customer: self.customer.clone(),
            vendor: self.vendor.clone(),
            order: self.order.clone(),
        })
    }

    /// Hand the payload to `send`. When a section is still incomplete `send`
    /// is not called at all.
    pub fn submit<R>(&self, send: impl FnOnce(OrderPayload) -> R) -> Result<R, GateError> {
        match self.payload() {
            Some(payload) => {
                log::info!("submitting order for customer {}", payload.customer.customer_id);
                Ok(send(payload))
            }
            None => {
                let missing = self.completed.missing();
                log::warn!("order submit refused, incomplete sections: {:?}", missing);
                Err(GateError::Incomplete { missing })
            }
        }
    }

    /// Full form reset: fields, errors, completion set and active section
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_order::fixtures::{sample_order, valid_customer, valid_vendor};
    use crate::domain::a003_order::parts::fields;
    use crate::enums::TypeOfWork;

    fn filled() -> OrderWizard {
        let mut wizard = OrderWizard::new();
        wizard.customer = valid_customer();
        wizard.vendor = valid_vendor();
        wizard.order = sample_order();
        wizard
    }

    #[test]
    fn starts_on_customer_with_nothing_completed() {
        let wizard = OrderWizard::new();
        assert_eq!(wizard.active(), FormSection::Customer);
        assert!(wizard.completed().is_empty());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn missing_type_of_work_blocks_customer_section() {
        let mut wizard = OrderWizard::new();
        wizard.customer = valid_customer();
        wizard.customer.type_of_work = None;

        let errors = wizard.complete_section(FormSection::Customer).unwrap_err();
        assert!(errors.contains(fields::TYPE_OF_WORK));
        assert!(wizard.completed().is_empty());
        assert_eq!(wizard.active(), FormSection::Customer);
        assert!(wizard.field_error(FormSection::Customer, fields::TYPE_OF_WORK).is_some());

        wizard.customer.type_of_work = Some(TypeOfWork::PatentFiling);
        assert!(wizard.complete_section(FormSection::Customer).is_ok());
        assert!(wizard.is_completed(FormSection::Customer));
        assert_eq!(wizard.active(), FormSection::Vendor);
        assert!(wizard.errors(FormSection::Customer).is_empty());
    }

    #[test]
    fn sections_auto_advance_and_order_stays() {
        let mut wizard = filled();
        wizard.complete_section(FormSection::Customer).unwrap();
        assert_eq!(wizard.active(), FormSection::Vendor);
        wizard.complete_section(FormSection::Vendor).unwrap();
        assert_eq!(wizard.active(), FormSection::Order);
        wizard.complete_section(FormSection::Order).unwrap();
        assert_eq!(wizard.active(), FormSection::Order);
        assert!(wizard.can_submit());
    }

    #[test]
    fn failing_section_does_not_shrink_completion_set() {
        let mut wizard = filled();
        wizard.complete_section(FormSection::Customer).unwrap();
        wizard.vendor.vendor_id.clear();
        assert!(wizard.complete_section(FormSection::Vendor).is_err());
        assert!(wizard.is_completed(FormSection::Customer));
        assert_eq!(wizard.completed().len(), 1);

        // editing a completed section does not un-complete it either
        wizard.customer.total_invoice_value.clear();
        assert!(wizard.complete_section(FormSection::Customer).is_err());
        assert!(wizard.is_completed(FormSection::Customer));
    }

    #[test]
    fn navigation_is_free() {
        let mut wizard = OrderWizard::new();
        wizard.select_section(FormSection::Order);
        assert_eq!(wizard.active(), FormSection::Order);
        wizard.select_section(FormSection::Customer);
        assert_eq!(wizard.active(), FormSection::Customer);
        assert!(wizard.completed().is_empty());
    }

    #[test]
    fn order_section_completes_while_empty() {
        let mut wizard = OrderWizard::new();
        assert!(wizard.complete_section(FormSection::Order).is_ok());
        assert!(wizard.is_completed(FormSection::Order));
        assert!(!wizard.can_submit());
    }

    #[test]
    fn submit_is_refused_until_all_sections_complete() {
        let mut wizard = filled();
        let mut sent = 0;

        wizard.complete_section(FormSection::Customer).unwrap();
        wizard.complete_section(FormSection::Vendor).unwrap();
        let refused = wizard.submit(|_| sent += 1);
        assert_eq!(
            refused,
            Err(GateError::Incomplete {
                missing: vec![FormSection::Order]
            })
        );
        assert_eq!(sent, 0);
        assert!(wizard.payload().is_none());

        wizard.complete_section(FormSection::Order).unwrap();
        let id = wizard.submit(|payload| {
            sent += 1;
            payload.customer.customer_id.clone()
        });
        assert_eq!(id, Ok(valid_customer().customer_id));
        assert_eq!(sent, 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut wizard = filled();
        for section in FormSection::ALL {
            wizard.complete_section(section).unwrap();
        }
        wizard.reset();
        assert_eq!(wizard, OrderWizard::new());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn clearing_a_field_error_keeps_the_rest() {
        let mut wizard = OrderWizard::new();
        let _ = wizard.complete_section(FormSection::Vendor);
        assert!(wizard.field_error(FormSection::Vendor, fields::VENDOR_ID).is_some());
        wizard.clear_field_error(FormSection::Vendor, fields::VENDOR_ID);
        assert!(wizard.field_error(FormSection::Vendor, fields::VENDOR_ID).is_none());
        assert!(wizard
            .field_error(FormSection::Vendor, fields::CURRENT_STATUS)
            .is_some());
    }

    #[test]
    fn server_errors_land_on_the_first_failing_section() {
        let mut wizard = filled();
        for section in FormSection::ALL {
            wizard.complete_section(section).unwrap();
        }

        let mut vendor = FieldErrors::new();
        vendor.insert(fields::VENDOR_ID, "Unknown vendor");
        let mut reported = SectionErrors::new();
        reported.insert(FormSection::Order, FieldErrors::new());
        reported.insert(FormSection::Vendor, vendor);
        wizard.apply_errors(reported);

        assert_eq!(wizard.active(), FormSection::Vendor);
        assert_eq!(
            wizard.field_error(FormSection::Vendor, fields::VENDOR_ID),
            Some("Unknown vendor")
        );
        assert!(wizard.can_submit());
    }
}

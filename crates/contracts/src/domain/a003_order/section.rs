use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Section of the order creation wizard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormSection {
    Customer,
    Vendor,
    Order,
}

impl FormSection {
    pub const ALL: [FormSection; 3] = [FormSection::Customer, FormSection::Vendor, FormSection::Order];

    /// Section the wizard moves to after this one completes
    pub fn next(&self) -> Option<FormSection> {
        match self {
            FormSection::Customer => Some(FormSection::Vendor),
            FormSection::Vendor => Some(FormSection::Order),
            FormSection::Order => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormSection::Customer => "Customer Part",
            FormSection::Vendor => "Vendor Part",
            FormSection::Order => "Order Part",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FormSection::Customer => "customer",
            FormSection::Vendor => "vendor",
            FormSection::Order => "order",
        }
    }
}

/// Sections that passed validation. Grows monotonically; only a full
/// wizard reset empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCompletionSet(BTreeSet<FormSection>);

impl SectionCompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn mark(&mut self, section: FormSection) -> bool {
        self.0.insert(section)
    }

    pub fn contains(&self, section: FormSection) -> bool {
        self.0.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All three sections are present
    pub fn is_complete(&self) -> bool {
        FormSection::ALL.iter().all(|s| self.0.contains(s))
    }

    /// Sections still to complete, in display order
    pub fn missing(&self) -> Vec<FormSection> {
        FormSection::ALL
            .iter()
            .copied()
            .filter(|s| !self.0.contains(s))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = FormSection> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_sections_in_order() {
        assert_eq!(FormSection::Customer.next(), Some(FormSection::Vendor));
        assert_eq!(FormSection::Vendor.next(), Some(FormSection::Order));
        assert_eq!(FormSection::Order.next(), None);
    }

    #[test]
    fn completion_set_reports_missing_sections() {
        let mut set = SectionCompletionSet::new();
        assert_eq!(set.missing(), FormSection::ALL.to_vec());
        set.mark(FormSection::Vendor);
        assert_eq!(set.missing(), vec![FormSection::Customer, FormSection::Order]);
        assert!(!set.mark(FormSection::Vendor));
        set.mark(FormSection::Customer);
        set.mark(FormSection::Order);
        assert!(set.is_complete());
        assert!(set.missing().is_empty());
    }
}

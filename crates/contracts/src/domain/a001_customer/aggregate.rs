use crate::domain::common::party::validate_party;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::shared::contact::ContactInfo;
use crate::shared::location::{AddressSelection, LocationTable};
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::uuid_aggregate_id!(
    /// Unique customer identifier
    CustomerId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Client who places IP work orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: AddressSelection,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl Customer {
    /// Build a new customer from a validated form; `code` is generated when absent
    pub fn new_for_insert(dto: &CustomerDto, sequence: usize) -> Self {
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("CUS-{:04}", sequence));
        Self {
            id: CustomerId::new_v4(),
            code,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            address: dto.address.clone(),
            contacts: dto.contacts.clone(),
            comment: dto.comment.clone(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &CustomerDto) {
        if let Some(code) = dto.code.clone().filter(|c| !c.trim().is_empty()) {
            self.code = code;
        }
        self.name = dto.name.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.address = dto.address.clone();
        self.contacts = dto.contacts.clone();
        self.comment = dto.comment.clone();
        self.metadata.touch();
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: AddressSelection,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
    pub comment: Option<String>,
}

impl CustomerDto {
    pub fn validate(&self, table: &LocationTable) -> Result<(), FieldErrors> {
        validate_party(
            table,
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.contacts,
        )
        .into_result()
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.to_string_id()),
            code: Some(c.code.clone()),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            contacts: c.contacts.clone(),
            comment: c.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CustomerDto {
        CustomerDto {
            name: "  Northwind Labs ".into(),
            email: "legal@northwind.test".into(),
            address: AddressSelection {
                country: "India".into(),
                state: "Karnataka".into(),
                city: "Bengaluru".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn insert_generates_code_and_trims() {
        let customer = Customer::new_for_insert(&dto(), 7);
        assert_eq!(customer.code, "CUS-0007");
        assert_eq!(customer.name, "Northwind Labs");
        assert_eq!(customer.picker_label(), "Northwind Labs (CUS-0007)");
        assert_eq!(Customer::list_name(), "Customers");
    }

    #[test]
    fn update_keeps_code_when_blank() {
        let mut customer = Customer::new_for_insert(&dto(), 1);
        let mut changed = CustomerDto::from(&customer);
        changed.code = Some("  ".into());
        changed.name = "Northwind".into();
        customer.update(&changed);
        assert_eq!(customer.code, "CUS-0001");
        assert_eq!(customer.name, "Northwind");
        assert_eq!(customer.metadata.version, 1);
    }

    #[test]
    fn stale_address_fails_validation() {
        let table = LocationTable::builtin();
        assert!(dto().validate(&table).is_ok());

        let mut stale = dto();
        stale.address.country = "Japan".into();
        let errors = stale.validate(&table).unwrap_err();
        assert!(errors.contains("address.state"));
    }

    #[test]
    fn dto_wire_shape_is_camel_case() {
        let json = serde_json::to_value(dto()).unwrap();
        assert_eq!(json["address"]["country"], "India");
        assert!(json.get("contacts").is_some());
    }
}

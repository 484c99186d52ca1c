use crate::domain::common::party::validate_party;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::TypeOfWork;
use crate::shared::contact::ContactInfo;
use crate::shared::location::{AddressSelection, LocationTable};
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::uuid_aggregate_id!(
    /// Unique vendor identifier
    VendorId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Associate firm or attorney the work is handed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
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
    /// Kinds of work the vendor takes on
    #[serde(default)]
    pub services: Vec<TypeOfWork>,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl Vendor {
    pub fn new_for_insert(dto: &VendorDto, sequence: usize) -> Self {
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("VEN-{:04}", sequence));
        Self {
            id: VendorId::new_v4(),
            code,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            address: dto.address.clone(),
            contacts: dto.contacts.clone(),
            services: dto.services.clone(),
            comment: dto.comment.clone(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &VendorDto) {
        if let Some(code) = dto.code.clone().filter(|c| !c.trim().is_empty()) {
            self.code = code;
        }
        self.name = dto.name.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.address = dto.address.clone();
        self.contacts = dto.contacts.clone();
        self.services = dto.services.clone();
        self.comment = dto.comment.clone();
        self.metadata.touch();
    }

    pub fn offers(&self, work: TypeOfWork) -> bool {
        self.services.contains(&work)
    }
}

impl AggregateRoot for Vendor {
    type Id = VendorId;

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
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendors"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
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
    #[serde(default)]
    pub services: Vec<TypeOfWork>,
    pub comment: Option<String>,
}

impl VendorDto {
    pub fn validate(&self, table: &LocationTable) -> Result<(), FieldErrors> {
        let mut errors = validate_party(
            table,
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.contacts,
        );
        let mut seen = Vec::with_capacity(self.services.len());
        for service in &self.services {
            if seen.contains(service) {
                errors.insert("services", format!("{} is listed twice", service));
            }
            seen.push(*service);
        }
        errors.into_result()
    }
}

impl From<&Vendor> for VendorDto {
    fn from(v: &Vendor) -> Self {
        Self {
            id: Some(v.to_string_id()),
            code: Some(v.code.clone()),
            name: v.name.clone(),
            email: v.email.clone(),
            phone: v.phone.clone(),
            address: v.address.clone(),
            contacts: v.contacts.clone(),
            services: v.services.clone(),
            comment: v.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> VendorDto {
        VendorDto {
            name: "Rhine Patent Partners".into(),
            address: AddressSelection {
                country: "Germany".into(),
                state: "Bavaria".into(),
                city: "Munich".into(),
            },
            services: vec![TypeOfWork::PatentFiling, TypeOfWork::PatentProsecution],
            ..Default::default()
        }
    }

    #[test]
    fn insert_generates_code() {
        let vendor = Vendor::new_for_insert(&dto(), 12);
        assert_eq!(vendor.code, "VEN-0012");
        assert!(vendor.offers(TypeOfWork::PatentFiling));
        assert!(!vendor.offers(TypeOfWork::Litigation));
    }

    #[test]
    fn duplicate_services_are_rejected() {
        let table = LocationTable::builtin();
        assert!(dto().validate(&table).is_ok());

        let mut twice = dto();
        twice.services.push(TypeOfWork::PatentFiling);
        let errors = twice.validate(&table).unwrap_err();
        assert!(errors.contains("services"));
    }
}

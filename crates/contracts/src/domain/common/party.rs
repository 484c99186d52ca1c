//! Fields shared by customers and vendors

use crate::shared::contact::ContactInfo;
use crate::shared::location::{AddressSelection, LocationLevel, LocationTable};
use crate::shared::validation::{FieldErrors, ValidationRules};

const NAME_MAX_LENGTH: usize = 200;
const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(NAME_MAX_LENGTH);

/// Validate name, email, phone, address and contacts of a party form.
/// Address errors are reported under `address.country`, `address.state`, ...
pub fn validate_party(
    table: &LocationTable,
    name: &str,
    email: &str,
    phone: &str,
    address: &AddressSelection,
    contacts: &[ContactInfo],
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    NAME_RULES.check_string(&mut errors, "name", "Name", name);

    let email = email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        errors.insert("email", "Email is not valid");
    }

    let phone = phone.trim();
    if !phone.is_empty() && !looks_like_phone(phone) {
        errors.insert("phone", "Phone may contain digits, spaces, +, - and parentheses");
    }

    errors.extend_prefixed("address", address.validate(table, Some(LocationLevel::City)));

    for (i, contact) in contacts.iter().enumerate() {
        if let ContactInfo::Structured { name, email, phone } = contact {
            if name.trim().is_empty() && email.trim().is_empty() && phone.trim().is_empty() {
                errors.insert(format!("contacts.{}", i), "Contact is empty");
            } else if !email.trim().is_empty() && !looks_like_email(email.trim()) {
                errors.insert(format!("contacts.{}", i), "Contact email is not valid");
            }
        }
    }

    errors
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

fn looks_like_phone(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toronto() -> AddressSelection {
        AddressSelection {
            country: "Canada".into(),
            state: "Ontario".into(),
            city: "Toronto".into(),
        }
    }

    #[test]
    fn valid_party_has_no_errors() {
        let table = LocationTable::builtin();
        let errors = validate_party(&table, "Acme IP", "ip@acme.test", "+1 (416) 555-0100", &toronto(), &[]);
        assert!(errors.is_empty(), "{}", errors);
    }

    #[test]
    fn reports_each_bad_field() {
        let table = LocationTable::builtin();
        let contacts = vec![ContactInfo::structured("", "", "")];
        let errors = validate_party(&table, " ", "nope", "call me", &AddressSelection::new(), &contacts);
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("phone"));
        assert!(errors.contains("address.country"));
        assert!(errors.contains("address.city"));
        assert!(errors.contains("contacts.0"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let table = LocationTable::builtin();
        let name = "x".repeat(NAME_MAX_LENGTH);
        assert!(validate_party(&table, &name, "", "", &toronto(), &[]).is_empty());

        let name = "x".repeat(NAME_MAX_LENGTH + 1);
        let errors = validate_party(&table, &name, "", "", &toronto(), &[]);
        assert!(errors.contains("name"));
    }

    #[test]
    fn unparsed_contacts_are_accepted() {
        let table = LocationTable::builtin();
        let contacts = vec![ContactInfo::parse("reception desk")];
        let errors = validate_party(&table, "Acme", "", "", &toronto(), &contacts);
        assert!(errors.is_empty());
    }
}

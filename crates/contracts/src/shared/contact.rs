//! Point-of-contact values
//!
//! Contacts are stored as serialized JSON text. Older records may hold free
//! text instead, so parsing falls back to [`ContactInfo::Unparsed`] rather
//! than failing.

use serde::{Deserialize, Serialize};

/// Structured contact fields as stored in JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactInfo {
    Structured {
        name: String,
        email: String,
        phone: String,
    },
    Unparsed {
        raw: String,
    },
}

impl ContactInfo {
    pub fn structured(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        ContactInfo::Structured {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Parse a single stored contact
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<StructuredContact>(raw.trim()) {
            Ok(c) => c.into(),
            Err(e) => {
                log::debug!("contact is not structured JSON ({}), keeping raw text", e);
                ContactInfo::Unparsed {
                    raw: raw.to_string(),
                }
            }
        }
    }

    /// Parse a stored contact list: a JSON array, a single JSON object, or
    /// free text (one unparsed entry). Blank input yields no contacts.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        if let Ok(items) = serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            return items.into_iter().map(Self::from_value).collect();
        }
        vec![Self::parse(trimmed)]
    }

    fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(raw) => ContactInfo::Unparsed { raw },
            other => match serde_json::from_value::<StructuredContact>(other.clone()) {
                Ok(c) => c.into(),
                Err(_) => ContactInfo::Unparsed {
                    raw: other.to_string(),
                },
            },
        }
    }

    /// Serialize a list back to its stored form
    pub fn list_to_storage(contacts: &[ContactInfo]) -> String {
        let structured: Vec<serde_json::Value> = contacts.iter().map(|c| c.storage_value()).collect();
        serde_json::Value::Array(structured).to_string()
    }

    /// Serialize to the stored form; unparsed text is kept verbatim
    pub fn to_storage(&self) -> String {
        match self {
            ContactInfo::Unparsed { raw } => raw.clone(),
            ContactInfo::Structured { .. } => self.storage_value().to_string(),
        }
    }

    fn storage_value(&self) -> serde_json::Value {
        match self {
            ContactInfo::Structured { name, email, phone } => serde_json::json!({
                "name": name,
                "email": email,
                "phone": phone,
            }),
            ContactInfo::Unparsed { raw } => serde_json::Value::String(raw.clone()),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ContactInfo::Structured { .. })
    }

    /// Text shown in tables and cards
    pub fn display(&self) -> String {
        match self {
            ContactInfo::Structured { name, email, phone } => {
                let mut out = name.clone();
                if !email.is_empty() {
                    if out.is_empty() {
                        out = email.clone();
                    } else {
                        out.push_str(&format!(" <{}>", email));
                    }
                }
                if !phone.is_empty() {
                    if out.is_empty() {
                        out = phone.clone();
                    } else {
                        out.push_str(&format!(", {}", phone));
                    }
                }
                out
            }
            ContactInfo::Unparsed { raw } => raw.clone(),
        }
    }
}

impl From<StructuredContact> for ContactInfo {
    fn from(c: StructuredContact) -> Self {
        ContactInfo::Structured {
            name: c.name,
            email: c.email,
            phone: c.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_json() {
        let c = ContactInfo::parse(r#"{"name":"Ann Lee","email":"ann@example.com","phone":"+1 555"}"#);
        assert_eq!(c, ContactInfo::structured("Ann Lee", "ann@example.com", "+1 555"));
        assert_eq!(c.display(), "Ann Lee <ann@example.com>, +1 555");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let c = ContactInfo::parse("call Bob on Monday");
        assert_eq!(
            c,
            ContactInfo::Unparsed {
                raw: "call Bob on Monday".into()
            }
        );
        assert_eq!(c.display(), "call Bob on Monday");
        assert!(!c.is_structured());
    }

    #[test]
    fn truncated_json_is_unparsed() {
        let c = ContactInfo::parse(r#"{"name":"Ann"#);
        assert!(!c.is_structured());
    }

    #[test]
    fn list_accepts_array_object_and_text() {
        let list = ContactInfo::parse_list(r#"[{"name":"A"},{"name":"B","phone":"1"}]"#);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(ContactInfo::is_structured));

        let single = ContactInfo::parse_list(r#"{"name":"A"}"#);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_structured());

        let text = ContactInfo::parse_list("front desk");
        assert_eq!(text.len(), 1);
        assert!(!text[0].is_structured());

        assert!(ContactInfo::parse_list("   ").is_empty());
    }

    #[test]
    fn mixed_list_survives_storage() {
        let contacts = vec![
            ContactInfo::structured("Ann", "ann@example.com", ""),
            ContactInfo::Unparsed {
                raw: "ask reception".into(),
            },
        ];
        let stored = ContactInfo::list_to_storage(&contacts);
        assert_eq!(ContactInfo::parse_list(&stored), contacts);
    }

    #[test]
    fn structured_storage_is_reparsed() {
        let c = ContactInfo::structured("Ann", "", "+44 20");
        assert_eq!(ContactInfo::parse(&c.to_storage()), c);
        assert_eq!(c.display(), "Ann, +44 20");
    }
}

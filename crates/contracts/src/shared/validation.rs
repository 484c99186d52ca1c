//! Field-level validation shared by the forms
//!
//! Validation never fails hard: every check writes a short message into a
//! [`FieldErrors`] map keyed by the form field name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date format produced by `<input type="date">`
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Mapping field name -> human readable message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`, prefixing every key with `prefix.`
    pub fn extend_prefixed(&mut self, prefix: &str, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(format!("{}.{}", prefix, field), message);
        }
    }

    /// `Ok(())` when no errors were collected
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }

    /// String check writing into `errors` under `field`
    pub fn check_string(&self, errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
        if let Err(message) = self.validate_string(value, label) {
            errors.insert(field, message);
        }
    }

    /// Required/optional date in form format
    pub fn check_date(
        &self,
        errors: &mut FieldErrors,
        field: &str,
        label: &str,
        value: &str,
    ) -> Option<NaiveDate> {
        if let Err(message) = self.validate_string(value, label) {
            errors.insert(field, message);
            return None;
        }
        if value.trim().is_empty() {
            return None;
        }
        match parse_form_date(value) {
            Some(date) => Some(date),
            None => {
                errors.insert(field, format!("{} must be a date (YYYY-MM-DD)", label));
                None
            }
        }
    }

    /// Required/optional amount, checked against min/max
    pub fn check_amount(
        &self,
        errors: &mut FieldErrors,
        field: &str,
        label: &str,
        value: &str,
    ) -> Option<f64> {
        if let Err(message) = self.validate_string(value, label) {
            errors.insert(field, message);
            return None;
        }
        if value.trim().is_empty() {
            return None;
        }
        let Some(amount) = parse_amount(value) else {
            errors.insert(field, format!("{} must be a number", label));
            return None;
        };
        if let Err(message) = self.validate_number(amount, label) {
            errors.insert(field, message);
            return None;
        }
        Some(amount)
    }
}

/// Parse a `YYYY-MM-DD` form value
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT).ok()
}

/// Parse a money amount; accepts `1234.5`, `1 234,50`, `1,234.50` and
/// `1,234,567`. Without a dot, a single comma followed by one or two
/// digits is the decimal separator. Every other comma must separate
/// groups of three digits.
pub fn parse_amount(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let (integer, fraction) = match compact.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => match compact.rsplit_once(',') {
            Some((integer, fraction)) if !integer.contains(',') && (1..=2).contains(&fraction.len()) => {
                (integer, Some(fraction))
            }
            _ => (compact.as_str(), None),
        },
    };
    let integer = strip_thousands(integer)?;
    let normalized = match fraction {
        Some(fraction) => format!("{}.{}", integer, fraction),
        None => integer,
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Drop thousands separators; `None` when a group is malformed
fn strip_thousands(integer: &str) -> Option<String> {
    let mut groups = integer.split(',');
    let head = groups.next()?.trim_start_matches(|c| c == '-' || c == '+');
    if integer.contains(',') && (head.is_empty() || head.len() > 3) {
        return None;
    }
    if groups.any(|group| group.len() != 3) {
        return None;
    }
    Some(integer.replace(',', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        errors.insert("name", "Name is too long");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.insert("typeOfWork", "Type of work is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["typeOfWork"], "Type of work is required");
    }

    #[test]
    fn required_string_rejects_whitespace() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Name").is_err());
        assert!(rules.validate_string("Acme", "Name").is_ok());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
    }

    #[test]
    fn amount_parsing_accepts_common_separators() {
        assert_eq!(parse_amount("1234.5"), Some(1234.5));
        assert_eq!(parse_amount("1 234,50"), Some(1234.5));
        assert_eq!(parse_amount("1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("1,234"), Some(1234.0));
        assert_eq!(parse_amount("1,234,567"), Some(1234567.0));
        assert_eq!(parse_amount("12,5"), Some(12.5));
        assert_eq!(parse_amount("-1,250"), Some(-1250.0));
        assert_eq!(parse_amount("1,23,4"), None);
        assert_eq!(parse_amount("1234,567"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn check_amount_applies_min() {
        let mut errors = FieldErrors::new();
        let rules = ValidationRules::required().with_min(0.0);
        assert_eq!(rules.check_amount(&mut errors, "total", "Total", "-5"), None);
        assert!(errors.contains("total"));

        let mut errors = FieldErrors::new();
        assert_eq!(rules.check_amount(&mut errors, "total", "Total", "12.5"), Some(12.5));
        assert!(errors.is_empty());
    }

    #[test]
    fn check_date_reports_bad_format() {
        let mut errors = FieldErrors::new();
        let rules = ValidationRules::required();
        assert!(rules.check_date(&mut errors, "d", "Date", "15.03.2024").is_none());
        assert_eq!(errors.get("d"), Some("Date must be a date (YYYY-MM-DD)"));

        let mut errors = FieldErrors::new();
        assert!(rules.check_date(&mut errors, "d", "Date", "2024-03-15").is_some());
        assert!(errors.is_empty());
    }
}

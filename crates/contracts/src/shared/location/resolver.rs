//! Cascading country -> state -> city selection
//!
//! An ancestor change always clears its dependants, so a state left over
//! from a previously selected country can only appear if a caller bypasses
//! these methods. [`AddressSelection::validate`] catches that case.

use super::LocationTable;
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

/// Level of a cascading address selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationLevel {
    Country,
    State,
    City,
}

impl LocationLevel {
    /// Form field name for this level
    pub fn field(&self) -> &'static str {
        match self {
            LocationLevel::Country => "country",
            LocationLevel::State => "state",
            LocationLevel::City => "city",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationLevel::Country => "Country",
            LocationLevel::State => "State",
            LocationLevel::City => "City",
        }
    }
}

/// Current address selection; an empty string means "not selected"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSelection {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
}

impl AddressSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a country. State and city are always cleared, even when the
    /// same country is selected again.
    pub fn on_country_change(&mut self, country: impl Into<String>) -> &mut Self {
        self.country = country.into();
        self.state.clear();
        self.city.clear();
        self
    }

    /// Select a state; clears the city
    pub fn on_state_change(&mut self, state: impl Into<String>) -> &mut Self {
        self.state = state.into();
        self.city.clear();
        self
    }

    pub fn on_city_change(&mut self, city: impl Into<String>) -> &mut Self {
        self.city = city.into();
        self
    }

    /// Dispatch a change by level
    pub fn on_change(&mut self, level: LocationLevel, value: impl Into<String>) -> &mut Self {
        match level {
            LocationLevel::Country => self.on_country_change(value),
            LocationLevel::State => self.on_state_change(value),
            LocationLevel::City => self.on_city_change(value),
        }
    }

    pub fn value(&self, level: LocationLevel) -> &str {
        match level {
            LocationLevel::Country => &self.country,
            LocationLevel::State => &self.state,
            LocationLevel::City => &self.city,
        }
    }

    /// Whether the selector for `level` accepts input
    pub fn is_enabled(&self, level: LocationLevel) -> bool {
        match level {
            LocationLevel::Country => true,
            LocationLevel::State => !self.country.is_empty(),
            LocationLevel::City => !self.state.is_empty(),
        }
    }

    /// Choices for `level` given the ancestors currently selected
    pub fn options(&self, table: &LocationTable, level: LocationLevel) -> Vec<&'static str> {
        match level {
            LocationLevel::Country => table.countries(),
            LocationLevel::State => list_states(table, &self.country),
            LocationLevel::City => list_cities(table, &self.country, &self.state),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_empty() && self.state.is_empty() && self.city.is_empty()
    }

    /// Every non-empty level is a member of its parent in `table`
    pub fn is_consistent(&self, table: &LocationTable) -> bool {
        if self.country.is_empty() {
            return self.state.is_empty() && self.city.is_empty();
        }
        if !table.contains_country(&self.country) {
            return false;
        }
        if self.state.is_empty() {
            return self.city.is_empty();
        }
        if !table.contains_state(&self.country, &self.state) {
            return false;
        }
        self.city.is_empty() || table.contains_city(&self.country, &self.state, &self.city)
    }

    /// Field errors for missing required levels and stale combinations.
    /// `required_depth` is the deepest level that must be filled in.
    pub fn validate(&self, table: &LocationTable, required_depth: Option<LocationLevel>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let depth = match required_depth {
            None => 0,
            Some(LocationLevel::Country) => 1,
            Some(LocationLevel::State) => 2,
            Some(LocationLevel::City) => 3,
        };

        let levels = [LocationLevel::Country, LocationLevel::State, LocationLevel::City];
        for (i, level) in levels.iter().enumerate() {
            if i < depth && self.value(*level).trim().is_empty() {
                errors.insert(level.field(), format!("{} is required", level.label()));
            }
        }

        if !self.country.is_empty() && !table.contains_country(&self.country) {
            errors.insert("country", "Unknown country");
        } else if !self.state.is_empty() && !table.contains_state(&self.country, &self.state) {
            errors.insert("state", "State does not belong to the selected country");
        } else if !self.city.is_empty()
            && !table.contains_city(&self.country, &self.state, &self.city)
        {
            errors.insert("city", "City does not belong to the selected state");
        }

        errors
    }

    /// One-line representation, skipping unselected levels
    pub fn display(&self) -> String {
        [&self.city, &self.state, &self.country]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// States of `country`; empty when unset or unknown
pub fn list_states(table: &LocationTable, country: &str) -> Vec<&'static str> {
    table.states(country)
}

/// Cities of `country`/`state`; empty when either is missing
pub fn list_cities(table: &LocationTable, country: &str, state: &str) -> Vec<&'static str> {
    table.cities(country, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AddressSelection {
        AddressSelection {
            country: "Canada".into(),
            state: "Ontario".into(),
            city: "Toronto".into(),
        }
    }

    #[test]
    fn country_change_clears_state_and_city() {
        let table = LocationTable::builtin();
        for country in table.countries() {
            let mut selection = filled();
            selection.on_country_change(country);
            assert_eq!(selection.country, country);
            assert_eq!(selection.state, "");
            assert_eq!(selection.city, "");
        }
    }

    #[test]
    fn reselecting_same_country_still_clears() {
        let mut selection = filled();
        selection.on_country_change("Canada");
        assert_eq!(selection.state, "");
        assert_eq!(selection.city, "");
    }

    #[test]
    fn state_change_clears_city() {
        let mut selection = filled();
        selection.on_state_change("Quebec");
        assert_eq!(selection.state, "Quebec");
        assert_eq!(selection.city, "");

        selection.on_city_change("Laval");
        selection.on_state_change("");
        assert_eq!(selection.city, "");
    }

    #[test]
    fn city_change_has_no_cascade() {
        let mut selection = filled();
        selection.on_city_change("Ottawa");
        assert_eq!(selection.country, "Canada");
        assert_eq!(selection.state, "Ontario");
        assert_eq!(selection.city, "Ottawa");
    }

    #[test]
    fn canada_then_australia_scenario() {
        let table = LocationTable::builtin();
        let mut selection = AddressSelection::new();
        selection.on_country_change("Canada").on_state_change("Ontario");
        assert_eq!(
            list_cities(&table, &selection.country, &selection.state),
            vec!["Toronto", "Ottawa", "Hamilton", "London", "Kitchener"]
        );

        selection.on_country_change("Australia");
        assert_eq!(selection.state, "");
        assert_eq!(selection.city, "");
        assert!(list_states(&table, "Australia").contains(&"Victoria"));
    }

    #[test]
    fn selectors_enable_top_down() {
        let mut selection = AddressSelection::new();
        assert!(selection.is_enabled(LocationLevel::Country));
        assert!(!selection.is_enabled(LocationLevel::State));
        assert!(!selection.is_enabled(LocationLevel::City));

        selection.on_country_change("India");
        assert!(selection.is_enabled(LocationLevel::State));
        assert!(!selection.is_enabled(LocationLevel::City));

        selection.on_state_change("Karnataka");
        assert!(selection.is_enabled(LocationLevel::City));
    }

    #[test]
    fn options_follow_selection() {
        let table = LocationTable::builtin();
        let mut selection = AddressSelection::new();
        assert!(selection.options(&table, LocationLevel::State).is_empty());
        assert!(selection.options(&table, LocationLevel::City).is_empty());

        selection.on_change(LocationLevel::Country, "Japan");
        assert!(selection.options(&table, LocationLevel::State).contains(&"Osaka"));
        selection.on_change(LocationLevel::State, "Osaka");
        assert!(selection.options(&table, LocationLevel::City).contains(&"Sakai"));
    }

    #[test]
    fn stale_state_is_reported() {
        let table = LocationTable::builtin();
        let stale = AddressSelection {
            country: "Australia".into(),
            state: "Ontario".into(),
            city: String::new(),
        };
        assert!(!stale.is_consistent(&table));
        let errors = stale.validate(&table, None);
        assert!(errors.contains("state"));
    }

    #[test]
    fn required_levels_are_reported() {
        let table = LocationTable::builtin();
        let mut selection = AddressSelection::new();
        selection.on_country_change("Canada");
        let errors = selection.validate(&table, Some(LocationLevel::City));
        assert!(!errors.contains("country"));
        assert!(errors.contains("state"));
        assert!(errors.contains("city"));

        assert!(filled().validate(&table, Some(LocationLevel::City)).is_empty());
        assert!(filled().is_consistent(&table));
    }

    #[test]
    fn display_skips_empty_levels() {
        assert_eq!(filled().display(), "Toronto, Ontario, Canada");
        let mut partial = AddressSelection::new();
        partial.on_country_change("Canada");
        assert_eq!(partial.display(), "Canada");
    }
}

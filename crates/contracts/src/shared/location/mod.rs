//! Static country -> state -> city reference data
//!
//! The table is generated at build time from `locations.json` and never
//! mutated afterwards. Lookups are case-sensitive and tolerant: an unknown
//! country or state yields an empty result instead of an error.

pub mod resolver;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use resolver::{AddressSelection, LocationLevel};

/// One state with its ordered list of cities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateEntry {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

/// One country with its ordered list of states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: &'static str,
    pub states: &'static [StateEntry],
}

include!(concat!(env!("OUT_DIR"), "/locations_gen.rs"));

static BUILTIN_INDEX: Lazy<HashMap<&'static str, &'static CountryEntry>> =
    Lazy::new(|| LOCATIONS.iter().map(|c| (c.name, c)).collect());

/// Read-only view over a location table
#[derive(Debug, Clone, Copy)]
pub struct LocationTable {
    countries: &'static [CountryEntry],
    builtin: bool,
}

impl LocationTable {
    /// Table embedded into the binary
    pub fn builtin() -> Self {
        Self {
            countries: LOCATIONS,
            builtin: true,
        }
    }

    /// Table over caller-provided static data
    pub const fn new(countries: &'static [CountryEntry]) -> Self {
        Self {
            countries,
            builtin: false,
        }
    }

    fn country(&self, country: &str) -> Option<&'static CountryEntry> {
        if country.is_empty() {
            return None;
        }
        if self.builtin {
            return BUILTIN_INDEX.get(country).copied();
        }
        self.countries.iter().find(|c| c.name == country)
    }

    fn state(&self, country: &str, state: &str) -> Option<&'static StateEntry> {
        if state.is_empty() {
            return None;
        }
        self.country(country)?.states.iter().find(|s| s.name == state)
    }

    /// All country names in table order
    pub fn countries(&self) -> Vec<&'static str> {
        self.countries.iter().map(|c| c.name).collect()
    }

    /// State names of `country`; empty for an unset or unknown country
    pub fn states(&self, country: &str) -> Vec<&'static str> {
        self.country(country)
            .map(|c| c.states.iter().map(|s| s.name).collect())
            .unwrap_or_default()
    }

    /// City names of `country`/`state`; empty if either key is missing
    pub fn cities(&self, country: &str, state: &str) -> Vec<&'static str> {
        self.state(country, state)
            .map(|s| s.cities.to_vec())
            .unwrap_or_default()
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.country(country).is_some()
    }

    pub fn contains_state(&self, country: &str, state: &str) -> bool {
        self.state(country, state).is_some()
    }

    pub fn contains_city(&self, country: &str, state: &str, city: &str) -> bool {
        self.state(country, state)
            .map(|s| s.cities.contains(&city))
            .unwrap_or(false)
    }
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SMALL: &[CountryEntry] = &[CountryEntry {
        name: "Atlantis",
        states: &[
            StateEntry {
                name: "North",
                cities: &["Poseidonia"],
            },
            StateEntry {
                name: "South",
                cities: &["Coralhaven", "Tidewater"],
            },
        ],
    }];

    #[test]
    fn every_builtin_state_has_cities() {
        let table = LocationTable::builtin();
        for country in table.countries() {
            let states = table.states(country);
            assert!(!states.is_empty(), "{} has no states", country);
            for state in states {
                assert!(
                    !table.cities(country, state).is_empty(),
                    "{}/{} has no cities",
                    country,
                    state
                );
            }
        }
    }

    #[test]
    fn ontario_cities_keep_authored_order() {
        let table = LocationTable::builtin();
        assert_eq!(
            table.cities("Canada", "Ontario"),
            vec!["Toronto", "Ottawa", "Hamilton", "London", "Kitchener"]
        );
        assert!(table.states("Australia").contains(&"Victoria"));
    }

    #[test]
    fn unknown_keys_degrade_to_empty() {
        let table = LocationTable::builtin();
        assert!(table.states("NonexistentCountry").is_empty());
        assert!(table.states("").is_empty());
        assert!(table.cities("Canada", "Atlantis").is_empty());
        assert!(table.cities("Nowhere", "Ontario").is_empty());
        assert!(table.cities("Canada", "").is_empty());
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let table = LocationTable::builtin();
        assert!(table.contains_country("Canada"));
        assert!(!table.contains_country("canada"));
        assert!(table.states("CANADA").is_empty());
    }

    #[test]
    fn custom_table_uses_linear_lookup() {
        let table = LocationTable::new(SMALL);
        assert_eq!(table.countries(), vec!["Atlantis"]);
        assert_eq!(table.states("Atlantis"), vec!["North", "South"]);
        assert!(table.contains_city("Atlantis", "South", "Tidewater"));
        assert!(!table.contains_city("Atlantis", "North", "Tidewater"));
        assert!(!table.contains_country("Canada"));
    }
}

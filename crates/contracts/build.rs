//! Build script for generating the static location table from locations.json
//!
//! The JSON asset keeps countries, states and cities as ordered arrays so the
//! generated slices preserve the order in which they were authored.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const LOCATIONS_JSON: &str = "src/shared/location/locations.json";

fn main() {
    println!("cargo:rerun-if-changed={}", LOCATIONS_JSON);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let output_rs = out_dir.join("locations_gen.rs");

    if let Err(e) = generate_locations(Path::new(LOCATIONS_JSON), &output_rs) {
        panic!("Failed to generate location table: {}", e);
    }
}

// ============================================================================
// JSON Schema Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CountryJson {
    country: String,
    states: Vec<StateJson>,
}

#[derive(Debug, Deserialize)]
struct StateJson {
    state: String,
    cities: Vec<String>,
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_locations(json_path: &Path, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let countries: Vec<CountryJson> = serde_json::from_str(&json_content)?;

    check_invariants(&countries)?;

    let code = generate_rust_code(&countries);
    fs::write(output_path, code)?;

    Ok(())
}

/// Keys must be unique within their level and every state needs at least one city.
fn check_invariants(countries: &[CountryJson]) -> Result<(), String> {
    let mut seen_countries = HashSet::new();
    for country in countries {
        if country.country.is_empty() {
            return Err("country name must not be empty".into());
        }
        if !seen_countries.insert(country.country.as_str()) {
            return Err(format!("duplicate country: {}", country.country));
        }

        let mut seen_states = HashSet::new();
        for state in &country.states {
            if state.state.is_empty() {
                return Err(format!("empty state name under {}", country.country));
            }
            if !seen_states.insert(state.state.as_str()) {
                return Err(format!(
                    "duplicate state {} under {}",
                    state.state, country.country
                ));
            }
            if state.cities.is_empty() {
                return Err(format!(
                    "state {} under {} has no cities",
                    state.state, country.country
                ));
            }

            let mut seen_cities = HashSet::new();
            for city in &state.cities {
                if city.is_empty() || !seen_cities.insert(city.as_str()) {
                    return Err(format!(
                        "empty or duplicate city {:?} in {}/{}",
                        city, country.country, state.state
                    ));
                }
            }
        }
    }
    Ok(())
}

fn generate_rust_code(countries: &[CountryJson]) -> String {
    let mut code = String::new();

    code.push_str(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM locations.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str("/// Built-in country -> state -> city table\n");
    code.push_str("pub static LOCATIONS: &[CountryEntry] = &[\n");

    for country in countries {
        code.push_str(&format!(
            "    CountryEntry {{\n        name: \"{}\",\n        states: &[\n",
            escape_string(&country.country)
        ));
        for state in &country.states {
            code.push_str(&format!(
                "            StateEntry {{ name: \"{}\", cities: &[{}] }},\n",
                escape_string(&state.state),
                string_array(&state.cities)
            ));
        }
        code.push_str("        ],\n    },\n");
    }

    code.push_str("];\n");
    code
}

// ============================================================================
// Helper functions
// ============================================================================

fn string_array(arr: &[String]) -> String {
    arr.iter()
        .map(|s| format!("\"{}\"", escape_string(s)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

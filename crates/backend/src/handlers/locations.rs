use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use contracts::shared::location::resolver::{list_cities, list_states};

use crate::shared::data::store::AppState;

#[derive(Debug, Deserialize)]
pub struct StatesQuery {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
}

/// GET /api/locations/countries
pub async fn countries(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.locations.countries())
}

/// GET /api/locations/states?country=
pub async fn states(State(state): State<AppState>, Query(q): Query<StatesQuery>) -> Json<Vec<&'static str>> {
    Json(list_states(&state.locations, &q.country))
}

/// GET /api/locations/cities?country=&state=
pub async fn cities(State(state): State<AppState>, Query(q): Query<CitiesQuery>) -> Json<Vec<&'static str>> {
    Json(list_cities(&state.locations, &q.country, &q.state))
}

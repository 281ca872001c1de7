use axum::{extract::State, Json};
use shared_types::{AppError, ContinentMap, Country, CountryMap};
use std::collections::BTreeMap;

use super::AppState;
use crate::countries;

/// GET /api/countries
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "Countries keyed by ISO 3166-1 alpha-2 code", body = BTreeMap<String, Country>),
        (status = 503, description = "Country service unavailable", body = AppError)
    ),
    tag = "countries"
)]
#[tracing::instrument(skip(state))]
pub async fn list_countries(State(state): State<AppState>) -> Result<Json<CountryMap>, AppError> {
    let countries = countries::fetch_countries(&state.countries).await?;
    Ok(Json(countries))
}

/// GET /api/continents
#[utoipa::path(
    get,
    path = "/api/continents",
    responses(
        (status = 200, description = "Continent names keyed by continent code", body = BTreeMap<String, String>),
        (status = 503, description = "Country service unavailable", body = AppError)
    ),
    tag = "countries"
)]
#[tracing::instrument(skip(state))]
pub async fn list_continents(
    State(state): State<AppState>,
) -> Result<Json<ContinentMap>, AppError> {
    let continents = countries::fetch_continents(&state.countries).await?;
    Ok(Json(continents))
}

//! Country reference data compiled into the binary.

use shared_types::{AppError, ContinentMap, CountryMap};
use std::sync::OnceLock;

const COUNTRIES_JSON: &str = include_str!("../data/countries.json");
const CONTINENTS_JSON: &str = include_str!("../data/continents.json");

static COUNTRIES: OnceLock<Result<CountryMap, String>> = OnceLock::new();
static CONTINENTS: OnceLock<Result<ContinentMap, String>> = OnceLock::new();

/// Every country keyed by ISO code. Parsed on first use.
pub fn countries() -> Result<&'static CountryMap, AppError> {
    COUNTRIES
        .get_or_init(|| serde_json::from_str(COUNTRIES_JSON).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| AppError::internal(format!("country dataset is invalid: {e}")))
}

/// Continent names keyed by continent code. Parsed on first use.
pub fn continents() -> Result<&'static ContinentMap, AppError> {
    CONTINENTS
        .get_or_init(|| serde_json::from_str(CONTINENTS_JSON).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| AppError::internal(format!("continent dataset is invalid: {e}")))
}

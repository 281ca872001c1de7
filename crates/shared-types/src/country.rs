use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A country record as served by `/api/countries`.
///
/// Only `name` is required; the remaining fields default when a payload
/// omits them so partial datasets still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub native: String,
    #[serde(default)]
    pub phone: Vec<u32>,
    /// Two-letter continent code (see [`ContinentMap`]).
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub currency: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Countries keyed by ISO 3166-1 alpha-2 code, ordered by code.
pub type CountryMap = BTreeMap<String, Country>;

/// Continent names keyed by two-letter continent code.
pub type ContinentMap = BTreeMap<String, String>;

/// Flatten a country map into its records, preserving code order.
pub fn country_list(countries: &CountryMap) -> Vec<Country> {
    countries.values().cloned().collect()
}

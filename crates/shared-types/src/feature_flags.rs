use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional server surfaces are active.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Mount the OpenAPI reference UI at `/docs`.
    #[serde(default)]
    pub docs: bool,
}

/// Behavior knobs for the mock country endpoints.
///
/// Used to exercise the loading and error states of the demo selects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CountryApiConfig {
    /// Artificial delay applied before every country/continent response.
    #[serde(default)]
    pub latency_ms: u64,
    /// Answer every country/continent request with an error.
    #[serde(default)]
    pub fail: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub countries: CountryApiConfig,
}

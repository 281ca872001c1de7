use shared_types::{AppError, ContinentMap, CountryApiConfig, CountryMap};
use std::time::Duration;

use crate::dataset;

/// Apply the configured latency, then fail if the API is set to fail.
async fn simulate(config: &CountryApiConfig) -> Result<(), AppError> {
    if config.latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.latency_ms)).await;
    }
    if config.fail {
        tracing::warn!("country API configured to fail");
        return Err(AppError::service_unavailable(
            "The country service is unavailable",
        ));
    }
    Ok(())
}

/// All countries, after the configured latency.
#[tracing::instrument]
pub async fn fetch_countries(config: &CountryApiConfig) -> Result<CountryMap, AppError> {
    simulate(config).await?;
    let countries = dataset::countries()?;
    tracing::debug!(count = countries.len(), "serving countries");
    Ok(countries.clone())
}

/// All continents, after the configured latency.
#[tracing::instrument]
pub async fn fetch_continents(config: &CountryApiConfig) -> Result<ContinentMap, AppError> {
    simulate(config).await?;
    Ok(dataset::continents()?.clone())
}

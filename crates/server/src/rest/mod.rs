pub mod country;

use axum::{routing::get, Router};
use shared_types::CountryApiConfig;

/// Shared state for the REST handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub countries: CountryApiConfig,
}

/// Build the REST API router for the mock country service.
pub fn rest_router() -> Router<AppState> {
    Router::new()
        .route("/api/countries", get(country::list_countries))
        .route("/api/continents", get(country::list_continents))
}

use axum::Router;
use shared_types::{AppError, AppErrorKind, Country};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest::{self, AppState};

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::country::list_countries,
        rest::country::list_continents,
        health::health_check,
    ),
    components(schemas(
        Country, AppError, AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "countries", description = "Mock country reference data"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Country Select API",
        description = "Mock country service backing the Select demo",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Assemble the REST API, the health route and, when `docs` is set, the API
/// reference at `/docs`.
pub fn build_router(state: AppState, docs: bool) -> Router {
    let router = rest::rest_router()
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}

/// Build the router from the loaded `config.toml`.
pub fn api_router() -> Router {
    let config = crate::config::app_config();
    let state = AppState {
        countries: config.countries.clone(),
    };
    tracing::info!(docs = config.features.docs, "mounting country API");
    build_router(state, config.features.docs)
}

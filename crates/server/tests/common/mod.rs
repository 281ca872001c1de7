use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::openapi::build_router;
use server::rest::AppState;
use shared_types::CountryApiConfig;
use tower::ServiceExt;

#[allow(dead_code)]
/// Build a test router with the REST API routes and the default config.
pub fn test_app() -> Router {
    build_router(AppState::default(), false)
}

#[allow(dead_code)]
/// Build a test router whose country endpoints use `countries`.
pub fn test_app_with(countries: CountryApiConfig, docs: bool) -> Router {
    build_router(AppState { countries }, docs)
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

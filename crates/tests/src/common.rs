use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::openapi::build_router;
use server::rest::AppState;
use shared_types::{CountryApiConfig, CountryMap};
use shared_ui::{label_options, SelectOptionData};
use tower::ServiceExt;

/// Build a test router with the default country config and no docs.
pub fn test_app() -> Router {
    build_router(AppState::default(), false)
}

/// Build a test router whose country endpoints answer with an error.
pub fn failing_app() -> Router {
    build_router(
        AppState {
            countries: CountryApiConfig {
                latency_ms: 0,
                fail: true,
            },
        },
        false,
    )
}

/// GET a route and parse the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// Fetch the country map through the REST router.
pub async fn fetch_countries(app: &Router) -> CountryMap {
    let (status, body) = get_json(app, "/api/countries").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body).expect("countries payload")
}

/// Country options the way the demo builds them, with `unavailable` names
/// disabled.
pub fn country_options(countries: &CountryMap, unavailable: &[&str]) -> Vec<SelectOptionData> {
    label_options(countries.values().map(|country| country.name.as_str()), unavailable)
}

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::AppError;

use crate::common::*;

#[tokio::test]
async fn failing_service_answers_with_app_error_json() {
    let app = failing_app();
    let (status, body) = get_json(&app, "/api/countries").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["kind"], "ServiceUnavailable");
    assert_eq!(body["message"], "The country service is unavailable");
}

#[tokio::test]
async fn failure_body_yields_a_friendly_message() {
    let app = failing_app();
    let (_, body) = get_json(&app, "/api/continents").await;

    let raw = body.to_string();
    assert_eq!(
        AppError::friendly_message(&raw),
        "The country service is unavailable"
    );
}

#[test]
fn unparseable_error_falls_back_to_generic_message() {
    assert_eq!(
        AppError::friendly_message("connection reset by peer"),
        "Something went wrong. Please try again."
    );
}

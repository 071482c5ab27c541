//! Integration tests for the export endpoint's pre-store rejections.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// App with the export cap configured below the search limit ceiling, so
/// the cap rejection is observable.
fn app_with_cap(cap: i64) -> Router {
    let config = common::test_config();
    common::build_test_app_with_config(
        common::lazy_pool(),
        rentiq_api::config::ServerConfig {
            export_max_records: cap,
            ..config
        },
    )
}

async fn post_export(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/export")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn export_over_record_cap_is_rejected_before_store_access() {
    // The store is unreachable, so a 400 here proves the cap check ran first.
    let (status, body) = post_export(
        app_with_cap(100),
        json!({
            "format": "csv",
            "communityIds": ["5f0c0c32-4f58-4d45-9a6e-9e9a8f3a2b10"],
            "limit": 500
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EXPORT_LIMIT_EXCEEDED");
    assert_eq!(
        body["error"],
        "Export limit exceeded. Maximum 100 records allowed"
    );
}

#[tokio::test]
async fn export_with_invalid_filters_is_rejected() {
    let (status, body) = post_export(
        common::build_test_app(common::lazy_pool()),
        json!({
            "format": "json",
            "communityIds": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn filter_validation_runs_before_the_cap_check() {
    // limit 5001 violates the general limit bound, so it reports as a
    // validation failure even though it also exceeds the cap.
    let (status, body) = post_export(
        app_with_cap(100),
        json!({
            "format": "csv",
            "communityIds": ["5f0c0c32-4f58-4d45-9a6e-9e9a8f3a2b10"],
            "limit": 5001
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let details = body["details"].as_array().unwrap();
    assert!(details.contains(&json!("Limit must be between 1 and 1000")));
}

#[tokio::test]
async fn export_at_exactly_the_cap_passes_the_cap_check() {
    // Limit == cap is allowed; the request then fails on the unreachable
    // store rather than on the cap.
    let (status, body) = post_export(
        app_with_cap(100),
        json!({
            "format": "csv",
            "communityIds": ["5f0c0c32-4f58-4d45-9a6e-9e9a8f3a2b10"],
            "limit": 100
        }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "STORE_UNAVAILABLE");
}

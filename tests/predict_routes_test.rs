// ABOUTME: HTTP integration tests for the health and prediction routes
// ABOUTME: Drives the full middleware stack in-process over real artifacts and counting mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

use axum::Router;
use calorie_ml_service::config::ServiceConfig;
use calorie_ml_service::context::ServiceContext;
use calorie_ml_service::predictors::ArtifactPaths;
use calorie_ml_service::server::build_router;
use calorie_ml_service::FeatureVector;
use helpers::artifacts::{counting_context, reference_payload, write_model_dir};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

fn artifact_router() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    write_model_dir(dir.path());
    let context = ServiceContext::load(&ArtifactPaths::in_dir(dir.path())).unwrap();
    (
        build_router(&ServiceConfig::default(), Arc::new(context)),
        dir,
    )
}

fn without(field: &str) -> Value {
    let mut payload = reference_payload();
    payload.as_object_mut().unwrap().remove(field);
    payload
}

fn with(field: &str, value: Value) -> Value {
    let mut payload = reference_payload();
    payload[field] = value;
    payload
}

#[tokio::test]
async fn test_health_reports_running() {
    let (app, _dir) = artifact_router();
    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({"status": "ML service running"}));
}

#[tokio::test]
async fn test_reference_prediction() {
    let (app, _dir) = artifact_router();
    let response = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"calories": 2339, "diet_type": 1, "workout_type": 2})
    );
}

#[tokio::test]
async fn test_prediction_varies_with_categories() {
    let (app, _dir) = artifact_router();
    let payload = json!({
        "age": 40,
        "height_cm": 165,
        "weight_kg": 70,
        "gender": "female",
        "activity_level": "high",
        "goal": "weight_loss",
        "bmi": 25.7
    });
    let response = AxumTestRequest::post("/predict")
        .json(&payload)
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    // -200 + 1031.25 + 700 + 166 + 700 + 0 - 161 = 2236.25
    assert_eq!(
        body,
        json!({"calories": 2236, "diet_type": 2, "workout_type": 0})
    );
}

#[tokio::test]
async fn test_identical_requests_give_identical_responses() {
    let (app, _dir) = artifact_router();
    let first: Value = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app.clone())
        .await
        .json();
    let second: Value = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app)
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_valid_request_runs_each_model_once() {
    let (context, calls) = counting_context(1999.9, 1.0, 2.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    let response = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"calories": 1999, "diet_type": 1, "workout_type": 2})
    );
    assert_eq!(calls.count(), 3);
    assert_eq!(
        calls.last_features(),
        Some(FeatureVector::new([25.0, 180.0, 75.0, 0.0, 1.0, 1.0, 23.15]))
    );
}

#[tokio::test]
async fn test_missing_field_is_reported() {
    let (app, _dir) = artifact_router();
    let response = AxumTestRequest::post("/predict")
        .json(&without("gender"))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing field: gender"}));
}

#[tokio::test]
async fn test_first_missing_field_in_schema_order_wins() {
    let (context, _calls) = counting_context(2000.0, 0.0, 0.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    let mut payload = without("bmi");
    payload.as_object_mut().unwrap().remove("height_cm");
    let body: Value = AxumTestRequest::post("/predict")
        .json(&payload)
        .send(app)
        .await
        .json();

    assert_eq!(body["error"], "Missing field: height_cm");
}

#[tokio::test]
async fn test_no_model_runs_for_any_missing_field() {
    let (context, calls) = counting_context(2000.0, 0.0, 0.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    for field in [
        "age",
        "height_cm",
        "weight_kg",
        "gender",
        "activity_level",
        "goal",
        "bmi",
    ] {
        let response = AxumTestRequest::post("/predict")
            .json(&without(field))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 400, "field {field}");
        let body: Value = response.json();
        assert_eq!(body["error"], format!("Missing field: {field}"));
    }

    assert_eq!(calls.count(), 0);
}

#[tokio::test]
async fn test_array_and_string_bodies_miss_first_field() {
    let (context, calls) = counting_context(2000.0, 0.0, 0.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    for raw in ["[1,2,3]", "\"abc\""] {
        let response = AxumTestRequest::post("/predict")
            .header("content-type", "application/json")
            .raw(raw)
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 400, "body {raw}");
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Missing field: age"}));
    }

    assert_eq!(calls.count(), 0);
}

#[tokio::test]
async fn test_invalid_category_is_reported() {
    let (context, calls) = counting_context(2000.0, 0.0, 0.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    let response = AxumTestRequest::post("/predict")
        .json(&with("gender", json!("man")))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Invalid value: 'man'"}));
    assert_eq!(calls.count(), 0);
}

#[tokio::test]
async fn test_category_matching_is_case_sensitive() {
    let (app, _dir) = artifact_router();
    let body: Value = AxumTestRequest::post("/predict")
        .json(&with("activity_level", json!("Moderate")))
        .send(app)
        .await
        .json();

    assert_eq!(body["error"], "Invalid value: 'Moderate'");
}

#[tokio::test]
async fn test_non_string_category_is_invalid() {
    let (app, _dir) = artifact_router();
    let response = AxumTestRequest::post("/predict")
        .json(&with("goal", json!(2)))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid value: 2");
}

#[tokio::test]
async fn test_non_numeric_measurement_fails_prediction() {
    let (context, calls) = counting_context(2000.0, 0.0, 0.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    let response = AxumTestRequest::post("/predict")
        .json(&with("age", json!("twenty")))
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prediction failed");
    assert_eq!(body["details"], "field 'age' must be a number, got string");
    assert_eq!(calls.count(), 0);
}

#[tokio::test]
async fn test_malformed_json_fails_prediction() {
    let (app, _dir) = artifact_router();
    let response = AxumTestRequest::post("/predict")
        .header("content-type", "application/json")
        .raw("{\"age\": 25,")
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prediction failed");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .starts_with("invalid JSON body"));
}

#[tokio::test]
async fn test_non_finite_model_output_fails_prediction() {
    let (context, calls) = counting_context(f64::NAN, 1.0, 2.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    let response = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prediction failed");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .starts_with("calorie model:"));
    assert!(body.get("calories").is_none());
    // The failing calorie model runs first; the classifiers never do.
    assert_eq!(calls.count(), 1);
}

#[tokio::test]
async fn test_out_of_range_model_output_fails_prediction() {
    let (context, calls) = counting_context(1e300, 1.0, 2.0);
    let app = build_router(&ServiceConfig::default(), Arc::new(context));

    let response = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prediction failed");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .starts_with("calorie model:"));
    assert_eq!(calls.count(), 1);
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let (app, _dir) = artifact_router();
    let body: Value = AxumTestRequest::post("/predict")
        .json(&with("nickname", json!("sam")))
        .send(app)
        .await
        .json();

    assert_eq!(body["calories"], 2339);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (app, _dir) = artifact_router();
    let response = AxumTestRequest::get("/")
        .header("x-request-id", "abc-123")
        .send(app.clone())
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("abc-123"));

    let generated = AxumTestRequest::get("/").send(app).await;
    assert!(generated.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let (context, calls) = counting_context(2000.0, 0.0, 0.0);
    let mut config = ServiceConfig::default();
    config.http.max_body_bytes = 64;
    let app = build_router(&config, Arc::new(context));

    let response = AxumTestRequest::post("/predict")
        .json(&reference_payload())
        .send(app)
        .await;

    assert_eq!(response.status(), 413);
    assert_eq!(calls.count(), 0);
}

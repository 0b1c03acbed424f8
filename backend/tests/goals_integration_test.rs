//! Integration tests for metabolic estimate and goal recommendation endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_estimate_with_default_multiplier() {
    let app = common::TestApp::new();

    let (status, response) = app
        .post("/api/v1/metabolic/estimate", &common::profile_json().to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["bmr"], 1592.5);
    assert_eq!(response["tdee"], 2229.5);
    assert_eq!(response["activity_multiplier"], 1.4);
    assert_eq!(response["unit"], "kcal");
}

#[tokio::test]
async fn test_estimate_rejects_non_positive_weight() {
    let app = common::TestApp::new();
    let mut body = common::profile_json();
    body["weight_kg"] = json!(0);

    let (status, response) = app
        .post("/api/v1/metabolic/estimate", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["field"], "weight_kg");
}

#[tokio::test]
async fn test_recommend_goals_end_to_end() {
    let app = common::TestApp::new();
    let body = json!({
        "profile": common::profile_json(),
        "target_weight_kg": 60.0,
        "weeks": 4
    });

    let (status, response) = app
        .post("/api/v1/goals/recommend", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["goals"]["daily_calorie_goal"], 855);
    assert_eq!(response["goals"]["daily_exercise_goal_minutes"], 30);
    assert_eq!(response["user_goals"]["weight_goal_kg"], 60.0);
    assert_eq!(response["weeks"], 4);
}

#[tokio::test]
async fn test_recommend_goals_uses_configured_horizon() {
    let mut config = healthtrack_backend::config::AppConfig::default();
    config.statistics.default_horizon_weeks = 8;
    let app = common::TestApp::with_config(config);
    let body = json!({
        "profile": common::profile_json(),
        "target_weight_kg": 65.0
    });

    let (status, response) = app
        .post("/api/v1/goals/recommend", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["weeks"], 8);
    // Maintenance: 2229.5 rounds half up
    assert_eq!(response["goals"]["daily_calorie_goal"], 2230);
}

#[tokio::test]
async fn test_recommend_goals_rejects_zero_weeks() {
    let app = common::TestApp::new();
    let body = json!({
        "profile": common::profile_json(),
        "target_weight_kg": 60.0,
        "weeks": 0
    });

    let (status, response) = app
        .post("/api/v1/goals/recommend", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["field"], "weeks");
}

#[tokio::test]
async fn test_recommend_goals_rejects_excessive_horizon() {
    let app = common::TestApp::new();
    let body = json!({
        "profile": common::profile_json(),
        "target_weight_kg": 60.0,
        "weeks": 10_000
    });

    let (status, response) = app
        .post("/api/v1/goals/recommend", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["field"], "weeks");
}

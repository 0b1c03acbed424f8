//! Common test utilities for integration tests
//!
//! Builds the full router with middleware and drives it in-process.

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use healthtrack_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let (status, _, body) = self.send(request).await;
        (status, body)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let (status, _, body) = self.post_with_headers(path, body).await;
        (status, body)
    }

    /// Make a POST request with JSON body, keeping the response headers
    pub async fn post_with_headers(&self, path: &str, body: &str) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, headers, body_str)
    }
}

/// Profile used across the endpoint tests: BMR 1592.5, TDEE 2229.5
pub fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "weight_kg": 65.0,
        "height_cm": 170.0,
        "age_years": 25,
        "sex": "male"
    })
}

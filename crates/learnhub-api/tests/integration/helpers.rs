//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use learnhub_api::{AppState, build_app};
use learnhub_core::config::{AppConfig, DatabaseProvider};
use learnhub_database::repositories::UserStore;
use learnhub_database::MemoryUserStore;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application backed by a fresh in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryUserStore::new()))
    }

    /// Create a test application around the given store
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        let config = test_config();
        let router = build_app(AppState::new(config.clone(), store));
        Self { router, config }
    }

    /// Send a request and return the status, headers, and JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };

        (status, headers, body)
    }

    /// POST a JSON body
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, _, body) = self.send(request).await;
        (status, body)
    }

    /// GET with an optional raw Authorization header value
    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
        let (status, _, body) = self.get_with_headers(uri, authorization).await;
        (status, body)
    }

    /// GET returning response headers as well
    pub async fn get_with_headers(
        &self,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, axum::http::HeaderMap, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Register an account
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> (StatusCode, Value) {
        self.post_json(
            "/api/register",
            json!({
                "full_name": full_name,
                "email": email,
                "password": password,
                "role": role,
            }),
        )
        .await
    }

    /// Log in
    pub async fn login(&self, email: &str, password: &str, role: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/login",
            json!({ "email": email, "password": password, "role": role }),
        )
        .await
    }

    /// Register then log in, returning the bearer token
    pub async fn token_for(&self, full_name: &str, email: &str, role: &str) -> String {
        let (status, _) = self.register(full_name, email, "pass-word-1", role).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = self.login(email, "pass-word-1", role).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = DatabaseProvider::Memory;
    config.auth.jwt_secret = TEST_SECRET.to_string();
    config.auth.token_ttl_minutes = 60;
    config
}

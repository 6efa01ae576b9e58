//! Protected-route access over HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{StatusCode, header};
use chrono::{Duration, Utc};
use uuid::Uuid;

use learnhub_auth::jwt::{JwtEncoder, TokenSubject};
use learnhub_core::config::AuthConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_database::repositories::UserStore;
use learnhub_entity::user::{CreateUser, User, UserRole};

use crate::helpers::TestApp;

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[tokio::test]
async fn test_jane_end_to_end() {
    let app = TestApp::new();

    let (status, _) = app
        .register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.login("jane@x.com", "wrong", "student").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.login("jane@x.com", "secret1", "student").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, profile) = app.get("/api/profile", Some(&bearer(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["full_name"], "Jane Doe");
    assert_eq!(profile["first_name"], "Jane");
    assert_eq!(profile["last_name"], "Doe");
    assert_eq!(profile["email"], "jane@x.com");
    assert_eq!(profile["role"], "student");
    assert_eq!(profile["id"], body["user"]["id"]);

    let (status, _) = app.get("/api/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_is_the_callers_own() {
    let app = TestApp::new();
    let jane = app.token_for("Jane Doe", "jane@x.com", "student").await;
    let john = app.token_for("John Roe", "john@x.com", "teacher").await;

    let (_, jane_profile) = app.get("/api/profile", Some(&bearer(&jane))).await;
    let (_, john_profile) = app.get("/api/profile", Some(&bearer(&john))).await;

    assert_eq!(jane_profile["email"], "jane@x.com");
    assert_eq!(john_profile["email"], "john@x.com");
    assert_eq!(john_profile["role"], "teacher");
}

#[tokio::test]
async fn test_missing_or_malformed_header_is_unauthenticated() {
    let app = TestApp::new();

    let (status, headers, body) = app.get_with_headers("/api/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHENTICATED");
    assert_eq!(headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");

    for value in ["Bearer", "Bearer    ", "Basic amFuZTpzZWNyZXQx", "just-a-token"] {
        let (status, _) = app.get("/api/profile", Some(value)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {value:?}");
    }
}

#[tokio::test]
async fn test_rejected_tokens_are_forbidden_without_reason() {
    let app = TestApp::new();
    let valid = app.token_for("Jane Doe", "jane@x.com", "student").await;

    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        token_ttl_minutes: 60,
    })
    .issue(&TokenSubject {
        id: Uuid::new_v4(),
        email: "jane@x.com".to_string(),
        role: UserRole::Teacher,
    })
    .unwrap()
    .token;

    let expired = JwtEncoder::new(&app.config.auth)
        .issue_at(
            &TokenSubject {
                id: Uuid::new_v4(),
                email: "jane@x.com".to_string(),
                role: UserRole::Student,
            },
            Utc::now() - Duration::minutes(61),
        )
        .unwrap()
        .token;

    let parts: Vec<&str> = valid.split('.').collect();
    let foreign_parts: Vec<&str> = foreign.split('.').collect();
    let tampered = format!("{}.{}.{}", parts[0], foreign_parts[1], parts[2]);

    let mut bodies = Vec::new();
    for token in [foreign, expired, tampered, "garbage".to_string()] {
        let (status, body) = app.get("/api/profile", Some(&bearer(&token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        bodies.push(body);
    }

    assert!(bodies.iter().all(|b| b == &bodies[0]));
    assert_eq!(bodies[0]["error"], "FORBIDDEN");
    assert_eq!(bodies[0]["message"], "Invalid token");
}

#[tokio::test]
async fn test_token_for_unknown_subject_is_not_found() {
    let app = TestApp::new();

    let orphan = JwtEncoder::new(&app.config.auth)
        .issue(&TokenSubject {
            id: Uuid::new_v4(),
            email: "ghost@x.com".to_string(),
            role: UserRole::Student,
        })
        .unwrap()
        .token;

    let (status, body) = app.get("/api/profile", Some(&bearer(&orphan))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[derive(Debug)]
struct UnavailableStore;

#[async_trait]
impl UserStore for UnavailableStore {
    async fn find_by_email_and_role(
        &self,
        _email: &str,
        _role: UserRole,
    ) -> AppResult<Option<User>> {
        Err(AppError::database("could not connect to server: 10.1.2.3:5432"))
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<User>> {
        Err(AppError::database("could not connect to server: 10.1.2.3:5432"))
    }

    async fn create(&self, _data: CreateUser) -> AppResult<User> {
        Err(AppError::database("could not connect to server: 10.1.2.3:5432"))
    }
}

#[tokio::test]
async fn test_rejected_requests_never_reach_the_handler() {
    let app = TestApp::with_store(Arc::new(UnavailableStore));

    let (status, body) = app.get("/api/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHENTICATED");

    let (status, body) = app.get("/api/profile", Some("Bearer garbage")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_store_outage_is_opaque_500() {
    let app = TestApp::with_store(Arc::new(UnavailableStore));

    let (status, body) = app
        .register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Internal server error");

    let (status, body) = app.login("jane@x.com", "secret1", "student").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("10.1.2.3"));
}

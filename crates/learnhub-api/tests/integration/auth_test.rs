//! Registration and login over HTTP.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_then_duplicate_then_other_role() {
    let app = TestApp::new();

    let (status, body) = app
        .register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered");

    let (status, body) = app
        .register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["message"], "Email already registered for this role");

    let (status, _) = app
        .register("Jane Doe", "jane@x.com", "secret1", "teacher")
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_missing_fields_is_bad_request() {
    let app = TestApp::new();
    let complete = json!({
        "full_name": "Jane Doe",
        "email": "jane@x.com",
        "password": "secret1",
        "role": "student",
    });

    for field in ["full_name", "email", "password", "role"] {
        let mut body = complete.clone();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = app.post_json("/api/register", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(response["error"], "BAD_REQUEST");
        assert!(
            response["message"].as_str().unwrap().contains(field),
            "message should name {field}: {response}"
        );
    }
}

#[tokio::test]
async fn test_register_rejects_unknown_role_and_bad_email() {
    let app = TestApp::new();

    let (status, body) = app
        .register("Jane Doe", "jane@x.com", "secret1", "admin")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("role"));

    let (status, body) = app
        .register("Jane Doe", "not-an-email", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .body(Body::from(r#"{"email":"jane@x.com"}"#))
        .unwrap();
    let (status, _, _) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_missing_fields_is_bad_request() {
    let app = TestApp::new();

    for body in [
        json!({ "password": "secret1", "role": "student" }),
        json!({ "email": "jane@x.com", "role": "student" }),
        json!({ "email": "jane@x.com", "password": "secret1" }),
    ] {
        let (status, _) = app.post_json("/api/login", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_login_returns_token_and_summary() {
    let app = TestApp::new();
    app.register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;

    let (status, body) = app.login("jane@x.com", "secret1", "student").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert!(body["expires_at"].is_string());
    assert_eq!(body["user"]["email"], "jane@x.com");
    assert_eq!(body["user"]["full_name"], "Jane Doe");
    assert_eq!(body["user"]["role"], "student");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_trims_padded_email() {
    let app = TestApp::new();

    let (status, _) = app
        .register("Jane Doe", "  Jane@X.com ", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.login("jane@x.com", "secret1", "student").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "jane@x.com");

    let (status, _) = app
        .register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let app = TestApp::new();
    let limit = app.config.server.max_body_bytes;

    let (status, body) = app
        .register(&"J".repeat(limit + 1024), "jane@x.com", "secret1", "student")
        .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::new();
    app.register("Jane Doe", "Jane@X.com", "secret1", "student")
        .await;

    let (status, _) = app.login("JANE@x.com", "secret1", "student").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_share_one_response() {
    let app = TestApp::new();
    app.register("Jane Doe", "jane@x.com", "secret1", "student")
        .await;

    let wrong_password = app.login("jane@x.com", "wrong", "student").await;
    let unknown_email = app.login("nobody@x.com", "secret1", "student").await;
    let wrong_role = app.login("jane@x.com", "secret1", "teacher").await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password, wrong_role);
    assert_eq!(wrong_password.1["message"], "Invalid credentials");
}

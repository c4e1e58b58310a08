#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gradebook::router::init_router;
use gradebook::state::AppState;
use gradebook_auth::TokenService;
use gradebook_config::{CorsConfig, JwtConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const PASSWORD: &str = "password123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        algorithm: "HS256".to_string(),
        access_token_expiry: 1800,
    }
}

pub fn test_tokens() -> TokenService {
    TokenService::new(&test_jwt_config()).unwrap()
}

/// A router over a fresh in-memory store. Clones share the same store.
pub fn setup_test_app() -> Router {
    let cors = CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };
    init_router(AppState::in_memory(test_tokens(), cors))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn login_request(username: &str, password: &str) -> Request<Body> {
    let body = format!("username={}&password={}", username, password);
    Request::builder()
        .method("POST")
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn register(app: &Router, username: &str, role: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/users/",
            None,
            json!({ "username": username, "password": PASSWORD, "role": role }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register {} failed: {}", username, body);
    body
}

pub async fn login(app: &Router, username: &str) -> String {
    let (status, body) = send(app, login_request(username, PASSWORD)).await;
    assert_eq!(status, StatusCode::OK, "login {} failed: {}", username, body);
    body["access_token"].as_str().unwrap().to_string()
}

/// Registers `username` with `role` and returns a bearer token for it.
pub async fn register_and_login(app: &Router, username: &str, role: &str) -> String {
    register(app, username, role).await;
    login(app, username).await
}

pub async fn post_grade(
    app: &Router,
    token: &str,
    student_name: &str,
    subject: &str,
    score: f64,
) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            "POST",
            "/grades/",
            Some(token),
            json!({ "student_name": student_name, "subject": subject, "score": score }),
        ),
    )
    .await
}

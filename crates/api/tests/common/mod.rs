#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use skillsync_api::app::build_app;
use skillsync_api::auth::jwt::JwtConfig;
use skillsync_api::config::ServerConfig;
use skillsync_api::state::AppState;
use skillsync_chat::{ChatConfig, ChatRelay};
use skillsync_core::catalog::SkillCatalog;
use skillsync_db::repositories::SkillRepo;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and a disabled chat relay.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        password_min_length: 8,
        catalog_path: None,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_ttl: chrono::Duration::minutes(15),
            refresh_ttl: chrono::Duration::days(7),
        },
        chat: ChatConfig::default(),
    }
}

/// Build the full application router over a seeded catalog.
///
/// Uses the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config()).await
}

/// Like [`build_test_app`] with a caller-supplied configuration.
pub async fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let catalog = SkillCatalog::embedded().expect("embedded catalog must parse");
    SkillRepo::seed(&pool, &catalog.seed_rows())
        .await
        .expect("seeding should succeed");
    let chat = ChatRelay::new(config.chat.clone()).expect("chat client should build");

    build_app(AppState {
        pool,
        config: Arc::new(config),
        catalog: Arc::new(catalog),
        chat: Arc::new(chat),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Register `username` (email `{username}@test.com`) and return the auth response.
pub async fn register(app: Router, username: &str) -> Value {
    let body = serde_json::json!({
        "email": format!("{username}@test.com"),
        "username": username,
        "password": TEST_PASSWORD,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// Register `username` and return only its access token.
pub async fn register_token(app: Router, username: &str) -> String {
    let json = register(app, username).await;
    json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

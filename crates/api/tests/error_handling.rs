//! Integration tests for the JSON error envelope.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_token_returns_json_401(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get_auth(app, "/api/v1/dashboard", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_for_deleted_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let token = common::register_token(app.clone(), "ghost").await;

    sqlx::query("DELETE FROM users WHERE username = 'ghost'")
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

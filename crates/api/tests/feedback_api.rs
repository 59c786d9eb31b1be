//! HTTP-level integration tests for the public feedback endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_and_list_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    for (name, rating) in [("Asha", 5), ("Bo", 4), ("Cy", 3), ("Dee", 2)] {
        let body = json!({ "author_name": name, "rating": rating, "message": "Helpful app" });
        let response = post_json(app.clone(), "/api/v1/feedback", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/feedback").await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = body_json(response).await["data"].clone();
    let names: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["author_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Dee", "Cy", "Bo", "Asha"]);

    let response = get(app, "/api/v1/feedback/recent").await;
    let recent = body_json(response).await["data"].clone();
    let recent = recent.as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["author_name"], "Dee");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_rejects_invalid_feedback(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let cases = [
        json!({ "author_name": "", "rating": 3, "message": "ok" }),
        json!({ "author_name": "Eve", "rating": 0, "message": "ok" }),
        json!({ "author_name": "Eve", "rating": 6, "message": "ok" }),
        json!({ "author_name": "Eve", "rating": 3, "message": "   " }),
        json!({ "author_name": "x".repeat(101), "rating": 3, "message": "ok" }),
    ];
    for body in cases {
        let response = post_json(app.clone(), "/api/v1/feedback", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let response = get(app, "/api/v1/feedback").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_degrades_to_empty_when_store_fails(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    sqlx::query("DROP TABLE feedback").execute(&pool).await.unwrap();

    let response = get(app, "/api/v1/feedback").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

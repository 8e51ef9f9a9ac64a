//! HTTP-level integration tests for the legacy playground API.
//!
//! The legacy surface answers with `{ "item": ..., "contents": ... }`
//! envelopes and addresses records by numeric id + version number.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn legacy_body(name: &str, contents: &str) -> serde_json::Value {
    json!({
        "name": name,
        "author": "a",
        "contents": contents,
        "pixiVersion": "4.8.0"
    })
}

/// POST a legacy playground and return the `{item, contents}` envelope.
async fn create_legacy(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), "/api", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_returns_envelope_with_version_zero(pool: PgPool) {
    let envelope = create_legacy(&pool, legacy_body("demo", "console.log(1)")).await;

    assert_eq!(envelope["item"]["version"], 0);
    assert_eq!(envelope["item"]["name"], "demo");
    assert_eq!(envelope["contents"], "console.log(1)");
    // Contents live next to the item, not inside it.
    assert!(envelope["item"].get("contents").is_none());
    assert!(envelope["item"]["playgroundId"].is_i64());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_name_author_contents(pool: PgPool) {
    for body in [
        json!({"author": "a", "contents": "x"}),
        json!({"name": "demo", "contents": "x"}),
        json!({"name": "demo", "author": "a"}),
        json!({"name": "demo", "author": "a", "contents": ""}),
    ] {
        let response = post_json(build_test_app(pool.clone()), "/api", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error = body_json(response).await;
        assert!(error["msg"].is_string());
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_returns_version_zero(pool: PgPool) {
    let envelope = create_legacy(&pool, legacy_body("demo", "base")).await;
    let id = envelope["item"]["playgroundId"].as_i64().unwrap();

    let response = get(build_test_app(pool), &format!("/api/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["item"]["version"], 0);
    assert_eq!(fetched["contents"], "base");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_id_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["msg"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_rejects_non_integer_params(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/api/not-a-number").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = get(build_test_app(pool), "/api/1/not-a-number").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["msg"].as_str().unwrap().contains("version"));
}

// ---------------------------------------------------------------------------
// New versions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_version_appends_snapshots(pool: PgPool) {
    let envelope = create_legacy(&pool, legacy_body("demo", "v0")).await;
    let id = envelope["item"]["playgroundId"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/{id}"),
        legacy_body("demo", "v1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["item"]["version"], 1);
    assert_eq!(created["contents"], "v1");

    // Each version remains retrievable as an exact snapshot.
    let response = get(build_test_app(pool.clone()), &format!("/api/{id}/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["contents"], "v1");

    let response = get(build_test_app(pool), &format!("/api/{id}/0")).await;
    let fetched = body_json(response).await;
    assert_eq!(fetched["contents"], "v0");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_version_requires_existing_base(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/424242",
        legacy_body("demo", "v1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["msg"].is_string());
}

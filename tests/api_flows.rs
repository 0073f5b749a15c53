//! End-to-end API flows against a real database
//!
//! These tests need PostgreSQL and run only when `DATABASE_URL` is set;
//! otherwise they skip. They are serialized because they share the single
//! admin credential row.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{json, Value};
use serial_test::serial;
use sqlx::PgPool;

use lamsa_site::auth::credentials::hash_password;

fn authorization(value: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(value).unwrap(),
    )
}

/// Reset the admin credential to a known password
async fn seed_admin(pool: &PgPool, password: &str) {
    sqlx::query("DELETE FROM admin_users")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO admin_users (password_hash) VALUES ($1)")
        .bind(hash_password(password).unwrap())
        .execute(pool)
        .await
        .unwrap();
}

async fn clear_articles(pool: &PgPool) {
    sqlx::query("DELETE FROM articles").execute(pool).await.unwrap();
}

#[tokio::test]
#[serial]
async fn login_issues_a_working_token() {
    let Some(pool) = common::try_database_pool().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    seed_admin(&pool, "correct-pw").await;
    let server = common::test_server(common::state_with_pool(pool, "http://blob.invalid"));

    let response = server
        .post("/api/login")
        .json(&json!({ "password": "correct-pw" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().unwrap().to_string();

    // Round-trip: the freshly issued token is accepted by the gate
    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .put("/api/site-content")
        .add_header(name, value)
        .json(&json!({ "content_key": "hero_title", "content_value": "Lamsa" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn login_with_wrong_password_is_rejected() {
    let Some(pool) = common::try_database_pool().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    seed_admin(&pool, "correct-pw").await;
    let server = common::test_server(common::state_with_pool(pool, "http://blob.invalid"));

    let response = server
        .post("/api/login")
        .json(&json!({ "password": "wrong" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
#[serial]
async fn ungated_delete_leaves_the_row_and_gated_delete_removes_it() {
    let Some(pool) = common::try_database_pool().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    seed_admin(&pool, "correct-pw").await;
    clear_articles(&pool).await;
    let state = common::state_with_pool(pool, "http://blob.invalid");
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    let (name, value) = authorization(&common::auth_header(&token));
    let created = server
        .post("/api/articles")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "title": "Spring cleaning tips",
            "excerpt": "Five quick wins",
            "image": "/img/spring.jpg",
            "author": "Lamsa",
            "readTime": "4 min",
            "full_content": "..."
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    // Without a token the delete is rejected and the row survives
    let response = server.delete("/api/articles").json(&json!({ "id": id })).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let listed: Value = server.get("/api/articles").await.json();
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .any(|article| article["id"].as_i64() == Some(id)));

    // With the token it goes through
    let response = server
        .delete("/api/articles")
        .add_header(name, value)
        .json(&json!({ "id": id }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let listed: Value = server.get("/api/articles").await.json();
    assert!(!listed
        .as_array()
        .unwrap()
        .iter()
        .any(|article| article["id"].as_i64() == Some(id)));
}

#[tokio::test]
#[serial]
async fn deleting_a_missing_row_is_404() {
    let Some(pool) = common::try_database_pool().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    seed_admin(&pool, "correct-pw").await;
    clear_articles(&pool).await;
    let state = common::state_with_pool(pool, "http://blob.invalid");
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .delete("/api/articles")
        .add_header(name, value)
        .json(&json!({ "id": 999_999 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn password_change_rotates_the_credential() {
    let Some(pool) = common::try_database_pool().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    seed_admin(&pool, "old-password").await;
    let state = common::state_with_pool(pool, "http://blob.invalid");
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    // Wrong current password: 401 and no mutation
    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .post("/api/change-password")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "currentPassword": "guess", "newPassword": "new-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/login")
        .json(&json!({ "password": "old-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // Correct current password: the credential rotates
    let response = server
        .post("/api/change-password")
        .add_header(name, value)
        .json(&json!({ "currentPassword": "old-password", "newPassword": "new-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/login")
        .json(&json!({ "password": "old-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/login")
        .json(&json!({ "password": "new-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn slider_section_falls_back_to_defaults() {
    let Some(pool) = common::try_database_pool().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    sqlx::query("DELETE FROM site_content WHERE content_key LIKE 'animated_slider_%'")
        .execute(&pool)
        .await
        .unwrap();
    let server = common::test_server(common::state_with_pool(pool, "http://blob.invalid"));

    let response = server.get("/api/animated-slider").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["title"], "Default Title");
    assert_eq!(body["ctaText"], "Contact Us");
    assert_eq!(body["ctaLink"], "#contact");
    assert!(body["slides"].is_array());
}

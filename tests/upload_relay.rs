//! Upload relay integration tests
//!
//! Runs the relay against a wiremock blob store. The upload path never
//! touches the database, so these run everywhere.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorization(value: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(value).unwrap(),
    )
}

fn photo_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(b"fake image bytes".to_vec())
            .file_name("my photo final.jpg")
            .mime_type("image/jpeg"),
    )
}

#[tokio::test]
async fn upload_relays_file_and_returns_public_url() {
    let store = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/uploads/.+"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&store)
        .await;

    let state = common::lazy_state(&store.uri());
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .post("/api/upload")
        .add_header(name, value)
        .multipart(photo_form())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with(&format!("{}/uploads/", store.uri())));
    // Whitespace in the original filename is collapsed to dashes
    assert!(url.ends_with("-my-photo-final.jpg"));
}

#[tokio::test]
async fn upload_without_token_is_rejected_before_the_store() {
    let store = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&store)
        .await;

    let server = common::test_server(common::lazy_state(&store.uri()));

    let response = server.post("/api/upload").multipart(photo_form()).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_without_file_field_is_a_validation_error() {
    let store = MockServer::start().await;
    let state = common::lazy_state(&store.uri());
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    let form = MultipartForm::new().add_text("note", "no file here");
    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .post("/api/upload")
        .add_header(name, value)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No file uploaded.");
}

#[tokio::test]
async fn empty_file_is_a_validation_error() {
    let store = MockServer::start().await;
    let state = common::lazy_state(&store.uri());
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(Vec::new()).file_name("empty.png").mime_type("image/png"),
    );
    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .post("/api/upload")
        .add_header(name, value)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_failure_surfaces_as_generic_500() {
    let store = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&store)
        .await;

    let state = common::lazy_state(&store.uri());
    let token = state.tokens.issue(1).unwrap();
    let server = common::test_server(state);

    let (name, value) = authorization(&common::auth_header(&token));
    let response = server
        .post("/api/upload")
        .add_header(name, value)
        .multipart(photo_form())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    // Provider detail stays server-side; the client sees the product message
    assert_eq!(body["error"], "فشل في رفع الملف.");
}

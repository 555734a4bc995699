#![cfg(feature = "server")]

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{FailingFetcher, FixtureFetcher, JOHN_3_16, JOHN_3_17, JOHN_3_18, bible_with};
use http_body_util::BodyExt;
use lectio_bible::{PassageFetcher, VerseResult};
use lectio_kernel::domain::config::ApiConfig;
use lectio_kernel::domain::registry::InitializedSlice;
use lectio_kernel::server::ApiState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app(fetcher: Arc<dyn PassageFetcher>) -> Router {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(bible_with(fetcher)))
        .build()
        .unwrap();

    let (router, _api) = lectio_bible::server::router().with_state(state).split_for_parts();
    router
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn john_3_16_to_18() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) =
        get(app, "/api/v1/verse?book=JOHN&chapter=3&verses=16-18&version=KJV").await;

    assert_eq!(status, StatusCode::OK);
    let result: VerseResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.citation, "John 3:16-18");
    assert_eq!(result.verses.len(), 3);
    assert_eq!(result.verses[0].text, JOHN_3_16);
    assert_eq!(result.text, format!("{JOHN_3_16} {JOHN_3_17} {JOHN_3_18}"));
}

#[tokio::test]
async fn missing_book_is_a_bad_request() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) = get(app, "/api/v1/verse?chapter=3").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "code": 400, "message": "Missing field 'book'" }));
}

#[tokio::test]
async fn non_numeric_chapter_is_a_bad_request() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) = get(app, "/api/v1/verse?book=John&chapter=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "code": 400, "message": "Chapter must be a number" }));
}

#[tokio::test]
async fn malformed_verses_name_the_token() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) = get(app, "/api/v1/verse?book=John&chapter=3&verses=16,abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid verses 'abc': not a verse number");
}

#[tokio::test]
async fn empty_verses_are_a_bad_request() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) = get(app, "/api/v1/verse?book=John&chapter=3&verses=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "code": 400, "message": "Invalid verses '': not a verse number" }));
}

#[tokio::test]
async fn missing_verses_are_not_found() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) = get(app, "/api/v1/verse?book=John&chapter=3&verses=999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn unknown_version_is_not_found() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, body) = get(app, "/api/v1/verse?book=John&version=XYZ").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Unknown version 'XYZ'");
}

#[tokio::test]
async fn upstream_timeout_is_a_gateway_timeout() {
    let app = app(Arc::new(FailingFetcher(504)));

    let (status, body) = get(app, "/api/v1/verse?book=John").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, json!({ "code": 504, "message": "Upstream timed out" }));
}

#[tokio::test]
async fn unknown_query_parameters_are_ignored() {
    let app = app(Arc::new(FixtureFetcher::default()));

    let (status, _) = get(app, "/api/v1/verse?book=John&chapter=3&verses=16&lang=en").await;

    assert_eq!(status, StatusCode::OK);
}

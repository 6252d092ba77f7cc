//! HTTP shell tests driving the router in-process

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use redakt::anonymization::{AnonymizationConfig, PiiAnonymizer};
use redakt::server::{router, AppState};
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

fn shared_anonymizer() -> Arc<PiiAnonymizer> {
    static ANONYMIZER: OnceLock<Arc<PiiAnonymizer>> = OnceLock::new();
    ANONYMIZER
        .get_or_init(|| Arc::new(PiiAnonymizer::new(AnonymizationConfig::default()).unwrap()))
        .clone()
}

fn ready_app() -> Router {
    router(AppState::ready(shared_anonymizer(), 3))
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/invocations")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_ping_ready() {
    let (status, body) = get(ready_app(), "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ping_not_ready() {
    let (status, body) = get(router(AppState::not_ready(10)), "/ping").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_invocations_preserve_order() {
    let (status, body) = post_json(
        ready_app(),
        json!({
            "mode": "tagged_text",
            "input": [
                {"text": "Hello this is Jamie Clark calling", "lang": "en"},
                {"text": "Tlf. 98 45 76 29", "lang": "no"},
                {"text": "Nothing to see here", "lang": "en"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["output"],
        json!([
            {"tagged_text": "Hello this is <PERSON> calling"},
            {"tagged_text": "Tlf. <PHONE_NUMBER>"},
            {"tagged_text": "Nothing to see here"}
        ])
    );
}

#[tokio::test]
async fn test_invocations_detailed_mode() {
    let (status, body) = post_json(
        ready_app(),
        json!({
            "mode": "detailed_info",
            "input": [{"text": "Call 212-555-5555", "lang": "en"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let record = &body["output"][0]["detailed_info"][0];
    assert_eq!(record["entity_type"], "PHONE_NUMBER");
    assert_eq!(record["entity"], "212-555-5555");
}

#[tokio::test]
async fn test_invocations_default_mode_and_language() {
    let (status, body) = post_json(
        ready_app(),
        json!({"input": [{"text": "Call 212-555-5555"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"][0]["tagged_text"], "Call <PHONE_NUMBER>");
}

#[tokio::test]
async fn test_invocations_item_mode_overrides_request_mode() {
    let (status, body) = post_json(
        ready_app(),
        json!({
            "mode": "detailed_info",
            "input": [{"text": "Call 212-555-5555", "lang": "en", "mode": "tagged_text"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"][0]["tagged_text"], "Call <PHONE_NUMBER>");
}

#[tokio::test]
async fn test_invocations_empty_entity_list_detects_everything() {
    let (status, body) = post_json(
        ready_app(),
        json!({
            "entities": [],
            "input": [{"text": "Hello this is Jamie Clark calling, my phone number is 212-555-5555", "lang": "en"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["output"][0]["tagged_text"],
        "Hello this is <PERSON> calling, my phone number is <PHONE_NUMBER>"
    );
}

#[tokio::test]
async fn test_invocations_unsupported_language() {
    let (status, body) = post_json(
        ready_app(),
        json!({"input": [{"text": "hola", "lang": "es"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Support for language es is not implemented yet!");
}

#[tokio::test]
async fn test_invocations_unsupported_mode() {
    let (status, body) = post_json(
        ready_app(),
        json!({"mode": "bogus", "input": [{"text": "hello", "lang": "en"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Mode bogus not supported!");
}

#[tokio::test]
async fn test_invocations_batch_too_large() {
    let input: Vec<Value> = (0..4).map(|_| json!({"text": "hello"})).collect();
    let (status, body) = post_json(ready_app(), json!({"input": input})).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().contains("maximum 3"));
}

#[tokio::test]
async fn test_invocations_not_ready() {
    let (status, _) = post_json(
        router(AppState::not_ready(10)),
        json!({"input": [{"text": "hello"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

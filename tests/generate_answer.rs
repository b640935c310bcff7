//! Answer endpoint tests, driven through the router with the mock
//! provider (no network).

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use oasis_qa_service::services::providers::mock::mock_reply;
use oasis_qa_service::startup::build_router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn answer_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/generate-answer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

#[tokio::test]
async fn success_passes_upstream_body_through_unmodified() {
    let app = build_router(common::test_state(true));

    let response = app
        .oneshot(answer_request(
            r#"{"question":"Where is the city hall?","context":"City hall is on 5th street."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let text = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .expect("candidate text");

    // The prompt reaching the provider embeds both fields verbatim.
    assert!(text.contains("Where is the city hall?"));
    assert!(text.contains("City hall is on 5th street."));

    // And the response body is exactly what the provider returned.
    let prompt = text
        .strip_prefix("Mock response for: ")
        .expect("mock reply prefix");
    assert_eq!(body, mock_reply(prompt));
}

#[tokio::test]
async fn upstream_failure_returns_fixed_envelope() {
    let app = build_router(common::test_state(false));

    let response = app
        .oneshot(answer_request(r#"{"question":"Q","context":"C"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Failed to generate answer from AI."})
    );
}

#[tokio::test]
async fn absent_fields_interpolate_as_empty_text() {
    let app = build_router(common::test_state(true));

    let response = app.oneshot(answer_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let text = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .expect("candidate text");
    assert!(text.contains("User's Question: \"\""));
}

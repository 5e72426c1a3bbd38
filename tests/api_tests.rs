//! In-process API tests.
//!
//! Drives the real router with `tower::ServiceExt::oneshot`, so the tests
//! cover routing, the header layers, and the streaming body without binding
//! a socket. Timer-dependent tests run under tokio's paused clock.

use std::time::Duration;

use axum::body::Body;
use axum::Router;
use chatter::config::AppConfig;
use chatter::{create_router, AppState};
use futures::StreamExt;
use http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

fn test_app(emoji: bool) -> Router {
    let mut config = AppConfig::default();
    config.stream.emoji = emoji;
    create_router(AppState::new(config))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_returns_fixed_json() {
    let response = test_app(true).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "message": "Random Message Streaming Server is running!",
            "endpoints": ["/stream_message"],
        })
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = test_app(true).oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stream_response_carries_sse_headers() {
    let response = test_app(true).oneshot(get("/stream_message")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "text/event-stream");
    assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
    assert_eq!(headers[header::CONNECTION], "keep-alive");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "*");
}

#[tokio::test(start_paused = true)]
async fn first_frame_parses_as_a_valid_event() {
    let response = test_app(true).oneshot(get("/stream_message")).await.unwrap();
    let mut body = response.into_body().into_data_stream();

    let chunk = body.next().await.unwrap().unwrap();
    let frame = std::str::from_utf8(&chunk).unwrap();
    assert!(frame.starts_with("data: "));
    assert!(frame.ends_with("\n\n"));

    let event: Value = serde_json::from_str(frame.trim_start_matches("data: ").trim_end()).unwrap();
    let timestamp = event["timestamp"].as_str().unwrap();
    let message = event["message"].as_str().unwrap();
    let id = event["id"].as_u64().unwrap();

    assert_eq!(timestamp.len(), 8);
    assert!(message.starts_with(&format!("{timestamp} ")));
    assert!((1000..=9999).contains(&id));
}

#[tokio::test(start_paused = true)]
async fn consecutive_frames_are_spaced_one_to_three_seconds() {
    let response = test_app(false).oneshot(get("/stream_message")).await.unwrap();
    let mut body = response.into_body().into_data_stream();

    // First frame arrives without a leading delay
    body.next().await.unwrap().unwrap();

    for _ in 0..5 {
        let before = tokio::time::Instant::now();
        body.next().await.unwrap().unwrap();
        let elapsed = before.elapsed();
        assert!(
            elapsed >= Duration::from_secs(1) && elapsed <= Duration::from_secs(3),
            "inter-frame delay out of bounds: {elapsed:?}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn undecorated_stream_emits_bare_pool_sentences() {
    let response = test_app(false).oneshot(get("/stream_message")).await.unwrap();
    let mut body = response.into_body().into_data_stream();

    let chunk = body.next().await.unwrap().unwrap();
    let frame = std::str::from_utf8(&chunk).unwrap();
    let event: Value = serde_json::from_str(frame.trim_start_matches("data: ").trim_end()).unwrap();

    let timestamp = event["timestamp"].as_str().unwrap();
    let message = event["message"].as_str().unwrap();
    let text = &message[timestamp.len() + 1..];
    assert!(chatter::messages::is_pool_message(text));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_body_ends_the_connection_stream() {
    let response = test_app(true).oneshot(get("/stream_message")).await.unwrap();
    let mut body = response.into_body().into_data_stream();
    body.next().await.unwrap().unwrap();

    // Dropping the body drops the emitter with its pending timer; nothing is
    // left behind to keep the runtime busy.
    drop(body);
    tokio::time::sleep(Duration::from_secs(10)).await;
}

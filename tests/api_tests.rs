use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use futures::StreamExt;
use pomo_clock::{
    api::{create_router, responses::{ActionResponse, StatusResponse}},
    services::SilentCue,
    state::{AppState, Phase, TimerWidget, TICK_INTERVAL},
};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let widget = TimerWidget::mount(Arc::new(SilentCue), TICK_INTERVAL);
    let state = Arc::new(AppState::new(widget, 20525, "127.0.0.1".to_string()));
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_action(app: &Router, uri: &str) -> ActionResponse {
    let (status, body) = send(app, "POST", uri).await;
    assert_eq!(status, StatusCode::OK, "POST {} failed: {}", uri, body);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn page_renders_every_element_id() {
    let app = app();
    let (status, body) = send(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);

    for id in [
        "clock-header",
        "break-label",
        "break-decrement",
        "break-length",
        "break-increment",
        "session-label",
        "session-decrement",
        "session-length",
        "session-increment",
        "timer-label",
        "time-left",
        "start_stop",
        "reset",
    ] {
        assert!(body.contains(&format!("id=\"{}\"", id)), "page lacks #{}", id);
    }
    assert!(body.contains(r#"<div id="time-left">25:00</div>"#));
}

#[tokio::test]
async fn decrementing_break_five_times_stops_at_one() {
    let app = app();
    let mut lengths = Vec::new();
    for _ in 0..5 {
        let response = post_action(&app, "/api/break/decrement").await;
        assert_eq!(response.action, "break-decrement");
        lengths.push(response.state.break_length);
    }
    assert_eq!(lengths, vec![4, 3, 2, 1, 1]);
}

#[tokio::test]
async fn session_changes_follow_on_the_display() {
    let app = app();
    let response = post_action(&app, "/api/session/increment").await;
    assert_eq!(response.state.session_length, 26);
    assert_eq!(response.state.time_left, "26:00");
    assert_eq!(response.state.timer_label, Phase::Session);

    let response = post_action(&app, "/api/break/increment").await;
    assert_eq!(response.state.break_length, 6);
    assert_eq!(response.state.time_left, "26:00");
}

#[tokio::test]
async fn start_stop_and_reset_over_http() {
    let app = app();
    post_action(&app, "/api/session/decrement").await;

    let started = post_action(&app, "/api/start_stop").await;
    assert!(started.state.running);

    // frozen while running
    let ignored = post_action(&app, "/api/session/increment").await;
    assert_eq!(ignored.state.session_length, 24);

    let reset = post_action(&app, "/api/reset").await;
    assert!(!reset.state.running);
    assert_eq!(reset.state.session_length, 25);
    assert_eq!(reset.state.break_length, 5);
    assert_eq!(reset.state.remaining_seconds, 1500);
}

#[tokio::test]
async fn status_reports_the_last_action() {
    let app = app();
    let (_, body) = send(&app, "GET", "/api/status").await;
    let status: StatusResponse = serde_json::from_str(&body).unwrap();
    assert!(status.last_action.is_none());
    assert_eq!(status.state.time_left, "25:00");

    post_action(&app, "/api/break/increment").await;

    let (_, body) = send(&app, "GET", "/api/status").await;
    let status: StatusResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(status.last_action.as_deref(), Some("break-increment"));
    assert!(status.last_action_time.is_some());
    assert_eq!(status.state.break_length, 6);
    assert_eq!(status.port, 20525);
}

#[tokio::test]
async fn unknown_and_misused_routes_are_rejected() {
    let app = app();
    let (status, _) = send(&app, "POST", "/api/break/double").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/start_stop").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_check() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn event_stream_opens_with_the_current_state() {
    let app = app();
    post_action(&app, "/api/break/decrement").await;

    let request = Request::builder()
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/event-stream");

    let mut body = response.into_body().into_data_stream();
    let first = body.next().await.unwrap().unwrap();
    let frame = String::from_utf8(first.to_vec()).unwrap();
    assert!(frame.contains("event: state"), "unexpected frame: {}", frame);
    assert!(frame.contains("\"break_length\":4"), "unexpected frame: {}", frame);

    post_action(&app, "/api/break/decrement").await;
    let next = body.next().await.unwrap().unwrap();
    let frame = String::from_utf8(next.to_vec()).unwrap();
    assert!(frame.contains("\"break_length\":3"), "unexpected frame: {}", frame);
}

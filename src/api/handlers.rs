//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, Json,
    },
};
use futures::{future, stream, Stream, StreamExt};
use tracing::{debug, error};

use crate::state::{Action, AppState};
use super::{
    page::render_page,
    responses::{ActionResponse, ClockView, HealthResponse, StatusResponse},
};

/// Apply an action and answer with the resulting state
fn run_action(state: &AppState, action: Action) -> Result<Json<ActionResponse>, StatusCode> {
    match state.apply(action) {
        Ok(timer_state) => Ok(Json(ActionResponse::new(action.as_str(), &timer_state))),
        Err(e) => {
            error!("Failed to apply {}: {}", action.as_str(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /api/start_stop - Toggle the countdown
pub async fn start_stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    run_action(&state, Action::StartStop)
}

/// Handle POST /api/reset - Restore defaults
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    run_action(&state, Action::Reset)
}

/// Handle POST /api/break/decrement
pub async fn break_decrement_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    run_action(&state, Action::DecrementBreak)
}

/// Handle POST /api/break/increment
pub async fn break_increment_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    run_action(&state, Action::IncrementBreak)
}

/// Handle POST /api/session/decrement
pub async fn session_decrement_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    run_action(&state, Action::DecrementSession)
}

/// Handle POST /api/session/increment
pub async fn session_increment_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    run_action(&state, Action::IncrementSession)
}

/// Handle GET / - Render the clock page
pub async fn page_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    match state.get_timer_state() {
        Ok(timer_state) => Ok(Html(render_page(&timer_state))),
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /api/status - Return current clock and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer_state = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        state: ClockView::from(&timer_state),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /api/events - Stream the clock state, once now and on every change
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    debug!("Event stream subscriber connected");

    let rx = state.widget.subscribe();
    let initial = rx.borrow().clone();

    let changes = stream::unfold(rx, |mut rx| async move {
        rx.changed().await.ok()?;
        let snapshot = rx.borrow_and_update().clone();
        Some((snapshot, rx))
    });

    let events = stream::once(future::ready(initial))
        .chain(changes)
        .map(|snapshot| Event::default().event("state").json_data(ClockView::from(&snapshot)));

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

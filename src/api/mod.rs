//! HTTP API module
//!
//! This module contains the page render, the clock's action endpoints and
//! the response structures.

pub mod handlers;
pub mod page;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/start_stop", post(start_stop_handler))
        .route("/api/reset", post(reset_handler))
        .route("/api/break/decrement", post(break_decrement_handler))
        .route("/api/break/increment", post(break_increment_handler))
        .route("/api/session/decrement", post(session_decrement_handler))
        .route("/api/session/increment", post(session_increment_handler))
        .route("/api/status", get(status_handler))
        .route("/api/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

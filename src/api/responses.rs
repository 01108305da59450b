//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Phase, TimerState};

/// What the page shows for the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockView {
    pub break_length: u32,
    pub session_length: u32,
    pub remaining_seconds: u32,
    /// Remaining time as `MM:SS`
    pub time_left: String,
    pub timer_label: Phase,
    pub running: bool,
}

impl From<&TimerState> for ClockView {
    fn from(state: &TimerState) -> Self {
        Self {
            break_length: state.break_length,
            session_length: state.session_length,
            remaining_seconds: state.remaining_seconds,
            time_left: state.time_left(),
            timer_label: state.phase,
            running: state.running,
        }
    }
}

/// API response structure for action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub state: ClockView,
}

impl ActionResponse {
    pub fn new(action: &str, state: &TimerState) -> Self {
        Self {
            action: action.to_string(),
            timestamp: Utc::now(),
            state: ClockView::from(state),
        }
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub state: ClockView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

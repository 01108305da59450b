//! Server-side application state wrapping the clock widget

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{TimerState, TimerWidget};

/// A user operation on the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartStop,
    Reset,
    DecrementBreak,
    IncrementBreak,
    DecrementSession,
    IncrementSession,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::StartStop => "start_stop",
            Action::Reset => "reset",
            Action::DecrementBreak => "break-decrement",
            Action::IncrementBreak => "break-increment",
            Action::DecrementSession => "session-decrement",
            Action::IncrementSession => "session-increment",
        }
    }
}

/// Main application state shared by all handlers
pub struct AppState {
    /// The mounted clock
    pub widget: Arc<TimerWidget>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState around a mounted widget
    pub fn new(widget: Arc<TimerWidget>, port: u16, host: String) -> Self {
        Self {
            widget,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Run a user operation on the clock and record it as the last action
    pub fn apply(&self, action: Action) -> Result<TimerState, String> {
        let state = match action {
            Action::StartStop => self.widget.start_stop()?,
            Action::Reset => self.widget.reset()?,
            Action::DecrementBreak => self.widget.decrement_break()?,
            Action::IncrementBreak => self.widget.increment_break()?,
            Action::DecrementSession => self.widget.decrement_session()?,
            Action::IncrementSession => self.widget.increment_session()?,
        };

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.as_str().to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        info!("Applied {}: {} {} left", action.as_str(), state.phase, state.time_left());
        Ok(state)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.widget.snapshot()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

//! State management module
//!
//! This module contains the clock's data model, the widget that owns it and
//! the server state wrapped around the widget.

pub mod timer_state;
pub mod widget;
pub mod app_state;

// Re-export main types
pub use timer_state::{format_time, Phase, TickOutcome, TimerState};
pub use widget::{TimerWidget, TICK_INTERVAL};
pub use app_state::{Action, AppState};

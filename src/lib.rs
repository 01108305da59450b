//! Pomo Clock - a 25 + 5 session/break countdown clock served over HTTP
//!
//! This library provides the clock widget (state, countdown tick and audio
//! cue) and the HTTP surface that renders it and exposes its controls.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Phase, TimerState, TimerWidget};
pub use api::create_router;
pub use services::AudioCue;
pub use utils::signals::shutdown_signal;

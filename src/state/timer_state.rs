//! Timer state structure and its pure transitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Break length the clock mounts and resets with, in minutes
pub const DEFAULT_BREAK_LENGTH: u32 = 5;
/// Session length the clock mounts and resets with, in minutes
pub const DEFAULT_SESSION_LENGTH: u32 = 25;
/// Shortest allowed phase length, in minutes
pub const MIN_LENGTH: u32 = 1;
/// Longest allowed phase length, in minutes
pub const MAX_LENGTH: u32 = 60;

/// Which of the two timers is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Session,
    Break,
}

impl Phase {
    /// The phase the clock flips to when this one runs out
    pub fn other(self) -> Self {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was taken off the remaining time
    Decremented,
    /// The remaining time was already zero and the clock switched phase
    Flipped(Phase),
}

/// Complete state of the clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub break_length: u32,
    pub session_length: u32,
    pub remaining_seconds: u32,
    pub phase: Phase,
    pub running: bool,
}

impl TimerState {
    /// Create a stopped clock showing a full default session
    pub fn new() -> Self {
        Self {
            break_length: DEFAULT_BREAK_LENGTH,
            session_length: DEFAULT_SESSION_LENGTH,
            remaining_seconds: DEFAULT_SESSION_LENGTH * 60,
            phase: Phase::Session,
            running: false,
        }
    }

    /// Configured length of the given phase, in minutes
    pub fn length_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Session => self.session_length,
            Phase::Break => self.break_length,
        }
    }

    fn length_mut(&mut self, phase: Phase) -> &mut u32 {
        match phase {
            Phase::Session => &mut self.session_length,
            Phase::Break => &mut self.break_length,
        }
    }

    /// Advance the countdown by one second, flipping phase once it sits at zero
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            return TickOutcome::Decremented;
        }

        self.phase = self.phase.other();
        self.remaining_seconds = self.length_of(self.phase) * 60;
        TickOutcome::Flipped(self.phase)
    }

    /// Change the length of `target` by `delta` minutes.
    ///
    /// Returns `false` without touching anything while running or when the
    /// new length would leave `MIN_LENGTH..=MAX_LENGTH`. When `target` is the
    /// phase on display the remaining time follows the new length.
    pub fn adjust_length(&mut self, delta: i32, target: Phase) -> bool {
        if self.running {
            return false;
        }

        let candidate = i64::from(self.length_of(target)) + i64::from(delta);
        if candidate < i64::from(MIN_LENGTH) || candidate > i64::from(MAX_LENGTH) {
            return false;
        }
        // in range, so it fits
        let candidate = candidate as u32;

        *self.length_mut(target) = candidate;
        if self.phase == target {
            self.remaining_seconds = candidate * 60;
        }
        true
    }

    /// Remaining time as `MM:SS`
    pub fn time_left(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number of seconds as zero-padded `MM:SS`
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

//! The clock widget: owned state, the single cancellable tick and the audio cue

use std::{
    sync::{Arc, Mutex, MutexGuard, Weak},
    time::Duration,
};
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use super::timer_state::{Phase, TickOutcome, TimerState};
use crate::{services::AudioCue, tasks::countdown_task};

/// Nominal time between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Inner {
    state: TimerState,
    /// Handle of the live tick task, if any
    ticker: Option<JoinHandle<()>>,
    /// Bumped on every start and cancellation; ticks from older runs are ignored
    generation: u64,
}

impl Inner {
    fn cancel_ticker(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            debug!("Tick task cancelled");
        }
    }
}

/// A single 25 + 5 clock instance.
///
/// All mutation goes through the six user operations and the periodic tick.
/// Dropping the widget is the unmount: any pending tick is cancelled.
pub struct TimerWidget {
    inner: Mutex<Inner>,
    cue: Arc<dyn AudioCue>,
    tick_interval: Duration,
    /// Handed to the tick task so it never keeps the widget alive
    me: Weak<TimerWidget>,
    state_tx: watch::Sender<TimerState>,
}

impl TimerWidget {
    /// Mount a widget with default state, playing `cue` on every phase flip
    pub fn mount(cue: Arc<dyn AudioCue>, tick_interval: Duration) -> Arc<Self> {
        let (state_tx, _) = watch::channel(TimerState::new());
        info!("Mounting clock widget with cue '{}', tick every {:?}", cue.id(), tick_interval);

        Arc::new_cyclic(|me| Self {
            inner: Mutex::new(Inner {
                state: TimerState::new(),
                ticker: None,
                generation: 0,
            }),
            cue,
            tick_interval,
            me: me.clone(),
            state_tx,
        })
    }

    fn lock_inner(&self) -> Result<MutexGuard<'_, Inner>, String> {
        self.inner.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Notify subscribers that the state changed.
    ///
    /// Called with the state lock held so subscribers see changes in the
    /// order they were made.
    fn publish(&self, state: &TimerState) {
        self.state_tx.send_replace(state.clone());
    }

    /// Rewind the cue and play it from the start. Called with the state lock held.
    fn play_cue(&self) {
        if let Err(e) = self.cue.set_current_time(0.0) {
            warn!("Failed to rewind cue {}: {}", self.cue.id(), e);
        }
        if let Err(e) = self.cue.play() {
            warn!("Failed to play cue {}: {}", self.cue.id(), e);
        }
    }

    /// Pause the cue and rewind it. Called with the state lock held.
    fn silence_cue(&self) {
        if let Err(e) = self.cue.pause() {
            warn!("Failed to pause cue {}: {}", self.cue.id(), e);
        }
        if let Err(e) = self.cue.set_current_time(0.0) {
            warn!("Failed to rewind cue {}: {}", self.cue.id(), e);
        }
    }

    /// Toggle the countdown on or off
    pub fn start_stop(&self) -> Result<TimerState, String> {
        let mut inner = self.lock_inner()?;

        if inner.state.running {
            inner.cancel_ticker();
            inner.state.running = false;
            info!("Countdown stopped at {} ({})", inner.state.time_left(), inner.state.phase);
        } else {
            let runtime = Handle::try_current()
                .map_err(|e| format!("Cannot schedule ticks outside a runtime: {}", e))?;

            inner.cancel_ticker();
            inner.state.running = true;
            let handle = runtime.spawn(countdown_task(
                self.me.clone(),
                inner.generation,
                self.tick_interval,
            ));
            inner.ticker = Some(handle);
            info!("Countdown started at {} ({})", inner.state.time_left(), inner.state.phase);
        }

        self.publish(&inner.state);
        Ok(inner.state.clone())
    }

    /// Restore the defaults, cancel the countdown and silence the cue
    pub fn reset(&self) -> Result<TimerState, String> {
        let mut inner = self.lock_inner()?;
        inner.cancel_ticker();
        inner.state = TimerState::new();
        self.silence_cue();

        info!("Clock reset to defaults");
        self.publish(&inner.state);
        Ok(inner.state.clone())
    }

    /// Change the length of `target` by `delta` minutes, ignored while running
    /// or outside 1..=60
    pub fn adjust_length(&self, delta: i32, target: Phase) -> Result<TimerState, String> {
        let mut inner = self.lock_inner()?;
        if inner.state.adjust_length(delta, target) {
            debug!("{} length is now {}", target, inner.state.length_of(target));
        } else {
            debug!("Ignored {} length change of {:+}", target, delta);
        }

        self.publish(&inner.state);
        Ok(inner.state.clone())
    }

    pub fn decrement_break(&self) -> Result<TimerState, String> {
        self.adjust_length(-1, Phase::Break)
    }

    pub fn increment_break(&self) -> Result<TimerState, String> {
        self.adjust_length(1, Phase::Break)
    }

    pub fn decrement_session(&self) -> Result<TimerState, String> {
        self.adjust_length(-1, Phase::Session)
    }

    pub fn increment_session(&self) -> Result<TimerState, String> {
        self.adjust_length(1, Phase::Session)
    }

    /// Run one tick belonging to run `generation`.
    ///
    /// Returns `Ok(false)` when that run has been cancelled, in which case
    /// nothing changes and the caller should stop ticking. The cue and the
    /// publish happen under the state lock, so a concurrent reset is ordered
    /// entirely before or after this tick.
    pub(crate) fn tick(&self, generation: u64) -> Result<bool, String> {
        let mut inner = self.lock_inner()?;
        if inner.generation != generation || !inner.state.running {
            return Ok(false);
        }

        if let TickOutcome::Flipped(phase) = inner.state.tick() {
            info!("{} started, {} on the clock", phase, inner.state.time_left());
            self.play_cue();
        }

        self.publish(&inner.state);
        Ok(true)
    }

    /// Get the current state
    pub fn snapshot(&self) -> Result<TimerState, String> {
        self.lock_inner().map(|inner| inner.state.clone())
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_tx.subscribe()
    }

    /// Whether a tick task is currently scheduled
    pub fn is_ticking(&self) -> bool {
        self.lock_inner()
            .map(|inner| inner.ticker.as_ref().is_some_and(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }
}

impl Drop for TimerWidget {
    fn drop(&mut self) {
        match self.inner.get_mut() {
            Ok(inner) => inner.cancel_ticker(),
            Err(poisoned) => poisoned.into_inner().cancel_ticker(),
        }
        debug!("Clock widget unmounted");
    }
}

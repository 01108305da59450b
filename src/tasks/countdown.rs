//! Countdown tick background task

use std::{sync::Weak, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error};

use crate::state::TimerWidget;

/// Tick the widget once per `period` until run `generation` is cancelled or
/// the widget is dropped.
///
/// The first tick fires one full period after the task starts. Late ticks are
/// not made up for.
pub async fn countdown_task(widget: Weak<TimerWidget>, generation: u64, period: Duration) {
    debug!("Starting countdown task for run {}", generation);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(widget) = widget.upgrade() else {
            debug!("Widget unmounted, countdown task exiting");
            break;
        };

        match widget.tick(generation) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Run {} was cancelled, countdown task exiting", generation);
                break;
            }
            Err(e) => {
                error!("Countdown tick failed: {}", e);
                break;
            }
        }
    }
}

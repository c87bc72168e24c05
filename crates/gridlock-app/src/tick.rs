use std::time::{Duration, Instant};

use gridlock_game::{SessionTimer, TickSource};

pub(crate) const TICK_INTERVAL: Duration = Duration::from_secs(1);

// Fires the timer's recurring tick from the UI thread. The driver is
// polled once per frame; there is no timer thread, so ticks can never
// race input handling or rendering.
#[derive(Debug)]
pub(crate) struct TickDriver {
    source: TickSource,
    next_fire: Instant,
}

impl TickDriver {
    #[must_use]
    pub(crate) fn new(source: TickSource, next_fire: Instant) -> Self {
        Self { source, next_fire }
    }

    // Applies every fire that has come due, catching up after slow
    // frames. The timer drops stale-source ticks itself, so a driver
    // that outlived a stop cannot advance the counter.
    pub(crate) fn poll(&mut self, now: Instant, timer: &mut SessionTimer) {
        while now >= self.next_fire {
            if !timer.tick(&self.source) {
                break;
            }
            self.next_fire += TICK_INTERVAL;
        }
    }

    #[must_use]
    pub(crate) fn until_next_fire(&self, now: Instant) -> Duration {
        self.next_fire.saturating_duration_since(now)
    }
}

//! The session timer state machine.

use std::fmt::{self, Display};

/// Where the timer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Never started; the counter is 0.
    Idle,
    /// Counting; ticks from the current [`TickSource`] are applied.
    Running,
    /// Stopped; the counter is retained for resume.
    Stopped,
}

/// Token identifying one run of the timer.
///
/// A tick is only applied if it carries the token issued by the most
/// recent [`SessionTimer::start`]. Stopping (or restarting) the timer
/// invalidates every previously issued token, so a tick that was already
/// in flight when `stop` returned can never fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSource {
    generation: u64,
}

/// Elapsed-seconds counter driven by an external periodic tick.
///
/// The timer itself never schedules anything; the caller installs a
/// recurring 1000 ms tick source when [`start`](Self::start) hands one
/// out (first fire immediate, offset 0) and tears it down on
/// [`stop`](Self::stop).
///
/// # Examples
///
/// ```
/// use gridlock_game::SessionTimer;
///
/// let mut timer = SessionTimer::new();
/// let source = timer.start().expect("timer was idle");
/// timer.tick(&source);
/// timer.tick(&source);
/// assert_eq!(timer.elapsed_seconds(), 2);
///
/// timer.stop();
/// // The old source is dead after stop.
/// assert!(!timer.tick(&source));
/// assert_eq!(timer.elapsed_seconds(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    phase: TimerPhase,
    elapsed_secs: u64,
    generation: u64,
}

impl SessionTimer {
    /// Creates an idle timer with the counter at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            elapsed_secs: 0,
            generation: 0,
        }
    }

    /// Starts or resumes the timer.
    ///
    /// Returns the tick source for this run, or `None` if the timer was
    /// already running (starting twice must not double the tick rate).
    /// The counter is preserved across stop/start, so a resume continues
    /// where the last run left off.
    pub fn start(&mut self) -> Option<TickSource> {
        if self.phase == TimerPhase::Running {
            return None;
        }
        self.phase = TimerPhase::Running;
        self.generation += 1;
        Some(TickSource {
            generation: self.generation,
        })
    }

    /// Stops the timer, retaining the counter.
    ///
    /// Returns `true` if the timer was actually running. Every
    /// previously issued [`TickSource`] is invalid once this returns.
    pub fn stop(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        self.phase = TimerPhase::Stopped;
        self.generation += 1;
        true
    }

    /// Applies one tick from the given source.
    ///
    /// Returns `true` if the tick counted. A tick from a stale source
    /// (cancelled by `stop` or superseded by a later `start`) is ignored.
    pub fn tick(&mut self, source: &TickSource) -> bool {
        if self.phase != TimerPhase::Running || source.generation != self.generation {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Returns whether the timer is currently counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Returns the elapsed whole seconds.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_secs
    }

    /// Formats the elapsed time as `M:SS`, seconds zero-padded.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        self.to_string()
    }
}

impl Display for SessionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(timer: &mut SessionTimer, source: &TickSource, n: u64) {
        for _ in 0..n {
            assert!(timer.tick(source));
        }
    }

    #[test]
    fn n_ticks_advance_the_counter_by_n() {
        let mut timer = SessionTimer::new();
        assert_eq!(timer.phase(), TimerPhase::Idle);

        let source = timer.start().unwrap();
        ticked(&mut timer, &source, 5);
        assert_eq!(timer.elapsed_seconds(), 5);
    }

    #[test]
    fn formatting_pads_seconds_to_two_digits() {
        let mut timer = SessionTimer::new();
        assert_eq!(timer.format_elapsed(), "0:00");

        let source = timer.start().unwrap();
        ticked(&mut timer, &source, 59);
        assert_eq!(timer.format_elapsed(), "0:59");

        ticked(&mut timer, &source, 1);
        assert_eq!(timer.format_elapsed(), "1:00");

        ticked(&mut timer, &source, 65);
        assert_eq!(timer.format_elapsed(), "2:05");
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut timer = SessionTimer::new();
        let source = timer.start().unwrap();

        // A second start hands out no second source and does not
        // invalidate the first one: no double-speed counting.
        assert_eq!(timer.start(), None);
        assert!(timer.tick(&source));
        assert_eq!(timer.elapsed_seconds(), 1);
    }

    #[test]
    fn stop_is_idempotent_and_preserves_the_counter() {
        let mut timer = SessionTimer::new();
        assert!(!timer.stop());

        let source = timer.start().unwrap();
        ticked(&mut timer, &source, 3);

        assert!(timer.stop());
        assert!(!timer.stop());
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert_eq!(timer.elapsed_seconds(), 3);
    }

    #[test]
    fn ticks_do_not_count_after_stop() {
        let mut timer = SessionTimer::new();
        let source = timer.start().unwrap();
        ticked(&mut timer, &source, 2);
        timer.stop();

        // The in-flight tick is dropped on the floor.
        assert!(!timer.tick(&source));
        assert_eq!(timer.elapsed_seconds(), 2);
    }

    #[test]
    fn resume_continues_from_the_retained_counter() {
        let mut timer = SessionTimer::new();
        let source = timer.start().unwrap();
        ticked(&mut timer, &source, 3);
        timer.stop();

        let resumed = timer.start().unwrap();
        assert!(timer.tick(&resumed));
        assert_eq!(timer.elapsed_seconds(), 4);
    }

    #[test]
    fn a_source_from_a_previous_run_is_stale_after_restart() {
        let mut timer = SessionTimer::new();
        let old = timer.start().unwrap();
        timer.stop();
        let current = timer.start().unwrap();

        assert!(!timer.tick(&old));
        assert!(timer.tick(&current));
        assert_eq!(timer.elapsed_seconds(), 1);
    }
}

use std::time::{Duration, Instant};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Decides when the next generation is due while the simulation is running.
///
/// Time is always passed in by the caller, so this works the same under a UI
/// event loop, a plain loop with `sleep`, or a test.
#[derive(Clone, Copy, Debug)]
pub struct Playback {
    interval: Duration,
    next_step: Option<Instant>,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_step: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_step.is_some()
    }

    /// Starts playback; the first step is due one interval after `now`.
    /// Starting while already running changes nothing.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        self.next_step = Some(now + self.interval);
        log::info!("playback started, one step every {:?}", self.interval);
    }

    pub fn stop(&mut self) {
        if self.next_step.take().is_some() {
            log::info!("playback stopped");
        }
    }

    /// Returns whether a step should run at `now` and, if so, schedules the
    /// following one. A caller that fell behind gets a single step, not a
    /// burst of missed ones.
    pub fn due(&mut self, now: Instant) -> bool {
        let Some(at) = self.next_step else {
            return false;
        };
        if now < at {
            return false;
        }
        let next = at + self.interval;
        self.next_step = Some(if next <= now { now + self.interval } else { next });
        true
    }

    pub fn time_to_next_step(&self, now: Instant) -> Option<Duration> {
        self.next_step.map(|at| at.saturating_duration_since(now))
    }
}

//! Fixed-interval tick source for cooperative animation.

use std::time::{Duration, Instant};

/// Upper bound on steps delivered for one poll after a stall.
pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

/// Converts elapsed wall-clock time into a count of due steps.
///
/// The frame loop polls [`Ticker::due`] and runs that many animator steps, so
/// animation speed follows the configured interval rather than the frame rate.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    max_catch_up: u32,
    last: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            last: None,
        }
    }

    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Steps due at `now`. The first poll after construction or
    /// [`reset`](Self::reset) returns 1.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(now);
            return 1;
        };
        let elapsed = now.saturating_duration_since(last);
        let whole = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if whole == 0 {
            return 0;
        }
        if whole > u64::from(self.max_catch_up) {
            // Drop the backlog instead of replaying it.
            self.last = Some(now);
            return self.max_catch_up;
        }
        self.last = Some(last + self.interval * whole as u32);
        whole as u32
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

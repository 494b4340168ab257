// Fixed-interval tick pacing for polling hosts

use std::time::{Duration, Instant};

/// Decides when a polling host should deliver the next tick
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            last: None,
        }
    }

    /// Interval for `fps` frames per second (at least one)
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when a tick is due at `now`; the first call is always due
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// How long a host can wait before the next tick is due
    pub fn until_due(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Forget the last tick, so the next `due` fires immediately
    pub fn reset(&mut self) {
        self.last = None;
    }
}

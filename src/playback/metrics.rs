//! Comparison/swap totals and a pause-aware elapsed-time clock

use crate::snapshot::Counters;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to; clones share the same time
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Accumulates running time across pauses
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or resume) accumulating; no effect while already running
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stop accumulating, keeping the time so far
    pub fn pause(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + now.saturating_duration_since(started),
            None => self.accumulated,
        }
    }
}

/// Point-in-time copy of the metrics, for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed: Duration,
}

/// Metrics for the current run
#[derive(Debug, Clone)]
pub struct Metrics<C: Clock = SystemClock> {
    counters: Counters,
    stopwatch: Stopwatch,
    clock: C,
}

impl Metrics<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Metrics<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Metrics<C> {
    pub fn with_clock(clock: C) -> Self {
        Metrics {
            counters: Counters::default(),
            stopwatch: Stopwatch::new(),
            clock,
        }
    }

    /// Zero the counters and the clock
    pub fn reset(&mut self) {
        self.counters = Counters::default();
        self.stopwatch.reset();
    }

    pub fn start_timer(&mut self) {
        self.stopwatch.start(self.clock.now());
    }

    pub fn pause_timer(&mut self) {
        self.stopwatch.pause(self.clock.now());
    }

    pub fn resume_timer(&mut self) {
        self.stopwatch.start(self.clock.now());
    }

    /// Freeze the clock at its final value
    pub fn stop_timer(&mut self) {
        self.stopwatch.pause(self.clock.now());
    }

    /// Take the running totals from a snapshot
    pub fn record(&mut self, counters: Counters) {
        debug_assert!(
            counters.comparisons >= self.counters.comparisons
                && counters.swaps >= self.counters.swaps,
            "counters went backwards"
        );
        self.counters = counters;
    }

    pub fn comparisons(&self) -> u64 {
        self.counters.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.counters.swaps
    }

    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed(self.clock.now())
    }

    pub fn is_timing(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comparisons: self.counters.comparisons,
            swaps: self.counters.swaps,
            elapsed: self.elapsed(),
        }
    }
}

//! Playback controller
//!
//! ```text
//! Idle ──start──▶ Running ◀──resume── Paused
//!                    │ └────pause─────▶ │
//!                    │ (stepper done)   │
//!                    ▼                  │
//!                Completed     stop (from Running or Paused) ──▶ Idle
//! ```
//!
//! One call to [`Controller::tick`] pulls at most one snapshot. Pausing only
//! withdraws the scheduled tick; the stepper is left exactly where it was,
//! so a resumed run continues with the very next snapshot.
//!
//! `pause`, `resume` and `stop` outside their valid states are ignored.

use super::metrics::{Clock, Metrics, SystemClock};
use crate::snapshot::{StepResult, StepState};
use crate::stepper::Stepper;

/// Called with every non-terminal result, in algorithm order
pub type StepCallback = Box<dyn FnMut(&StepState)>;

/// Called once when the stepper reports `Done`
pub type CompleteCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Completed,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Running => "RUNNING",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Completed => "DONE",
        }
    }
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing scheduled; the stepper was not touched
    Idle,
    /// One snapshot was delivered to `on_step`
    Stepped,
    /// The run finished and `on_complete` was called
    Completed,
}

/// Drives one stepper at a time
pub struct Controller<C: Clock = SystemClock> {
    state: PlaybackState,
    stepper: Option<Box<dyn Stepper>>,
    on_step: Option<StepCallback>,
    on_complete: Option<CompleteCallback>,
    tick_scheduled: bool,
    steps_delivered: u64,
    metrics: Metrics<C>,
}

impl Controller<SystemClock> {
    pub fn new() -> Self {
        Self::with_metrics(Metrics::new())
    }
}

impl Default for Controller<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_metrics(metrics: Metrics<C>) -> Self {
        Controller {
            state: PlaybackState::Idle,
            stepper: None,
            on_step: None,
            on_complete: None,
            tick_scheduled: false,
            steps_delivered: 0,
            metrics,
        }
    }

    /// Begin playing `stepper`; an active run is stopped first
    pub fn start(
        &mut self,
        stepper: Box<dyn Stepper>,
        on_step: StepCallback,
        on_complete: CompleteCallback,
    ) {
        if self.is_active() {
            self.stop();
        }

        tracing::debug!(algorithm = %stepper.algorithm(), len = stepper.len(), "playback started");

        self.stepper = Some(stepper);
        self.on_step = Some(on_step);
        self.on_complete = Some(on_complete);
        self.steps_delivered = 0;
        self.metrics.reset();
        self.metrics.start_timer();
        self.state = PlaybackState::Running;
        self.tick_scheduled = true;
    }

    /// Run the scheduled tick, if any
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != PlaybackState::Running || !self.tick_scheduled {
            return TickOutcome::Idle;
        }
        self.tick_scheduled = false;

        let outcome = self.pull();
        if outcome == TickOutcome::Stepped {
            self.tick_scheduled = true;
        }
        outcome
    }

    /// Deliver exactly one snapshot while paused, staying paused
    pub fn step_once(&mut self) -> TickOutcome {
        if self.state != PlaybackState::Paused {
            tracing::warn!(state = ?self.state, "single step ignored");
            return TickOutcome::Idle;
        }
        self.pull()
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Running {
            tracing::warn!(state = ?self.state, "pause ignored");
            return;
        }
        self.tick_scheduled = false;
        self.metrics.pause_timer();
        self.state = PlaybackState::Paused;
        tracing::debug!(steps = self.steps_delivered, "playback paused");
    }

    pub fn resume(&mut self) {
        if self.state != PlaybackState::Paused {
            tracing::warn!(state = ?self.state, "resume ignored");
            return;
        }
        self.metrics.resume_timer();
        self.state = PlaybackState::Running;
        self.tick_scheduled = true;
        tracing::debug!(steps = self.steps_delivered, "playback resumed");
    }

    /// Abandon the current run; a new `start` is needed to play again
    pub fn stop(&mut self) {
        if !self.is_active() {
            tracing::warn!(state = ?self.state, "stop ignored");
            return;
        }
        self.discard();
        self.metrics.stop_timer();
        self.state = PlaybackState::Idle;
        tracing::debug!(steps = self.steps_delivered, "playback stopped");
    }

    /// Return to `Idle` from any state and clear the metrics
    pub fn reset(&mut self) {
        self.discard();
        self.metrics.reset();
        self.steps_delivered = 0;
        self.state = PlaybackState::Idle;
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while a run is in progress (running or paused)
    pub fn is_active(&self) -> bool {
        matches!(self.state, PlaybackState::Running | PlaybackState::Paused)
    }

    /// True when the next `tick` would advance the stepper
    pub fn wants_tick(&self) -> bool {
        self.state == PlaybackState::Running && self.tick_scheduled
    }

    pub fn steps_delivered(&self) -> u64 {
        self.steps_delivered
    }

    pub fn metrics(&self) -> &Metrics<C> {
        &self.metrics
    }

    fn pull(&mut self) -> TickOutcome {
        let Some(stepper) = self.stepper.as_mut() else {
            return TickOutcome::Idle;
        };

        match stepper.advance() {
            Ok(StepResult::Continuing(state)) => {
                self.metrics.record(state.metrics);
                self.steps_delivered += 1;
                if let Some(on_step) = self.on_step.as_mut() {
                    on_step(&state);
                }
                TickOutcome::Stepped
            }
            Ok(StepResult::Done(result)) => {
                tracing::info!(
                    comparisons = result.comparisons,
                    swaps = result.swaps,
                    steps = self.steps_delivered,
                    "playback completed"
                );
                let on_complete = self.on_complete.take();
                self.discard();
                self.metrics.stop_timer();
                self.state = PlaybackState::Completed;
                if let Some(on_complete) = on_complete {
                    on_complete();
                }
                TickOutcome::Completed
            }
            Err(err) => {
                // Only reachable if the stepper is pulled outside this controller
                tracing::error!(error = %err, "stepper failed during playback");
                self.discard();
                self.metrics.stop_timer();
                self.state = PlaybackState::Idle;
                TickOutcome::Idle
            }
        }
    }

    fn discard(&mut self) {
        self.stepper = None;
        self.on_step = None;
        self.on_complete = None;
        self.tick_scheduled = false;
    }
}

//! Playback of stepper runs
//!
//! - [`controller`]: the pause/resume/stop state machine that pulls one
//!   snapshot per tick and hands it to callbacks
//! - [`metrics`]: counters plus a pause-aware stopwatch, kept in sync by the
//!   controller
//! - [`ticker`]: fixed-interval pacing for hosts that poll
//! - [`session`]: the control surface a UI talks to (select, play, pause,
//!   reset)
//!
//! # Scheduling
//!
//! The controller never sleeps or spawns. The host owns the cadence and calls
//! [`Controller::tick`] whenever its frame comes around; tests call it
//! directly. Only one tick is ever outstanding, so there is nothing to lock.

pub mod controller;
pub mod metrics;
pub mod session;
pub mod ticker;

pub use controller::{Controller, PlaybackState, TickOutcome};
pub use metrics::{Clock, ManualClock, Metrics, MetricsSnapshot, Stopwatch, SystemClock};
pub use session::Session;
pub use ticker::Ticker;

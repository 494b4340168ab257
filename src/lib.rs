//! # Introduction
//!
//! sortty runs classic sorting algorithms one step at a time and plays the
//! steps back in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//! Every comparison, swap and "this element is final" event becomes a
//! [`snapshot::StepState`] that a renderer can draw as a bar chart.
//!
//! ## Pipeline
//!
//! ```text
//! Data → Stepper → StepState snapshots → Controller → Session → TUI
//! ```
//!
//! 1. [`data`]: random, literal or file-backed input values.
//! 2. [`stepper`]: bubble, selection, insertion, merge, quick and heap sort
//!    as resumable state machines that emit one snapshot per call.
//! 3. [`playback`]: the tick-driven controller (play, pause, stop), the
//!    metrics aggregator and the [`playback::Session`] control surface.
//! 4. [`snapshot`]: the frame and result types shared by all of the above.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod data;
pub mod errors;
pub mod playback;
pub mod snapshot;
pub mod stepper;
pub mod ui;

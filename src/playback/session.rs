//! The control surface a UI drives
//!
//! A [`Session`] owns the data set, the selected algorithm and the
//! [`Controller`], and keeps the latest frame for the renderer. The UI maps
//! its buttons directly onto [`Session::select_algorithm`],
//! [`Session::play`], [`Session::pause`] and [`Session::reset`].
//!
//! Selecting, resetting or loading while a run is active stops it first.
//! A finished run leaves its sorted frame on screen until one of those
//! happens.

use super::controller::{Controller, PlaybackState, TickOutcome};
use super::metrics::{Clock, Metrics, SystemClock};
use crate::errors::SortError;
use crate::snapshot::StepState;
use crate::stepper::{validate_input, Algorithm};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

pub struct Session<C: Clock = SystemClock> {
    data: Vec<f64>,
    algorithm: Option<Algorithm>,
    controller: Controller<C>,
    frame: Rc<RefCell<StepState>>,
    finished: Rc<Cell<bool>>,
}

impl Session<SystemClock> {
    pub fn new(data: Vec<f64>) -> Result<Self, SortError> {
        Self::with_metrics(data, Metrics::new())
    }
}

impl<C: Clock> Session<C> {
    pub fn with_metrics(data: Vec<f64>, metrics: Metrics<C>) -> Result<Self, SortError> {
        validate_input(&data)?;
        Ok(Session {
            frame: Rc::new(RefCell::new(StepState::idle(data.clone()))),
            data,
            algorithm: None,
            controller: Controller::with_metrics(metrics),
            finished: Rc::new(Cell::new(false)),
        })
    }

    /// Select by registry name (`"quick"`, `"merge-sort"`, ...)
    pub fn select_algorithm(&mut self, name: &str) -> Result<Algorithm, SortError> {
        let algorithm = name.parse::<Algorithm>()?;
        self.select(algorithm);
        Ok(algorithm)
    }

    /// Select an algorithm, abandoning any active run
    pub fn select(&mut self, algorithm: Algorithm) {
        self.reset();
        self.algorithm = Some(algorithm);
        tracing::info!(%algorithm, "algorithm selected");
    }

    /// Start a run, or resume a paused one
    ///
    /// Without a selected algorithm this does nothing.
    pub fn play(&mut self) -> Result<(), SortError> {
        match self.controller.state() {
            PlaybackState::Paused => {
                self.controller.resume();
                Ok(())
            }
            PlaybackState::Running => Ok(()),
            PlaybackState::Idle | PlaybackState::Completed => {
                let Some(algorithm) = self.algorithm else {
                    tracing::warn!("play ignored: no algorithm selected");
                    return Ok(());
                };
                let stepper = algorithm.stepper(&self.data)?;
                self.show_idle_frame();

                let frame = Rc::clone(&self.frame);
                let finished = Rc::clone(&self.finished);
                self.controller.start(
                    stepper,
                    Box::new(move |state| *frame.borrow_mut() = state.clone()),
                    Box::new(move || finished.set(true)),
                );
                Ok(())
            }
        }
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Toggle between playing and paused
    pub fn toggle(&mut self) -> Result<(), SortError> {
        if self.controller.state() == PlaybackState::Running {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Stop any run and show the unsorted data again
    pub fn reset(&mut self) {
        if self.controller.is_active() {
            self.controller.stop();
        }
        self.controller.reset();
        self.show_idle_frame();
    }

    /// Replace the data set; implies `reset`
    pub fn load(&mut self, data: Vec<f64>) -> Result<(), SortError> {
        validate_input(&data)?;
        tracing::info!(len = data.len(), "data loaded");
        self.data = data;
        self.reset();
        Ok(())
    }

    /// Host tick: advance the run if one is scheduled
    pub fn tick(&mut self) -> TickOutcome {
        self.controller.tick()
    }

    /// Single step while paused
    pub fn step(&mut self) -> TickOutcome {
        self.controller.step_once()
    }

    /// Latest frame to draw
    pub fn frame(&self) -> Ref<'_, StepState> {
        self.frame.borrow()
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn metrics(&self) -> &Metrics<C> {
        self.controller.metrics()
    }

    pub fn steps(&self) -> u64 {
        self.controller.steps_delivered()
    }

    /// True once the last run called its completion callback
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    pub fn wants_tick(&self) -> bool {
        self.controller.wants_tick()
    }

    fn show_idle_frame(&mut self) {
        self.finished.set(false);
        *self.frame.borrow_mut() = StepState::idle(self.data.clone());
    }
}

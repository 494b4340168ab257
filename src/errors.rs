//! Error types for the sorting visualizer
//!
//! This module defines [`SortError`], covering everything that can go wrong
//! in the library: bad input at stepper creation, pulling a finished stepper,
//! naming an algorithm that does not exist, and loading data.
//!
//! Controller methods called in the wrong state are not errors. They are
//! ignored (and logged), since a UI will routinely send them.

use crate::stepper::Algorithm;
use std::io;
use thiserror::Error;

/// Errors raised by steppers, sessions and data sources
#[derive(Debug, Error)]
pub enum SortError {
    /// A value that cannot be totally ordered (NaN or infinite)
    #[error("invalid input at index {index}: {value} is not a finite number")]
    InvalidInput { index: usize, value: f64 },

    /// `advance()` called after the stepper returned its final result
    #[error("{algorithm} stepper advanced after it finished")]
    ExhaustedStepper { algorithm: Algorithm },

    /// No algorithm is registered under this name
    #[error("unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    /// A data token that is not a number
    #[error("cannot parse '{token}' as a number on line {line}")]
    InvalidValue { line: usize, token: String },

    /// Reading a data file failed
    #[error("failed to read data: {0}")]
    Io(#[from] io::Error),
}

impl SortError {
    /// True for errors that indicate a bug in the caller rather than bad data
    pub fn is_programming_error(&self) -> bool {
        matches!(self, SortError::ExhaustedStepper { .. })
    }
}

//! Resumable sorting algorithms
//!
//! Each algorithm is written as a small state machine instead of a loop, so
//! that it can stop after every unit of progress and hand the caller a
//! [`StepState`]. The pieces:
//!
//! - [`Stepper`]: the pull contract (`advance()` until `Done`)
//! - [`SortStepper`]: the shared driver that validates input, emits the
//!   terminal snapshot and the final result, and rejects over-pulling
//! - [`recorder::Recorder`]: the private working copy of the array plus
//!   counters; every mutation goes through it and returns a snapshot
//! - one module per [`Algorithm`]
//!
//! # Run shape
//!
//! ```text
//! advance() → Continuing(s0) … Continuing(terminal) → Done(result) → Err(ExhaustedStepper)
//! ```
//!
//! Inputs of length 0 or 1 skip straight to the terminal snapshot.
//!
//! Recursive algorithms (merge, quick) keep their pending sub-ranges on an
//! explicit stack, so suspension never depends on the call stack.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod selection;

use crate::errors::SortError;
use crate::snapshot::{StepResult, StepState};
use recorder::Recorder;
use std::fmt;
use std::str::FromStr;

/// A single-use, pull-based run of one sorting algorithm
pub trait Stepper {
    /// Produce the next snapshot, or the final result once the run is over
    fn advance(&mut self) -> Result<StepResult, SortError>;

    /// Which algorithm this stepper runs
    fn algorithm(&self) -> Algorithm;

    /// Number of elements being sorted
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once `Done` has been returned
    fn is_exhausted(&self) -> bool;
}

/// Algorithm-specific half of a stepper
///
/// `step` must return exactly one snapshot per call, or `None` once the
/// algorithm has nothing left to do. It is only driven for inputs of two or
/// more elements.
pub trait SortMachine {
    const ALGORITHM: Algorithm;

    fn new(len: usize) -> Self;

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStage {
    Sorting,
    Concluding,
    Finished,
    Exhausted,
}

/// Drives a [`SortMachine`] and enforces the run shape shared by all algorithms
#[derive(Debug)]
pub struct SortStepper<M: SortMachine> {
    machine: M,
    recorder: Recorder,
    stage: RunStage,
}

impl<M: SortMachine> SortStepper<M> {
    /// Copy `input` into a fresh stepper; fails on NaN or infinite values
    pub fn new(input: &[f64]) -> Result<Self, SortError> {
        validate_input(input)?;
        let recorder = Recorder::new(input.to_vec());
        let stage = if input.len() < 2 {
            RunStage::Concluding
        } else {
            RunStage::Sorting
        };

        let algorithm = M::ALGORITHM;
        tracing::debug!(%algorithm, len = input.len(), "stepper created");

        Ok(SortStepper {
            machine: M::new(input.len()),
            recorder,
            stage,
        })
    }
}

impl<M: SortMachine> Stepper for SortStepper<M> {
    fn advance(&mut self) -> Result<StepResult, SortError> {
        loop {
            match self.stage {
                RunStage::Sorting => {
                    if let Some(state) = self.machine.step(&mut self.recorder) {
                        return Ok(StepResult::Continuing(state));
                    }
                    self.stage = RunStage::Concluding;
                }
                RunStage::Concluding => {
                    self.stage = RunStage::Finished;
                    return Ok(StepResult::Continuing(self.recorder.conclude()));
                }
                RunStage::Finished => {
                    self.stage = RunStage::Exhausted;
                    let result = self.recorder.final_result();
                    let algorithm = M::ALGORITHM;
                    tracing::debug!(
                        %algorithm,
                        comparisons = result.comparisons,
                        swaps = result.swaps,
                        "stepper finished"
                    );
                    return Ok(StepResult::Done(result));
                }
                RunStage::Exhausted => {
                    return Err(SortError::ExhaustedStepper {
                        algorithm: M::ALGORITHM,
                    });
                }
            }
        }
    }

    fn algorithm(&self) -> Algorithm {
        M::ALGORITHM
    }

    fn len(&self) -> usize {
        self.recorder.len()
    }

    fn is_exhausted(&self) -> bool {
        self.stage == RunStage::Exhausted
    }
}

/// Reject values that have no place in a total order
pub fn validate_input(input: &[f64]) -> Result<(), SortError> {
    match input.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SortError::InvalidInput {
            index,
            value: input[index],
        }),
        None => Ok(()),
    }
}

/// The registered sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Registry key, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Create a fresh stepper for this algorithm over a copy of `input`
    pub fn stepper(self, input: &[f64]) -> Result<Box<dyn Stepper>, SortError> {
        let stepper: Box<dyn Stepper> = match self {
            Algorithm::Bubble => Box::new(SortStepper::<bubble::BubbleSort>::new(input)?),
            Algorithm::Selection => {
                Box::new(SortStepper::<selection::SelectionSort>::new(input)?)
            }
            Algorithm::Insertion => {
                Box::new(SortStepper::<insertion::InsertionSort>::new(input)?)
            }
            Algorithm::Merge => Box::new(SortStepper::<merge::MergeSort>::new(input)?),
            Algorithm::Quick => Box::new(SortStepper::<quick::QuickSort>::new(input)?),
            Algorithm::Heap => Box::new(SortStepper::<heap::HeapSort>::new(input)?),
        };
        Ok(stepper)
    }

    /// Next algorithm in registry order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in registry order, wrapping around
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `quick`, `Quick`, `quicksort`, `quick-sort`, `quick_sort`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = lowered
            .strip_suffix("sort")
            .unwrap_or(&lowered)
            .trim_end_matches(['-', '_', ' ']);

        Self::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| SortError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("QuickSort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("merge-sort".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert_eq!(" heap_sort ".parse::<Algorithm>().unwrap(), Algorithm::Heap);
        assert!(matches!(
            "bogo".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm { ref name }) if name == "bogo"
        ));
        assert!("sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_cycle_algorithms() {
        assert_eq!(Algorithm::Bubble.next(), Algorithm::Selection);
        assert_eq!(Algorithm::Heap.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Heap);
    }

    #[test]
    fn test_rejects_non_finite_input() {
        for algorithm in Algorithm::ALL {
            let err = algorithm.stepper(&[1.0, f64::NAN]).err().unwrap();
            assert!(matches!(err, SortError::InvalidInput { index: 1, .. }));

            let err = algorithm.stepper(&[f64::INFINITY]).err().unwrap();
            assert!(matches!(err, SortError::InvalidInput { index: 0, .. }));
        }
    }

    #[test]
    fn test_exhausted_after_done() {
        let mut stepper = Algorithm::Bubble.stepper(&[2.0, 1.0]).unwrap();
        loop {
            if stepper.advance().unwrap().is_done() {
                break;
            }
        }
        assert!(stepper.is_exhausted());
        assert!(matches!(
            stepper.advance(),
            Err(SortError::ExhaustedStepper {
                algorithm: Algorithm::Bubble
            })
        ));
    }

    #[test]
    fn test_short_inputs_yield_one_terminal_snapshot() {
        for algorithm in Algorithm::ALL {
            for input in [vec![], vec![7.0]] {
                let mut stepper = algorithm.stepper(&input).unwrap();
                let first = stepper.advance().unwrap();
                match first {
                    StepResult::Continuing(state) => {
                        assert!(state.is_terminal());
                        assert_eq!(state.array, input);
                        assert_eq!(state.metrics.comparisons, 0);
                        assert_eq!(state.metrics.swaps, 0);
                    }
                    StepResult::Done(_) => panic!("expected a terminal snapshot first"),
                }
                assert!(stepper.advance().unwrap().is_done());
            }
        }
    }
}

// Snapshots emitted by the steppers

use rustc_hash::FxHashSet;

/// Running comparison and swap totals for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Snapshot of a sort at one unit of progress
///
/// Every field is an owned copy of the stepper's working state, so a caller
/// that mutates a received snapshot cannot affect the run that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    pub array: Vec<f64>,
    pub comparing: Vec<usize>, // Empty or the two indices being compared
    pub swapped: Vec<usize>,   // Indices just written (one for merge placements)
    pub sorted: FxHashSet<usize>,
    pub pivot: Option<usize>,
    pub metrics: Counters,
}

impl StepState {
    /// A neutral frame over `array`: nothing highlighted, nothing counted
    pub fn idle(array: Vec<f64>) -> Self {
        StepState {
            array,
            comparing: Vec::new(),
            swapped: Vec::new(),
            sorted: FxHashSet::default(),
            pivot: None,
            metrics: Counters::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn is_sorted_index(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// Sorted indices in ascending order
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.sorted.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// True for the final snapshot of a run: everything sorted, nothing highlighted
    pub fn is_terminal(&self) -> bool {
        self.comparing.is_empty()
            && self.swapped.is_empty()
            && self.pivot.is_none()
            && self.sorted.len() == self.array.len()
    }
}

/// What a stepper hands back once it has nothing left to show
#[derive(Debug, Clone, PartialEq)]
pub struct FinalResult {
    pub array: Vec<f64>,
    pub comparisons: u64,
    pub swaps: u64,
}

/// Result of one `advance()` call
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    Continuing(StepState),
    Done(FinalResult),
}

impl StepResult {
    pub fn is_done(&self) -> bool {
        matches!(self, StepResult::Done(_))
    }
}

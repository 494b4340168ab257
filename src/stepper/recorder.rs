//! Working state shared by every algorithm
//!
//! A [`Recorder`] owns the run's private copy of the array, the set of
//! finalized indices, the counters and the current pivot. Algorithms never
//! touch the array directly for mutations: each compare/swap/placement/mark goes
//! through a method that updates the counters and returns the snapshot for
//! that unit of progress, which keeps counting and snapshotting in lockstep.

use crate::snapshot::{Counters, FinalResult, StepState};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone)]
pub struct Recorder {
    array: Vec<f64>,
    sorted: FxHashSet<usize>,
    counters: Counters,
    pivot: Option<usize>,
}

impl Recorder {
    pub fn new(array: Vec<f64>) -> Self {
        Recorder {
            array,
            sorted: FxHashSet::default(),
            counters: Counters::default(),
            pivot: None,
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn get(&self, index: usize) -> f64 {
        self.array[index]
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// Highlight `index` as the pivot in every following snapshot
    pub fn set_pivot(&mut self, pivot: Option<usize>) {
        self.pivot = pivot;
    }

    /// Count a comparison between `a` and `b` and snapshot it
    ///
    /// The caller evaluates the comparison after taking the snapshot.
    pub fn compare(&mut self, a: usize, b: usize) -> StepState {
        self.counters.comparisons += 1;
        self.snapshot(vec![a, b], Vec::new())
    }

    /// Exchange `a` and `b`, count it and snapshot the result
    pub fn swap(&mut self, a: usize, b: usize) -> StepState {
        self.array.swap(a, b);
        self.counters.swaps += 1;
        self.snapshot(Vec::new(), vec![a, b])
    }

    /// Move the value at `src` down to `dest`, shifting `dest..src` right
    /// by one; a merge placement, counted as one swap
    ///
    /// Every shifted index is reported as swapped.
    pub fn rotate_into(&mut self, dest: usize, src: usize) -> StepState {
        debug_assert!(dest <= src);
        self.array[dest..=src].rotate_right(1);
        self.counters.swaps += 1;
        self.snapshot(Vec::new(), (dest..=src).collect())
    }

    /// Count a merge placement of a value already at `index`
    pub fn settle(&mut self, index: usize) -> StepState {
        self.counters.swaps += 1;
        self.snapshot(Vec::new(), vec![index])
    }

    /// Mark `index` final and snapshot the grown sorted set
    pub fn mark_sorted(&mut self, index: usize) -> StepState {
        self.sorted.insert(index);
        self.snapshot(Vec::new(), Vec::new())
    }

    /// Mark every index in `start..end` final without taking a snapshot
    pub fn mark_range_sorted(&mut self, start: usize, end: usize) {
        self.sorted.extend(start..end);
    }

    /// Snapshot with nothing compared or exchanged
    pub fn plain(&self) -> StepState {
        self.snapshot(Vec::new(), Vec::new())
    }

    /// The terminal snapshot: every index sorted, no highlights
    pub fn conclude(&mut self) -> StepState {
        self.pivot = None;
        let len = self.array.len();
        self.mark_range_sorted(0, len);
        self.plain()
    }

    pub fn final_result(&self) -> FinalResult {
        FinalResult {
            array: self.array.clone(),
            comparisons: self.counters.comparisons,
            swaps: self.counters.swaps,
        }
    }

    fn snapshot(&self, comparing: Vec<usize>, swapped: Vec<usize>) -> StepState {
        StepState {
            array: self.array.clone(),
            comparing,
            swapped,
            sorted: self.sorted.clone(),
            pivot: self.pivot,
            metrics: self.counters,
        }
    }
}

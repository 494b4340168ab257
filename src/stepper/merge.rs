//! Top-down merge sort
//!
//! Pending work lives on an explicit stack of [`Task`]s: splitting a range
//! pushes its merge first and its halves after it, so the left half is
//! sorted, then the right half, then the two are merged, matching the
//! recursive order. One merge runs at a time through a [`MergeCursor`].
//!
//! Merging is done in place: taking the right head rotates it in front of
//! what is left of the left run, so every frame holds a permutation of the
//! input. Every element placed into the output range counts as a swap,
//! drained leftovers included. Ties take the left run, keeping the sort
//! stable.

use super::recorder::Recorder;
use super::{Algorithm, SortMachine};
use crate::snapshot::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergePhase {
    Compare,
    Place { take_left: bool },
    Drain,
}

/// Progress through one in-place merge of `left..=mid` with `mid+1..=right`
///
/// The left run always occupies `head..right_head` and the right run
/// `right_head..=right`; `left..head` is the merged output.
#[derive(Debug)]
struct MergeCursor {
    left: usize,
    right: usize,
    head: usize,
    right_head: usize,
    phase: MergePhase,
}

impl MergeCursor {
    fn new(left: usize, mid: usize, right: usize) -> Self {
        MergeCursor {
            left,
            right,
            head: left,
            right_head: mid + 1,
            phase: MergePhase::Compare,
        }
    }

    /// Next snapshot of this merge, or `None` once the output range is full
    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            match self.phase {
                MergePhase::Compare => {
                    if self.head < self.right_head && self.right_head <= self.right {
                        let state = rec.compare(self.head, self.right_head);
                        let take_left = rec.get(self.head) <= rec.get(self.right_head);
                        self.phase = MergePhase::Place { take_left };
                        return Some(state);
                    }
                    self.phase = MergePhase::Drain;
                }
                MergePhase::Place { take_left } => {
                    let state = if take_left {
                        rec.settle(self.head)
                    } else {
                        // Rotate the right head in front of the rest of the left run
                        let state = rec.rotate_into(self.head, self.right_head);
                        self.right_head += 1;
                        state
                    };
                    self.head += 1;
                    self.phase = MergePhase::Compare;
                    return Some(state);
                }
                MergePhase::Drain => {
                    // Whatever remains of either run is already in place
                    if self.head > self.right {
                        return None;
                    }
                    let state = rec.settle(self.head);
                    self.head += 1;
                    return Some(state);
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct MergeSort {
    len: usize,
    tasks: Vec<Task>,
    active: Option<MergeCursor>,
}

impl SortMachine for MergeSort {
    const ALGORITHM: Algorithm = Algorithm::Merge;

    fn new(len: usize) -> Self {
        MergeSort {
            len,
            tasks: vec![Task::Sort {
                left: 0,
                right: len.saturating_sub(1),
            }],
            active: None,
        }
    }

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            if let Some(cursor) = self.active.as_mut() {
                if let Some(state) = cursor.step(rec) {
                    return Some(state);
                }
                // The merge covering the whole array finalizes everything
                if cursor.left == 0 && cursor.right == self.len - 1 {
                    rec.mark_range_sorted(0, self.len);
                }
                self.active = None;
            }

            match self.tasks.pop()? {
                Task::Sort { left, right } => {
                    if left < right {
                        let mid = left + (right - left) / 2;
                        self.tasks.push(Task::Merge { left, mid, right });
                        self.tasks.push(Task::Sort {
                            left: mid + 1,
                            right,
                        });
                        self.tasks.push(Task::Sort { left, right: mid });
                    }
                }
                Task::Merge { left, mid, right } => {
                    self.active = Some(MergeCursor::new(left, mid, right));
                }
            }
        }
    }
}

//! Heapsort over a max-heap
//!
//! The sift-down only ever recurses as its last action, so it is kept as a
//! single [`SiftDown`] cursor that is re-aimed at the promoted child instead
//! of a stack of frames.

use super::recorder::Recorder;
use super::{Algorithm, SortMachine};
use crate::snapshot::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftPhase {
    Left,
    Right,
    Promote,
}

#[derive(Debug, Clone, Copy)]
struct SiftDown {
    root: usize,
    heap_size: usize,
    largest: usize,
    phase: SiftPhase,
}

impl SiftDown {
    fn new(root: usize, heap_size: usize) -> Self {
        SiftDown {
            root,
            heap_size,
            largest: root,
            phase: SiftPhase::Left,
        }
    }

    /// Compare `largest` against `child`, adopting the child if it is bigger
    fn challenge(&mut self, rec: &mut Recorder, child: usize) -> StepState {
        let state = rec.compare(self.largest, child);
        if rec.get(child) > rec.get(self.largest) {
            self.largest = child;
        }
        state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Sift-down of every internal node, last one first; `None` once done
    Build { next: Option<usize> },
    /// Move the root to `end`
    Extract { end: usize },
    /// Mark `end` final and re-heapify the rest
    Settle { end: usize },
    Finished,
}

#[derive(Debug)]
pub struct HeapSort {
    len: usize,
    stage: Stage,
    sift: Option<SiftDown>,
}

impl HeapSort {
    fn sift_step(sift: &mut SiftDown, rec: &mut Recorder) -> Option<StepState> {
        loop {
            match sift.phase {
                SiftPhase::Left => {
                    sift.phase = SiftPhase::Right;
                    let left = 2 * sift.root + 1;
                    if left < sift.heap_size {
                        return Some(sift.challenge(rec, left));
                    }
                }
                SiftPhase::Right => {
                    sift.phase = SiftPhase::Promote;
                    let right = 2 * sift.root + 2;
                    if right < sift.heap_size {
                        return Some(sift.challenge(rec, right));
                    }
                }
                SiftPhase::Promote => {
                    if sift.largest == sift.root {
                        return None;
                    }
                    let state = rec.swap(sift.root, sift.largest);
                    *sift = SiftDown::new(sift.largest, sift.heap_size);
                    return Some(state);
                }
            }
        }
    }
}

impl SortMachine for HeapSort {
    const ALGORITHM: Algorithm = Algorithm::Heap;

    fn new(len: usize) -> Self {
        HeapSort {
            len,
            stage: Stage::Build {
                next: (len / 2).checked_sub(1),
            },
            sift: None,
        }
    }

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(state) = Self::sift_step(sift, rec) {
                    return Some(state);
                }
                self.sift = None;
            }

            match self.stage {
                Stage::Build { next: Some(node) } => {
                    self.sift = Some(SiftDown::new(node, self.len));
                    self.stage = Stage::Build {
                        next: node.checked_sub(1),
                    };
                }
                Stage::Build { next: None } => {
                    self.stage = Stage::Extract { end: self.len - 1 };
                }
                Stage::Extract { end } => {
                    if end == 0 {
                        self.stage = Stage::Finished;
                        continue;
                    }
                    self.stage = Stage::Settle { end };
                    return Some(rec.swap(0, end));
                }
                Stage::Settle { end } => {
                    let state = rec.mark_sorted(end);
                    self.sift = Some(SiftDown::new(0, end));
                    self.stage = Stage::Extract { end: end - 1 };
                    return Some(state);
                }
                Stage::Finished => return None,
            }
        }
    }
}

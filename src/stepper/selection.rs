// Selection sort: scan for the minimum, swap it into place, mark the position

use super::recorder::Recorder;
use super::{Algorithm, SortMachine};
use crate::snapshot::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scan,
    Place,
    Mark,
    Finished,
}

#[derive(Debug)]
pub struct SelectionSort {
    len: usize,
    i: usize,
    j: usize,
    min_index: usize,
    phase: Phase,
}

impl SortMachine for SelectionSort {
    const ALGORITHM: Algorithm = Algorithm::Selection;

    fn new(len: usize) -> Self {
        SelectionSort {
            len,
            i: 0,
            j: 1,
            min_index: 0,
            phase: Phase::Scan,
        }
    }

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            match self.phase {
                Phase::Scan => {
                    if self.j < self.len {
                        let state = rec.compare(self.min_index, self.j);
                        if rec.get(self.j) < rec.get(self.min_index) {
                            self.min_index = self.j;
                        }
                        self.j += 1;
                        return Some(state);
                    }
                    self.phase = Phase::Place;
                }
                Phase::Place => {
                    self.phase = Phase::Mark;
                    if self.min_index != self.i {
                        return Some(rec.swap(self.i, self.min_index));
                    }
                }
                Phase::Mark => {
                    let state = rec.mark_sorted(self.i);
                    self.i += 1;
                    self.j = self.i + 1;
                    self.min_index = self.i;
                    self.phase = if self.i + 1 < self.len {
                        Phase::Scan
                    } else {
                        Phase::Finished
                    };
                    return Some(state);
                }
                Phase::Finished => return None,
            }
        }
    }
}

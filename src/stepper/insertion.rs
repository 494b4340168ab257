// Insertion sort: shift each element left while its neighbour is greater

use super::recorder::Recorder;
use super::{Algorithm, SortMachine};
use crate::snapshot::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Compare,
    Shift,
    Extend,
    Finished,
}

#[derive(Debug)]
pub struct InsertionSort {
    len: usize,
    i: usize,
    j: usize,
    phase: Phase,
}

impl SortMachine for InsertionSort {
    const ALGORITHM: Algorithm = Algorithm::Insertion;

    fn new(len: usize) -> Self {
        InsertionSort {
            len,
            i: 1,
            j: 1,
            phase: Phase::Start,
        }
    }

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            match self.phase {
                Phase::Start => {
                    // The first element alone is a sorted region
                    self.phase = Phase::Compare;
                    return Some(rec.mark_sorted(0));
                }
                Phase::Compare => {
                    if self.j > 0 {
                        let state = rec.compare(self.j - 1, self.j);
                        self.phase = if rec.get(self.j - 1) > rec.get(self.j) {
                            Phase::Shift
                        } else {
                            Phase::Extend
                        };
                        return Some(state);
                    }
                    self.phase = Phase::Extend;
                }
                Phase::Shift => {
                    let state = rec.swap(self.j - 1, self.j);
                    self.j -= 1;
                    self.phase = Phase::Compare;
                    return Some(state);
                }
                Phase::Extend => {
                    let state = rec.mark_sorted(self.i);
                    self.i += 1;
                    self.j = self.i;
                    self.phase = if self.i < self.len {
                        Phase::Compare
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StepResult;
    use crate::stepper::{SortStepper, Stepper};

    fn run(input: &[f64]) -> Vec<StepState> {
        let mut stepper = SortStepper::<InsertionSort>::new(input).unwrap();
        let mut states = Vec::new();
        while let StepResult::Continuing(state) = stepper.advance().unwrap() {
            states.push(state);
        }
        states
    }

    #[test]
    fn test_initial_region_is_first_element() {
        let states = run(&[2.0, 1.0]);
        assert_eq!(states[0].sorted_indices(), vec![0]);
        assert_eq!(states[0].metrics.comparisons, 0);
    }

    #[test]
    fn test_shift_walks_left() {
        let states = run(&[2.0, 3.0, 1.0]);
        let swaps: Vec<_> = states
            .iter()
            .filter(|s| !s.swapped.is_empty())
            .map(|s| s.swapped.clone())
            .collect();
        assert_eq!(swaps, vec![vec![1, 2], vec![0, 1]]);

        let last = states.last().unwrap();
        assert_eq!(last.array, vec![1.0, 2.0, 3.0]);
        assert_eq!(last.metrics.comparisons, 3);
    }

    #[test]
    fn test_stops_on_first_non_greater() {
        let states = run(&[1.0, 2.0, 3.0, 4.0]);
        let last = states.last().unwrap();
        assert_eq!(last.metrics.comparisons, 3);
        assert_eq!(last.metrics.swaps, 0);
    }
}

// Bubble sort: adjacent compare-and-swap passes, early exit on a clean pass

use super::recorder::Recorder;
use super::{Algorithm, SortMachine};
use crate::snapshot::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scan,
    Swap,
    EndPass,
    Finished,
}

#[derive(Debug)]
pub struct BubbleSort {
    len: usize,
    pass: usize,
    j: usize,
    swapped_this_pass: bool,
    phase: Phase,
}

impl SortMachine for BubbleSort {
    const ALGORITHM: Algorithm = Algorithm::Bubble;

    fn new(len: usize) -> Self {
        BubbleSort {
            len,
            pass: 0,
            j: 0,
            swapped_this_pass: false,
            phase: Phase::Scan,
        }
    }

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            match self.phase {
                Phase::Scan => {
                    // Last index of the unsorted prefix for this pass
                    let last = self.len - self.pass - 1;
                    if self.j < last {
                        let j = self.j;
                        let state = rec.compare(j, j + 1);
                        if rec.get(j) > rec.get(j + 1) {
                            self.phase = Phase::Swap;
                        } else {
                            self.j += 1;
                        }
                        return Some(state);
                    }
                    self.phase = Phase::EndPass;
                }
                Phase::Swap => {
                    let state = rec.swap(self.j, self.j + 1);
                    self.swapped_this_pass = true;
                    self.j += 1;
                    self.phase = Phase::Scan;
                    return Some(state);
                }
                Phase::EndPass => {
                    let last = self.len - self.pass - 1;
                    let state = rec.mark_sorted(last);

                    if !self.swapped_this_pass {
                        rec.mark_range_sorted(0, last);
                        self.phase = Phase::Finished;
                    } else {
                        self.pass += 1;
                        self.j = 0;
                        self.swapped_this_pass = false;
                        self.phase = if self.pass + 1 < self.len {
                            Phase::Scan
                        } else {
                            Phase::Finished
                        };
                    }
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
        let mut stepper = SortStepper::<BubbleSort>::new(input).unwrap();
        let mut states = Vec::new();
        while let StepResult::Continuing(state) = stepper.advance().unwrap() {
            states.push(state);
        }
        states
    }

    #[test]
    fn test_first_steps() {
        let states = run(&[5.0, 3.0, 8.0, 1.0]);

        assert_eq!(states[0].comparing, vec![0, 1]);
        assert_eq!(states[0].metrics.comparisons, 1);
        assert_eq!(states[1].swapped, vec![0, 1]);
        assert_eq!(states[1].array, vec![3.0, 5.0, 8.0, 1.0]);
        assert_eq!(states[1].metrics.swaps, 1);

        let last = states.last().unwrap();
        assert_eq!(last.array, vec![1.0, 3.0, 5.0, 8.0]);
        assert_eq!(last.metrics.comparisons, 6);
        assert_eq!(last.metrics.swaps, 4);
        assert_eq!(last.sorted_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_early_exit_on_sorted_input() {
        let states = run(&[1.0, 2.0, 3.0, 4.0]);

        // Three comparisons, the pass-end mark, then the terminal snapshot
        assert_eq!(states.len(), 5);
        assert_eq!(states[3].sorted_indices(), vec![3]);
        assert_eq!(states[4].metrics.comparisons, 3);
        assert_eq!(states[4].metrics.swaps, 0);
        assert!(states[4].is_terminal());
    }

    #[test]
    fn test_equal_values_never_swap() {
        let states = run(&[2.0, 2.0, 2.0]);
        assert!(states.iter().all(|s| s.swapped.is_empty()));
    }
}

//! Quicksort with a Lomuto partition around the last element
//!
//! Sub-ranges wait on an explicit stack; the right half is pushed before the
//! left so the left half is partitioned first. A range of one element is
//! marked sorted without any comparison. Empty ranges are never pushed.

use super::recorder::Recorder;
use super::{Algorithm, SortMachine};
use crate::snapshot::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartitionPhase {
    Announce,
    Scan,
    Exchange,
    PlacePivot,
    Settle,
}

/// One partition of `low..=high` in progress
#[derive(Debug)]
struct Partition {
    low: usize,
    high: usize,
    pivot_value: f64,
    /// Next slot of the less-than region
    store: usize,
    j: usize,
    phase: PartitionPhase,
}

#[derive(Debug)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSort {
    /// Advance the active partition by one snapshot
    fn partition_step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        let part = self.active.as_mut()?;
        loop {
            match part.phase {
                PartitionPhase::Announce => {
                    rec.set_pivot(Some(part.high));
                    part.phase = PartitionPhase::Scan;
                    return Some(rec.plain());
                }
                PartitionPhase::Scan => {
                    if part.j < part.high {
                        let state = rec.compare(part.j, part.high);
                        if rec.get(part.j) < part.pivot_value {
                            part.phase = PartitionPhase::Exchange;
                        } else {
                            part.j += 1;
                        }
                        return Some(state);
                    }
                    part.phase = PartitionPhase::PlacePivot;
                }
                PartitionPhase::Exchange => {
                    let (target, source) = (part.store, part.j);
                    part.store += 1;
                    part.j += 1;
                    part.phase = PartitionPhase::Scan;
                    if target != source {
                        return Some(rec.swap(target, source));
                    }
                }
                PartitionPhase::PlacePivot => {
                    part.phase = PartitionPhase::Settle;
                    if part.store != part.high {
                        rec.set_pivot(Some(part.store));
                        return Some(rec.swap(part.store, part.high));
                    }
                }
                PartitionPhase::Settle => {
                    let (low, high, pivot) = (part.low, part.high, part.store);
                    rec.set_pivot(None);
                    let state = rec.mark_sorted(pivot);

                    self.active = None;
                    if pivot < high {
                        self.ranges.push((pivot + 1, high));
                    }
                    if pivot > low {
                        self.ranges.push((low, pivot - 1));
                    }
                    return Some(state);
                }
            }
        }
    }
}

impl SortMachine for QuickSort {
    const ALGORITHM: Algorithm = Algorithm::Quick;

    fn new(len: usize) -> Self {
        QuickSort {
            ranges: vec![(0, len.saturating_sub(1))],
            active: None,
        }
    }

    fn step(&mut self, rec: &mut Recorder) -> Option<StepState> {
        loop {
            if self.active.is_some() {
                return self.partition_step(rec);
            }

            let (low, high) = self.ranges.pop()?;
            if low < high {
                self.active = Some(Partition {
                    low,
                    high,
                    pivot_value: rec.get(high),
                    store: low,
                    j: low,
                    phase: PartitionPhase::Announce,
                });
            } else if !rec.is_sorted(low) {
                return Some(rec.mark_sorted(low));
            }
        }
    }
}

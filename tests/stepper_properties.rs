// Property tests for the algorithm steppers

use proptest::prelude::*;
use sortty::errors::SortError;
use sortty::snapshot::{FinalResult, StepResult, StepState};
use sortty::stepper::Algorithm;

/// Drain a fresh stepper, returning every snapshot and the final result
fn run(algorithm: Algorithm, input: &[f64]) -> (Vec<StepState>, FinalResult) {
    let mut stepper = algorithm.stepper(input).expect("valid input");
    let mut states = Vec::new();
    loop {
        match stepper.advance().expect("stepper should not fail mid-run") {
            StepResult::Continuing(state) => states.push(state),
            StepResult::Done(result) => return (states, result),
        }
    }
}

/// Comparison and swap totals of a plain implementation with the same rules
fn reference_counts(algorithm: Algorithm, input: &[f64]) -> (u64, u64) {
    let mut a = input.to_vec();
    let mut counts = (0, 0);
    if a.len() < 2 {
        return counts;
    }
    match algorithm {
        Algorithm::Bubble => bubble(&mut a, &mut counts),
        Algorithm::Selection => selection(&mut a, &mut counts),
        Algorithm::Insertion => insertion(&mut a, &mut counts),
        Algorithm::Merge => {
            let right = a.len() - 1;
            merge_sort(&mut a, 0, right, &mut counts)
        }
        Algorithm::Quick => {
            let high = a.len() - 1;
            quick_sort(&mut a, 0, high, &mut counts)
        }
        Algorithm::Heap => heap_sort(&mut a, &mut counts),
    }
    counts
}

fn bubble(a: &mut [f64], (cmp, swp): &mut (u64, u64)) {
    let n = a.len();
    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            *cmp += 1;
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                *swp += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

fn selection(a: &mut [f64], (cmp, swp): &mut (u64, u64)) {
    let n = a.len();
    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            *cmp += 1;
            if a[j] < a[min] {
                min = j;
            }
        }
        if min != i {
            a.swap(i, min);
            *swp += 1;
        }
    }
}

fn insertion(a: &mut [f64], (cmp, swp): &mut (u64, u64)) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 {
            *cmp += 1;
            if a[j - 1] > a[j] {
                a.swap(j - 1, j);
                *swp += 1;
                j -= 1;
            } else {
                break;
            }
        }
    }
}

fn merge_sort(a: &mut [f64], left: usize, right: usize, counts: &mut (u64, u64)) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort(a, left, mid, counts);
    merge_sort(a, mid + 1, right, counts);

    let left_run = a[left..=mid].to_vec();
    let right_run = a[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        counts.0 += 1;
        if left_run[i] <= right_run[j] {
            a[k] = left_run[i];
            i += 1;
        } else {
            a[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }
    for &v in left_run[i..].iter().chain(&right_run[j..]) {
        a[k] = v;
        k += 1;
    }
    counts.1 += (right - left + 1) as u64;
}

fn quick_sort(a: &mut [f64], low: usize, high: usize, counts: &mut (u64, u64)) {
    if low >= high {
        return;
    }
    let pivot = a[high];
    let mut store = low;
    for j in low..high {
        counts.0 += 1;
        if a[j] < pivot {
            if store != j {
                a.swap(store, j);
                counts.1 += 1;
            }
            store += 1;
        }
    }
    if store != high {
        a.swap(store, high);
        counts.1 += 1;
    }
    if store > low {
        quick_sort(a, low, store - 1, counts);
    }
    quick_sort(a, store + 1, high, counts);
}

fn sift_down(a: &mut [f64], mut root: usize, size: usize, counts: &mut (u64, u64)) {
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < size {
                counts.0 += 1;
                if a[child] > a[largest] {
                    largest = child;
                }
            }
        }
        if largest == root {
            return;
        }
        a.swap(root, largest);
        counts.1 += 1;
        root = largest;
    }
}

fn heap_sort(a: &mut [f64], counts: &mut (u64, u64)) {
    let n = a.len();
    for node in (0..n / 2).rev() {
        sift_down(a, node, n, counts);
    }
    for end in (1..n).rev() {
        a.swap(0, end);
        counts.1 += 1;
        sift_down(a, 0, end, counts);
    }
}

fn sorted_copy(input: &[f64]) -> Vec<f64> {
    let mut expected = input.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).expect("finite values"));
    expected
}

/// Values in ascending bit order, for exact multiset comparison
fn multiset(values: &[f64]) -> Vec<u64> {
    let mut bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
    bits.sort_unstable();
    bits
}

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop_oneof![
        // Small integers, so duplicates are common
        prop::collection::vec((-20i32..20).prop_map(f64::from), 0..40),
        prop::collection::vec(-1.0e6f64..1.0e6, 0..40),
    ]
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

#[test]
fn test_bubble_example_run() {
    let (states, result) = run(Algorithm::Bubble, &[5.0, 3.0, 8.0, 1.0]);
    assert_eq!(result.array, vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(result.comparisons, 6);
    assert_eq!(result.swaps, 4);
    assert!(states.last().expect("at least one snapshot").is_terminal());
}

#[test]
fn test_short_inputs_yield_single_terminal_snapshot() {
    for &algorithm in Algorithm::ALL.iter() {
        for input in [vec![], vec![42.0]] {
            let (states, result) = run(algorithm, &input);
            assert_eq!(states.len(), 1, "{algorithm} on {input:?}");
            assert!(states[0].is_terminal());
            assert_eq!(result.array, input);
            assert_eq!((result.comparisons, result.swaps), (0, 0));
        }
    }
}

#[test]
fn test_sorted_input_bubble_is_linear() {
    let input: Vec<f64> = (1..=10).map(f64::from).collect();
    let (_, result) = run(Algorithm::Bubble, &input);
    assert_eq!(result.comparisons, 9);
    assert_eq!(result.swaps, 0);
}

#[test]
fn test_advance_after_done_fails() {
    for &algorithm in Algorithm::ALL.iter() {
        let mut stepper = algorithm.stepper(&[2.0, 1.0]).expect("valid input");
        while !stepper.advance().expect("mid-run").is_done() {}
        assert!(stepper.is_exhausted());
        let err = stepper.advance().expect_err("exhausted stepper");
        assert!(matches!(err, SortError::ExhaustedStepper { algorithm: a } if a == algorithm));
        assert!(err.is_programming_error());
    }
}

#[test]
fn test_non_finite_input_rejected() {
    for &algorithm in Algorithm::ALL.iter() {
        assert!(matches!(
            algorithm.stepper(&[1.0, f64::INFINITY]),
            Err(SortError::InvalidInput { index: 1, .. })
        ));
    }
}

#[test]
fn test_snapshots_are_independent_copies() {
    let mut stepper = Algorithm::Selection
        .stepper(&[3.0, 2.0, 1.0])
        .expect("valid input");
    let StepResult::Continuing(mut first) = stepper.advance().expect("first step") else {
        panic!("expected a snapshot");
    };
    first.array[0] = 99.0;
    first.sorted.insert(2);

    let StepResult::Continuing(second) = stepper.advance().expect("second step") else {
        panic!("expected a snapshot");
    };
    assert_eq!(second.array[0], 3.0);
    assert!(!second.is_sorted_index(2));
}

#[test]
fn test_merge_frames_are_permutations() {
    let input = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0, 7.0];
    let expected = multiset(&input);
    let (states, _) = run(Algorithm::Merge, &input);
    for (k, state) in states.iter().enumerate() {
        assert_eq!(multiset(&state.array), expected, "frame {k}: {:?}", state.array);
    }
}

proptest! {
    #[test]
    fn prop_output_is_sorted_permutation(algorithm in algorithm(), input in values()) {
        let (states, result) = run(algorithm, &input);
        let expected = sorted_copy(&input);

        prop_assert_eq!(&result.array, &expected);
        let last = states.last().expect("at least one snapshot");
        prop_assert_eq!(&last.array, &expected);
        prop_assert!(last.is_terminal());
        prop_assert_eq!(last.metrics.comparisons, result.comparisons);
        prop_assert_eq!(last.metrics.swaps, result.swaps);
    }

    #[test]
    fn prop_counts_match_reference(algorithm in algorithm(), input in values()) {
        let (_, result) = run(algorithm, &input);
        prop_assert_eq!(
            (result.comparisons, result.swaps),
            reference_counts(algorithm, &input),
            "{} on {:?}", algorithm, input
        );
    }

    #[test]
    fn prop_each_snapshot_is_one_unit_of_work(algorithm in algorithm(), input in values()) {
        let (states, _) = run(algorithm, &input);
        let mut prev = states[0].metrics;
        let mut prev_sorted = states[0].sorted.clone();

        for state in &states {
            let dc = state.metrics.comparisons - prev.comparisons;
            let ds = state.metrics.swaps - prev.swaps;
            prop_assert!(dc + ds <= 1);
            if !state.comparing.is_empty() {
                prop_assert_eq!(state.comparing.len(), 2);
            }
            prop_assert!(state.comparing.iter().chain(&state.swapped).all(|&i| i < state.len()));
            prop_assert!(prev_sorted.is_subset(&state.sorted));
            prop_assert_eq!(state.len(), input.len());

            prev = state.metrics;
            prev_sorted = state.sorted.clone();
        }
    }

    #[test]
    fn prop_runs_are_deterministic(algorithm in algorithm(), input in values()) {
        let (first, _) = run(algorithm, &input);
        let (second, _) = run(algorithm, &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_frames_permute_and_report_changes(algorithm in algorithm(), input in values()) {
        let (states, _) = run(algorithm, &input);
        let expected = multiset(&input);
        let mut prev: &[f64] = &input;

        for (k, state) in states.iter().enumerate() {
            prop_assert_eq!(multiset(&state.array), expected.clone(), "frame {}", k);
            for (i, (before, after)) in prev.iter().zip(&state.array).enumerate() {
                if before.to_bits() != after.to_bits() {
                    prop_assert!(
                        state.swapped.contains(&i),
                        "{} frame {}: index {} changed but swapped = {:?}",
                        algorithm, k, i, state.swapped
                    );
                }
            }
            prev = &state.array;
        }
    }
}

//! Top-down merge sort, one step per completed merge

use super::Comparator;
use crate::snapshot::{StepSequence, Value};

/// Record a step after each pair of sorted runs is merged back in place
pub fn record(values: &[Value], cmp: Comparator) -> StepSequence {
    let mut work = values.to_vec();
    let mut steps = StepSequence::new();
    if work.len() > 1 {
        let right = work.len() - 1;
        sort_range(&mut work, 0, right, cmp, &mut steps);
    }
    steps
}

/// Sort `work[left..=right]`
fn sort_range(
    work: &mut [Value],
    left: usize,
    right: usize,
    cmp: Comparator,
    steps: &mut StepSequence,
) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(work, left, mid, cmp, steps);
    sort_range(work, mid + 1, right, cmp, steps);
    merge(work, left, mid, right, cmp);
    steps.record(work);
}

/// Merge sorted runs `work[left..=mid]` and `work[mid+1..=right]`.
/// Ties take from the left run.
fn merge(work: &mut [Value], left: usize, mid: usize, right: usize, cmp: Comparator) {
    let left_run = work[left..=mid].to_vec();
    let right_run = work[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        if cmp.keeps_left(left_run[i], right_run[j]) {
            work[k] = left_run[i];
            i += 1;
        } else {
            work[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }

    for &v in left_run[i..].iter().chain(&right_run[j..]) {
        work[k] = v;
        k += 1;
    }
}

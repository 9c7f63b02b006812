//! Quick sort with a Lomuto partition, one step per partition

use super::Comparator;
use crate::snapshot::{StepSequence, Value};

/// Record a step after each partition places its pivot
pub fn record(values: &[Value], cmp: Comparator) -> StepSequence {
    let mut work = values.to_vec();
    let mut steps = StepSequence::new();
    if work.len() > 1 {
        let high = work.len() - 1;
        sort_range(&mut work, 0, high, cmp, &mut steps);
    }
    steps
}

/// Sort `work[low..=high]`
fn sort_range(
    work: &mut [Value],
    low: usize,
    high: usize,
    cmp: Comparator,
    steps: &mut StepSequence,
) {
    if low >= high {
        return;
    }
    let pivot = partition(work, low, high, cmp);
    steps.record(work);

    if pivot > low {
        sort_range(work, low, pivot - 1, cmp, steps);
    }
    sort_range(work, pivot + 1, high, cmp, steps);
}

/// Partition around `work[high]` and return the pivot's final index.
/// Values equal to the pivot go to the low side.
fn partition(work: &mut [Value], low: usize, high: usize, cmp: Comparator) -> usize {
    let pivot = work[high];
    // Next slot for a value that belongs before the pivot
    let mut store = low;
    for j in low..high {
        if cmp.keeps_left(work[j], pivot) {
            work.swap(store, j);
            store += 1;
        }
    }
    work.swap(store, high);
    store
}

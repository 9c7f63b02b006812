//! Bubble sort, one step per comparison

use super::Comparator;
use crate::snapshot::{StepSequence, Value};

/// Record a step after every adjacent comparison, whether or not it swapped
pub fn record(values: &[Value], cmp: Comparator) -> StepSequence {
    let mut work = values.to_vec();
    let mut steps = StepSequence::new();
    let n = work.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            if cmp.out_of_order(work[j], work[j + 1]) {
                work.swap(j, j + 1);
            }
            steps.record(&work);
        }
    }

    steps
}

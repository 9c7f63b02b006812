//! Insertion sort, one step per inserted element

use super::Comparator;
use crate::snapshot::{StepSequence, Value};

/// Record a step once each element has been shifted into the sorted prefix
pub fn record(values: &[Value], cmp: Comparator) -> StepSequence {
    let mut work = values.to_vec();
    let mut steps = StepSequence::new();

    for i in 1..work.len() {
        let current = work[i];
        let mut j = i;
        while j > 0 && cmp.out_of_order(work[j - 1], current) {
            work[j] = work[j - 1];
            j -= 1;
        }
        work[j] = current;
        steps.record(&work);
    }

    steps
}

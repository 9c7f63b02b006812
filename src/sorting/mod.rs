//! Step-recording sort variants
//!
//! Each variant copies its input, sorts the copy, and records a [`Step`]
//! at its own granularity:
//!
//! | Algorithm | Step recorded after | Steps for `n` elements |
//! |---|---|---|
//! | [`bubble`] | every inner comparison | `n(n-1)/2` |
//! | [`insertion`] | each outer insertion | `n-1` |
//! | [`merge`] | each merge of two runs | `n-1` |
//! | [`quick`] | each partition | at most `n-1` |
//!
//! The last recorded step is always the fully sorted array. Inputs of
//! length 0 or 1 produce no steps.
//!
//! [`Step`]: crate::snapshot::Step

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

use crate::config::Algorithm;
use crate::snapshot::{StepSequence, Value};

/// Direction-aware comparisons shared by all variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    ascending: bool,
}

impl Comparator {
    pub fn new(ascending: bool) -> Self {
        Comparator { ascending }
    }

    /// `a` must move past `b` (strict: equal values never swap)
    pub fn out_of_order(self, a: Value, b: Value) -> bool {
        if self.ascending {
            a > b
        } else {
            a < b
        }
    }

    /// `a` may stay ahead of `b` (inclusive: ties favor `a`)
    pub fn keeps_left(self, a: Value, b: Value) -> bool {
        if self.ascending {
            a <= b
        } else {
            a >= b
        }
    }

    /// True if `values` is ordered in this direction
    pub fn is_sorted(self, values: &[Value]) -> bool {
        values.windows(2).all(|w| self.keeps_left(w[0], w[1]))
    }
}

/// Run `algorithm` over a private copy of `values` and return its steps
pub fn record_steps(algorithm: Algorithm, values: &[Value], ascending: bool) -> StepSequence {
    let cmp = Comparator::new(ascending);
    let steps = match algorithm {
        Algorithm::BubbleSort => bubble::record(values, cmp),
        Algorithm::InsertionSort => insertion::record(values, cmp),
        Algorithm::MergeSort => merge::record(values, cmp),
        Algorithm::QuickSort => quick::record(values, cmp),
    };
    tracing::debug!(
        algorithm = algorithm.name(),
        ascending,
        len = values.len(),
        steps = steps.len(),
        bytes = steps.memory_usage(),
        "recorded sort steps"
    );
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_directions() {
        let asc = Comparator::new(true);
        assert!(asc.out_of_order(5, 3));
        assert!(!asc.out_of_order(3, 3));
        assert!(asc.keeps_left(3, 3));
        assert!(asc.keeps_left(2, 3));

        let desc = Comparator::new(false);
        assert!(desc.out_of_order(3, 5));
        assert!(!desc.out_of_order(3, 3));
        assert!(desc.keeps_left(3, 3));
        assert!(desc.keeps_left(5, 3));
        assert!(!desc.keeps_left(3, 5));
    }

    #[test]
    fn test_is_sorted() {
        assert!(Comparator::new(true).is_sorted(&[1, 1, 2, 9]));
        assert!(!Comparator::new(true).is_sorted(&[2, 1]));
        assert!(Comparator::new(false).is_sorted(&[9, 2, 2, 0]));
        assert!(Comparator::new(false).is_sorted(&[]));
    }

    #[test]
    fn test_every_algorithm_handles_tiny_inputs() {
        for algorithm in Algorithm::ALL {
            for ascending in [true, false] {
                assert!(record_steps(algorithm, &[], ascending).is_empty());
                assert!(record_steps(algorithm, &[42], ascending).is_empty());
            }
        }
    }

    #[test]
    fn test_dispatch_final_step_sorted() {
        let input = [7, 3, 3, 9, 0, 12, 5];
        for algorithm in Algorithm::ALL {
            let asc = record_steps(algorithm, &input, true);
            assert_eq!(asc.last().unwrap().values(), &[0, 3, 3, 5, 7, 9, 12]);
            let desc = record_steps(algorithm, &input, false);
            assert_eq!(desc.last().unwrap().values(), &[12, 9, 7, 5, 3, 3, 0]);
        }
    }
}

// Step history recorded while sorting

use rustc_hash::FxHashMap;
use std::mem::size_of;

/// Element type of the visualized array
pub type Value = u32;

/// Full copy of the array at one point during a sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    values: Box<[Value]>,
}

impl Step {
    pub fn capture(values: &[Value]) -> Self {
        Step {
            values: values.into(),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        size_of::<Step>() + self.values.len() * size_of::<Value>()
    }
}

/// Ordered steps produced by one sort run
#[derive(Debug, Clone, Default)]
pub struct StepSequence {
    steps: Vec<Step>,
    current_memory: usize,
}

impl StepSequence {
    pub fn new() -> Self {
        StepSequence::default()
    }

    /// Record the current state of `values`
    pub fn record(&mut self, values: &[Value]) {
        let step = Step::capture(values);
        self.current_memory += step.estimated_size();
        self.steps.push(step);
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Approximate bytes held by recorded steps
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// True if every step holds exactly the multiset of values in `original`
    pub fn preserves_values(&self, original: &[Value]) -> bool {
        let expected = value_counts(original);
        self.steps
            .iter()
            .all(|step| step.len() == original.len() && value_counts(step.values()) == expected)
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

fn value_counts(values: &[Value]) -> FxHashMap<Value, usize> {
    let mut counts = FxHashMap::default();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_copies_state() {
        let mut seq = StepSequence::new();
        let mut values = vec![3, 1, 2];
        seq.record(&values);
        values.swap(0, 1);
        seq.record(&values);

        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(0).unwrap().values(), &[3, 1, 2]);
        assert_eq!(seq.last().unwrap().values(), &[1, 3, 2]);
        assert!(seq.get(2).is_none());
    }

    #[test]
    fn test_memory_usage_grows_per_step() {
        let mut seq = StepSequence::new();
        assert_eq!(seq.memory_usage(), 0);
        seq.record(&[1, 2, 3, 4]);
        let one = seq.memory_usage();
        assert!(one >= 4 * size_of::<Value>());
        seq.record(&[4, 3, 2, 1]);
        assert_eq!(seq.memory_usage(), one * 2);
    }

    #[test]
    fn test_preserves_values_detects_changed_multiset() {
        let original = [5, 5, 1];
        let mut seq = StepSequence::new();
        seq.record(&[1, 5, 5]);
        assert!(seq.preserves_values(&original));

        seq.record(&[1, 1, 5]);
        assert!(!seq.preserves_values(&original));
    }

    #[test]
    fn test_preserves_values_rejects_length_change() {
        let mut seq = StepSequence::new();
        seq.record(&[1, 2]);
        assert!(!seq.preserves_values(&[1, 2, 2]));
    }

    #[test]
    fn test_empty_sequence_trivially_preserves() {
        assert!(StepSequence::new().preserves_values(&[9, 8, 7]));
    }
}

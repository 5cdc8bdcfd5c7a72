// Bubble sort: adjacent compare-and-swap passes

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;

/// Pass index `i` and inner index `j`
#[derive(Debug, Clone, Default)]
pub struct BubbleState {
    i: usize,
    j: usize,
}

impl BubbleState {
    pub fn new() -> Self {
        BubbleState::default()
    }
}

impl<T: SortKey> Stepper<T> for BubbleState {
    fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome {
        let len = array.len();
        if self.i >= len {
            return StepOutcome::finished("Bubble Sort complete. Array is sorted.");
        }

        let j = self.j;
        if j + 1 < len - self.i {
            let (a, b) = (array[j], array[j + 1]);
            let message = if a > b {
                array.swap(j, j + 1);
                format!("Comparing positions {j} and {} ({a} vs {b}). Swap: {a} > {b}.", j + 1)
            } else {
                format!("Comparing positions {j} and {} ({a} vs {b}). No swap: {a} <= {b}.", j + 1)
            };
            self.j += 1;
            return StepOutcome::new(message).primary(j).secondary(j + 1);
        }

        // Inner scan exhausted: the largest remaining value has bubbled up
        let settled = len - 1 - self.i;
        sorted.insert(settled);
        self.i += 1;
        self.j = 0;
        StepOutcome::new(format!(
            "Pass {} complete. Largest element settled at position {settled}.",
            self.i
        ))
        .primary(settled)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sort;
    use crate::engine::algorithm::Algorithm;

    #[test]
    fn test_first_step_swaps() {
        let (array, outcomes) = sort(Algorithm::Bubble, &[5, 3, 4, 1, 2]);
        assert_eq!(array, vec![1, 2, 3, 4, 5]);

        let first = &outcomes[0];
        assert_eq!((first.primary, first.secondary), (Some(0), Some(1)));
        assert!(first.message.contains("(5 vs 3)"));
        assert!(first.message.contains("Swap"));
    }

    #[test]
    fn test_step_count() {
        // n(n-1)/2 comparisons, n pass completions, one finishing step
        let (_, outcomes) = sort(Algorithm::Bubble, &[4, 3, 2, 1]);
        assert_eq!(outcomes.len(), 6 + 4 + 1);
    }

    #[test]
    fn test_equal_values_never_swap() {
        let (_, outcomes) = sort(Algorithm::Bubble, &[2, 2]);
        assert!(outcomes[0].message.contains("No swap"));
    }
}

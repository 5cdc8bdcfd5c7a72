// Selection sort: scan for the minimum, swap it into place

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;

/// Outer index `i`, scan index `j`, and the minimum seen so far
#[derive(Debug, Clone)]
pub struct SelectionState {
    i: usize,
    j: usize,
    min_index: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState {
            i: 0,
            j: 1,
            min_index: 0,
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SortKey> Stepper<T> for SelectionState {
    fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome {
        let len = array.len();
        if self.i + 1 >= len {
            return StepOutcome::finished("Selection Sort complete. Array is sorted.");
        }

        if self.j < len {
            let (j, min) = (self.j, self.min_index);
            let mut message = format!(
                "Comparing index {j} ({}) with current min index {min} ({})",
                array[j], array[min]
            );
            // Strict comparison: the first of several equal minima wins
            if array[j] < array[min] {
                self.min_index = j;
                message.push_str(&format!(". New minimum found at index {j} ({})", array[j]));
            }
            self.j += 1;
            return StepOutcome::new(message).primary(min).secondary(j);
        }

        let (i, min) = (self.i, self.min_index);
        let message = if min != i {
            array.swap(i, min);
            format!(
                "Swapping index {i} ({}) with min index {min} ({})",
                array[min], array[i]
            )
        } else {
            format!("No swap needed for index {i}")
        };
        sorted.insert(i);
        self.i += 1;
        self.j = self.i + 1;
        self.min_index = self.i;
        StepOutcome::new(message).primary(i).secondary(min)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sort;
    use crate::engine::algorithm::Algorithm;

    #[test]
    fn test_sorts_with_duplicates() {
        let (array, _) = sort(Algorithm::Selection, &[3, 1, 3, 0, 1]);
        assert_eq!(array, vec![0, 1, 1, 3, 3]);
    }

    #[test]
    fn test_first_minimum_wins() {
        let (_, outcomes) = sort(Algorithm::Selection, &[2, 1, 1]);
        // Index 1 becomes the minimum; index 2 ties and must not replace it
        assert!(outcomes[0].message.contains("New minimum found at index 1"));
        assert!(!outcomes[1].message.contains("New minimum"));
        assert!(outcomes[2].message.contains("Swapping index 0"));
        assert_eq!(outcomes[2].secondary, Some(1));
    }

    #[test]
    fn test_skips_swap_when_in_place() {
        let (_, outcomes) = sort(Algorithm::Selection, &[1, 3, 2]);
        assert!(outcomes[2].message.contains("No swap needed for index 0"));
    }
}

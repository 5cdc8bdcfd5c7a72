// Quick sort with an explicit range stack and Lomuto partitioning

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::{RenderState, Zone};

/// A partition in progress over `left..=right`, pivot taken from `right`
#[derive(Debug, Clone)]
struct Partition<T> {
    left: usize,
    right: usize,
    pivot: T,
    /// Next slot for an element smaller than the pivot
    store: usize,
    scan: usize,
}

#[derive(Debug, Clone)]
pub struct QuickState<T> {
    /// Pending `(left, right)` ranges, inclusive; replaces the call stack
    stack: Vec<(usize, usize)>,
    partition: Option<Partition<T>>,
}

impl<T: SortKey> QuickState<T> {
    pub fn new(len: usize) -> Self {
        let stack = match len {
            0 => Vec::new(),
            _ => vec![(0, len - 1)],
        };
        QuickState {
            stack,
            partition: None,
        }
    }
}

impl<T: SortKey> Stepper<T> for QuickState<T> {
    fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome {
        if let Some(partition) = &mut self.partition {
            let (scan, right, pivot) = (partition.scan, partition.right, partition.pivot);

            if scan < right {
                let value = array[scan];
                let store = partition.store;
                partition.scan += 1;
                if value < pivot {
                    array.swap(store, scan);
                    partition.store += 1;
                    return StepOutcome::new(format!(
                        "Comparing {value} with pivot {pivot}: smaller, swapped indices {store} and {scan}"
                    ))
                    .primary(scan)
                    .secondary(store)
                    .pivot(right);
                }
                return StepOutcome::new(format!("Comparing {value} with pivot {pivot}: not smaller"))
                    .primary(scan)
                    .pivot(right);
            }

            let (left, store) = (partition.left, partition.store);
            array.swap(store, right);
            sorted.insert(store);
            // Left range is pushed first so the right range is partitioned next
            if store > left {
                self.stack.push((left, store - 1));
            }
            if store < right {
                self.stack.push((store + 1, right));
            }
            self.partition = None;
            return StepOutcome::new(format!("Placed pivot {pivot} at index {store}")).pivot(store);
        }

        while let Some((left, right)) = self.stack.pop() {
            if left < right {
                let pivot = array[right];
                self.partition = Some(Partition {
                    left,
                    right,
                    pivot,
                    store: left,
                    scan: left,
                });
                return StepOutcome::new(format!(
                    "Partitioning from {left} to {right} with pivot {pivot}"
                ))
                .pivot(right);
            }
            // A single element range is already in its final position
            sorted.insert(left);
        }

        StepOutcome::finished("Quick Sort complete. Array is sorted.")
    }

    fn render_state(&self) -> RenderState {
        RenderState::Quick {
            range: self
                .partition
                .as_ref()
                .map(|partition| Zone::new(partition.left, partition.right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sort;
    use super::*;
    use crate::engine::algorithm::Algorithm;

    #[test]
    fn test_first_partition_uses_rightmost_pivot() {
        let (array, outcomes) = sort(Algorithm::Quick, &[3, 7, 1, 5]);
        assert_eq!(array, vec![1, 3, 5, 7]);
        assert_eq!(outcomes[0].message, "Partitioning from 0 to 3 with pivot 5");
        assert_eq!(outcomes[0].pivot, Some(3));
    }

    #[test]
    fn test_pivots_are_certified() {
        let mut array = vec![4i64, 1, 3, 2];
        let mut sorted = SortedSet::new();
        let mut state = QuickState::new(array.len());

        // Partition [0, 3] around 2: start, three comparisons, placement
        for _ in 0..5 {
            state.step(&mut array, &mut sorted);
        }
        assert!(sorted.contains(1), "pivot 2 belongs at index 1");
        assert_eq!(array[1], 2);
    }

    #[test]
    fn test_render_state_tracks_partition() {
        let mut array = vec![2i64, 1];
        let mut sorted = SortedSet::new();
        let mut state = QuickState::new(array.len());
        assert_eq!(Stepper::<i64>::render_state(&state), RenderState::Quick { range: None });

        state.step(&mut array, &mut sorted);
        assert_eq!(
            state.render_state(),
            RenderState::Quick {
                range: Some(Zone::new(0, 1))
            }
        );
    }
}

// Heap sort with an explicit stack of nodes awaiting sift-down

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::RenderState;

#[derive(Debug, Clone)]
pub struct HeapState {
    /// True while the initial max-heap is being built
    building: bool,
    /// Nodes awaiting one level of sift-down; replaces recursive heapify
    pending: Vec<usize>,
    /// Positions `0..heap_size` still belong to the heap
    heap_size: usize,
}

impl HeapState {
    pub fn new(len: usize) -> Self {
        // Popped last-non-leaf first, so the heap is built bottom-up
        HeapState {
            building: true,
            pending: (0..len / 2).collect(),
            heap_size: len,
        }
    }

    /// Compare `node` with its children and sink it one level if needed
    fn sift<T: SortKey>(&mut self, node: usize, array: &mut [T]) -> StepOutcome {
        let left = 2 * node + 1;
        let right = left + 1;
        let mut largest = node;
        // Strict comparisons: ties keep the parent, then favor the left child
        if left < self.heap_size && array[left] > array[largest] {
            largest = left;
        }
        if right < self.heap_size && array[right] > array[largest] {
            largest = right;
        }

        let label = if self.building { "Heapify" } else { "Re-heapify" };
        let message = if largest != node {
            array.swap(node, largest);
            self.pending.push(largest);
            format!("{label} swap at {node} with {largest}")
        } else {
            format!("{label} compare at {node} (no swap)")
        };
        StepOutcome::new(message).primary(node).secondary(largest)
    }
}

impl<T: SortKey> Stepper<T> for HeapState {
    fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome {
        if self.building && self.pending.is_empty() {
            self.building = false;
        }

        if let Some(node) = self.pending.pop() {
            return self.sift(node, array);
        }

        if self.heap_size <= 1 {
            return StepOutcome::finished("Heap Sort complete.");
        }

        let last = self.heap_size - 1;
        array.swap(0, last);
        sorted.insert(last);
        self.heap_size = last;
        if self.heap_size > 1 {
            self.pending.push(0);
        }
        StepOutcome::new(format!(
            "Extracted max {} to index {last}; heap size is now {}",
            array[last], self.heap_size
        ))
        .primary(0)
        .secondary(last)
    }

    fn render_state(&self) -> RenderState {
        RenderState::Heap {
            heap_size: self.heap_size,
            building: self.building,
        }
    }
}

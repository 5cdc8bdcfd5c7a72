// Insertion sort and the gapped insertion cursor shared with Shell and Tim

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;

/// Resumable gapped insertion over `lower..end`.
///
/// Each element from `lower + gap` onward is taken as a key, larger
/// elements `gap` apart are shifted right one per step, and the key is
/// dropped into the hole. With `gap == 1` and `lower == 0` this is plain
/// insertion sort; Tim sort scopes it to a run, Shell sort widens the gap.
#[derive(Debug, Clone)]
pub struct InsertionCursor<T> {
    lower: usize,
    end: usize,
    gap: usize,
    i: usize,
    hole: usize,
    /// Key being inserted; `None` between insertions
    key: Option<T>,
}

impl<T: SortKey> InsertionCursor<T> {
    pub fn new(lower: usize, end: usize, gap: usize) -> Self {
        debug_assert!(gap > 0, "insertion gap must be positive");
        let i = lower + gap;
        InsertionCursor {
            lower,
            end,
            gap,
            i,
            hole: i,
            key: None,
        }
    }

    /// Whether every element of the range has been inserted
    pub fn is_done(&self) -> bool {
        self.i >= self.end
    }

    /// Index of the element currently taken as key
    pub fn key_index(&self) -> Option<usize> {
        self.key.map(|_| self.i)
    }

    /// Position the key would be inserted at next
    pub fn hole(&self) -> Option<usize> {
        self.key.map(|_| self.hole)
    }

    /// Take a key, shift one element, or insert the key.
    ///
    /// Must not be called once [`is_done`](Self::is_done) returns true.
    pub fn advance(&mut self, array: &mut [T]) -> StepOutcome {
        let Some(key) = self.key else {
            let key = array[self.i];
            self.key = Some(key);
            self.hole = self.i;
            return StepOutcome::new(format!("Taking key = {key} at index {}", self.i))
                .primary(self.i);
        };

        let hole = self.hole;
        // Strict comparison keeps equal elements in their original order
        if hole >= self.lower + self.gap && array[hole - self.gap] > key {
            let from = hole - self.gap;
            array[hole] = array[from];
            self.hole = from;
            let message = if self.gap == 1 {
                format!("Shifting {} right (index {from})", array[hole])
            } else {
                format!(
                    "Gap {}: shifting {} right (index {from} -> {hole})",
                    self.gap, array[hole]
                )
            };
            return StepOutcome::new(message).primary(from).secondary(hole);
        }

        array[hole] = key;
        self.key = None;
        self.i += 1;
        StepOutcome::new(format!("Inserting key {key} at index {hole}")).primary(hole)
    }
}

/// Plain insertion sort over the whole array
#[derive(Debug, Clone)]
pub struct InsertionState<T> {
    cursor: InsertionCursor<T>,
}

impl<T: SortKey> InsertionState<T> {
    pub fn new(len: usize) -> Self {
        InsertionState {
            cursor: InsertionCursor::new(0, len, 1),
        }
    }
}

impl<T: SortKey> Stepper<T> for InsertionState<T> {
    fn step(&mut self, array: &mut [T], _sorted: &mut SortedSet) -> StepOutcome {
        if self.cursor.is_done() {
            return StepOutcome::finished("Insertion Sort complete. Array is sorted.");
        }
        self.cursor.advance(array)
    }
}

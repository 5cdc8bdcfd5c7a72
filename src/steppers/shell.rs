// Shell sort: gapped insertion passes with a halving gap

use super::insertion::InsertionCursor;
use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::RenderState;

#[derive(Debug, Clone)]
pub struct ShellState<T> {
    len: usize,
    gap: usize,
    cursor: InsertionCursor<T>,
}

impl<T: SortKey> ShellState<T> {
    pub fn new(len: usize) -> Self {
        let gap = len / 2;
        ShellState {
            len,
            gap,
            cursor: InsertionCursor::new(0, len, gap.max(1)),
        }
    }
}

impl<T: SortKey> Stepper<T> for ShellState<T> {
    fn step(&mut self, array: &mut [T], _sorted: &mut SortedSet) -> StepOutcome {
        if self.gap == 0 {
            return StepOutcome::finished("Shell Sort complete.");
        }

        if !self.cursor.is_done() {
            return self.cursor.advance(array);
        }

        let finished_gap = self.gap;
        self.gap /= 2;
        if self.gap == 0 {
            return StepOutcome::finished("Shell Sort complete.");
        }
        self.cursor = InsertionCursor::new(0, self.len, self.gap);
        StepOutcome::new(format!(
            "Gap {finished_gap} pass complete. Gap reduced to {}",
            self.gap
        ))
    }

    fn render_state(&self) -> RenderState {
        RenderState::Shell {
            gap: self.gap,
            key_index: self.cursor.key_index(),
            cursor: self.cursor.hole(),
        }
    }
}

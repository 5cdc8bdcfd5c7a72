// Gnome sort: a single cursor that walks forward and swaps backward

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;

#[derive(Debug, Clone, Default)]
pub struct GnomeState {
    cursor: usize,
}

impl GnomeState {
    pub fn new() -> Self {
        GnomeState::default()
    }
}

impl<T: SortKey> Stepper<T> for GnomeState {
    fn step(&mut self, array: &mut [T], _sorted: &mut SortedSet) -> StepOutcome {
        let cursor = self.cursor;
        if cursor >= array.len() {
            return StepOutcome::finished("Gnome Sort complete.");
        }

        if cursor == 0 {
            self.cursor += 1;
            return StepOutcome::new("At the start of the line, stepping forward").primary(0);
        }

        let (current, previous) = (array[cursor], array[cursor - 1]);
        let message = if current >= previous {
            self.cursor += 1;
            format!(
                "Comparing indices {cursor} and {} ({current} >= {previous}), stepping forward",
                cursor - 1
            )
        } else {
            array.swap(cursor, cursor - 1);
            self.cursor -= 1;
            format!(
                "Comparing indices {cursor} and {} ({current} < {previous}), swapped and stepping back",
                cursor - 1
            )
        };
        StepOutcome::new(message).primary(cursor).secondary(cursor - 1)
    }
}

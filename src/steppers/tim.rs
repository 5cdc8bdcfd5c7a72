// Tim sort: insertion-sorted runs merged pairwise

use super::insertion::InsertionCursor;
use super::merge::MergeCursor;
use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::{RenderState, Zone};
use std::collections::VecDeque;

/// Width of the runs sorted by insertion before merging starts
pub const MIN_RUN: usize = 32;

/// Half-open `[start, end)` run boundary
type Run = (usize, usize);

#[derive(Debug, Clone)]
enum TimPhase<T> {
    /// Insertion-sorting the run `[start, end)`
    Insertion {
        start: usize,
        end: usize,
        cursor: InsertionCursor<T>,
    },
    /// Merging adjacent runs; `active` is the pair being merged, if any
    Merging { active: Option<MergeCursor> },
}

#[derive(Debug, Clone)]
pub struct TimState<T> {
    len: usize,
    run_size: usize,
    phase: TimPhase<T>,
    /// Runs still to be paired in the current merge pass, left to right
    pending: VecDeque<Run>,
    /// Runs produced by the current merge pass
    merged: Vec<Run>,
    buffer: Vec<T>,
}

impl<T: SortKey> TimState<T> {
    pub fn new(array: &[T]) -> Self {
        let len = array.len();
        let run_size = MIN_RUN.min(len).max(1);
        TimState {
            len,
            run_size,
            phase: Self::insertion_phase(0, run_size.min(len)),
            pending: VecDeque::new(),
            merged: Vec::new(),
            buffer: array.to_vec(),
        }
    }

    fn insertion_phase(start: usize, end: usize) -> TimPhase<T> {
        TimPhase::Insertion {
            start,
            end,
            cursor: InsertionCursor::new(start, end, 1),
        }
    }

    /// Every current run boundary, in array order
    fn runs(&self) -> Vec<Zone> {
        let mut runs: Vec<Run> = self
            .merged
            .iter()
            .chain(self.pending.iter())
            .copied()
            .collect();
        match &self.phase {
            TimPhase::Merging {
                active: Some(cursor),
            } => {
                let range = cursor.range();
                runs.push((range.start, range.end + 1));
            }
            TimPhase::Insertion { start, end, .. } => runs.push((*start, *end)),
            TimPhase::Merging { active: None } => {}
        }
        runs.sort_unstable();
        runs.into_iter()
            .filter(|(start, end)| start < end)
            .map(|(start, end)| Zone::new(start, end - 1))
            .collect()
    }

    /// Record a sorted run and set up the next one, or start merging
    fn finish_run(&mut self, start: usize, end: usize) -> StepOutcome {
        self.pending.push_back((start, end));
        let mut message = format!("Run sorted: [{start}, {end})");
        if end < self.len {
            self.phase = Self::insertion_phase(end, (end + self.run_size).min(self.len));
        } else {
            self.phase = TimPhase::Merging { active: None };
            message.push_str(". All runs sorted. Starting merge phase");
        }
        StepOutcome::new(message)
    }

    fn step_merging(&mut self, array: &mut [T]) -> StepOutcome {
        if let TimPhase::Merging {
            active: Some(cursor),
        } = &mut self.phase
        {
            let mut outcome = cursor.advance(array, &mut self.buffer);
            if cursor.is_done() {
                let range = cursor.range();
                self.merged.push((range.start, range.end + 1));
                outcome.message.push_str(&format!(
                    ". Merged runs into [{}, {})",
                    range.start,
                    range.end + 1
                ));
                self.phase = TimPhase::Merging { active: None };
            }
            return outcome;
        }

        loop {
            while let Some((left, mid)) = self.pending.pop_front() {
                let Some((_, right)) = self.pending.pop_front() else {
                    // An odd run out is carried into the next pass untouched
                    self.merged.push((left, mid));
                    break;
                };
                self.phase = TimPhase::Merging {
                    active: Some(MergeCursor::new(left, mid - 1, right - 1)),
                };
                return StepOutcome::new(format!(
                    "Merging runs [{left}, {mid}) and [{mid}, {right})"
                ))
                .primary(left)
                .secondary(mid);
            }

            if self.merged.len() <= 1 {
                return StepOutcome::finished("Tim Sort complete.");
            }
            self.pending = self.merged.drain(..).collect();
        }
    }
}

impl<T: SortKey> Stepper<T> for TimState<T> {
    fn step(&mut self, array: &mut [T], _sorted: &mut SortedSet) -> StepOutcome {
        match &mut self.phase {
            TimPhase::Insertion { start, end, cursor } => {
                if !cursor.is_done() {
                    return cursor.advance(array);
                }
                let (start, end) = (*start, *end);
                self.finish_run(start, end)
            }
            TimPhase::Merging { .. } => self.step_merging(array),
        }
    }

    fn render_state(&self) -> RenderState {
        let (merging, zones) = match &self.phase {
            TimPhase::Insertion { .. } => (false, None),
            TimPhase::Merging { active } => (true, active.as_ref().map(MergeCursor::zones)),
        };
        RenderState::Tim {
            runs: self.runs(),
            merging,
            zones,
        }
    }
}

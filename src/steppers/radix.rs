// LSD radix sort: one counting-sort pass per decimal digit

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::RenderState;
use std::fmt;

/// Stage of the counting sort for the current digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixPhase {
    /// Tally the digit of one element per step
    Count,
    /// Prefix-sum one bucket per step
    Accumulate,
    /// Scatter one element per step, from the end of the array backward
    Place,
    /// Copy one element of the placement buffer back per step
    CopyBack,
}

impl fmt::Display for RadixPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RadixPhase::Count => "Count",
            RadixPhase::Accumulate => "Accumulate",
            RadixPhase::Place => "Place",
            RadixPhase::CopyBack => "Copy back",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct RadixState<T> {
    phase: RadixPhase,
    /// Current digit place: 1, 10, 100, ...
    place: u64,
    /// Array index in Count/CopyBack, bucket in Accumulate, elements left in Place
    index: usize,
    counts: [usize; 10],
    buffer: Vec<T>,
    /// Keys are taken relative to this so negative values sort correctly
    base: i64,
    max_key: u64,
    /// Element or bucket touched by the last step
    last: Option<usize>,
}

impl<T: SortKey> RadixState<T> {
    pub fn new(array: &[T]) -> Self {
        let min = array.iter().map(SortKey::radix_key).min().unwrap_or(0);
        let max = array.iter().map(SortKey::radix_key).max().unwrap_or(0);
        // Non-negative input keeps its own digits
        let base = min.min(0);
        RadixState {
            phase: RadixPhase::Count,
            place: 1,
            index: 0,
            counts: [0; 10],
            buffer: array.to_vec(),
            base,
            max_key: max.abs_diff(base),
            last: None,
        }
    }

    fn digit(&self, value: &T) -> usize {
        let key = value.radix_key().abs_diff(self.base);
        ((key / self.place) % 10) as usize
    }

    /// Whether the current digit is the most significant one
    fn is_last_pass(&self) -> bool {
        self.place
            .checked_mul(10)
            .map_or(true, |next| next > self.max_key)
    }
}

impl<T: SortKey> Stepper<T> for RadixState<T> {
    fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome {
        let len = array.len();
        // Phase changes do no visible work, so they fall through to the next phase
        loop {
            match self.phase {
                RadixPhase::Count if self.index < len => {
                    let at = self.index;
                    let digit = self.digit(&array[at]);
                    self.counts[digit] += 1;
                    self.index += 1;
                    self.last = Some(at);
                    return StepOutcome::new(format!(
                        "Counting digit {digit} of {} at index {at} (place {})",
                        array[at], self.place
                    ))
                    .primary(at);
                }
                RadixPhase::Count => {
                    self.phase = RadixPhase::Accumulate;
                    self.index = 1;
                }
                RadixPhase::Accumulate if self.index < self.counts.len() => {
                    let bucket = self.index;
                    self.counts[bucket] += self.counts[bucket - 1];
                    self.index += 1;
                    self.last = Some(bucket);
                    return StepOutcome::new(format!(
                        "Accumulating bucket {bucket}: {} elements at or below digit {bucket}",
                        self.counts[bucket]
                    ));
                }
                RadixPhase::Accumulate => {
                    self.phase = RadixPhase::Place;
                    self.index = len;
                }
                RadixPhase::Place if self.index > 0 => {
                    let at = self.index - 1;
                    let digit = self.digit(&array[at]);
                    self.counts[digit] -= 1;
                    let slot = self.counts[digit];
                    self.buffer[slot] = array[at];
                    self.index -= 1;
                    self.last = Some(at);
                    return StepOutcome::new(format!(
                        "Placing value {} (digit {digit}) into bucket slot {slot}",
                        array[at]
                    ))
                    .secondary(at);
                }
                RadixPhase::Place => {
                    self.phase = RadixPhase::CopyBack;
                    self.index = 0;
                }
                RadixPhase::CopyBack if self.index < len => {
                    let at = self.index;
                    array[at] = self.buffer[at];
                    self.index += 1;
                    self.last = Some(at);
                    if self.is_last_pass() {
                        sorted.insert(at);
                    }
                    return StepOutcome::new(format!(
                        "Copying back value {} to index {at}",
                        array[at]
                    ))
                    .pivot(at);
                }
                RadixPhase::CopyBack => {
                    if self.is_last_pass() {
                        self.last = None;
                        return StepOutcome::finished("Radix Sort complete.");
                    }
                    self.place *= 10;
                    self.phase = RadixPhase::Count;
                    self.index = 0;
                    self.counts = [0; 10];
                }
            }
        }
    }

    fn render_state(&self) -> RenderState {
        RenderState::Radix {
            phase: self.phase,
            place: self.place,
            base: self.base,
            index: self.last,
            counts: self.counts,
        }
    }
}

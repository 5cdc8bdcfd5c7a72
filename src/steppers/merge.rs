// Merge sort driven by an explicit split/merge stack

use super::{SortKey, Stepper};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::{MergeZones, RenderState, Zone};

/// Resumable stable merge of `left..=mid` and `mid+1..=right`.
///
/// Moves one element into the scratch buffer per step, preferring the left
/// operand on ties, then copies the scratch range back one element per step.
#[derive(Debug, Clone)]
pub struct MergeCursor {
    left: usize,
    mid: usize,
    right: usize,
    i: usize,
    j: usize,
    k: usize,
    /// Next position to copy back; set once the scratch range is full
    copy_at: Option<usize>,
}

impl MergeCursor {
    pub fn new(left: usize, mid: usize, right: usize) -> Self {
        debug_assert!(left <= mid && mid < right, "merge halves must be non-empty");
        MergeCursor {
            left,
            mid,
            right,
            i: left,
            j: mid + 1,
            k: left,
            copy_at: None,
        }
    }

    /// Whether the merged range has been fully written back
    pub fn is_done(&self) -> bool {
        self.copy_at.is_some_and(|at| at > self.right)
    }

    /// Whole range covered by this merge
    pub fn range(&self) -> Zone {
        Zone::new(self.left, self.right)
    }

    pub fn zones(&self) -> MergeZones {
        let produced = match self.copy_at {
            Some(_) => self.right + 1,
            None => self.k,
        };
        MergeZones {
            left: Zone::new(self.left, self.mid),
            right: Zone::new(self.mid + 1, self.right),
            merged: (produced > self.left).then(|| Zone::new(self.left, produced - 1)),
        }
    }

    /// Move one element into `buffer`, or copy one element back.
    ///
    /// Must not be called once [`is_done`](Self::is_done) returns true.
    pub fn advance<T: SortKey>(&mut self, array: &mut [T], buffer: &mut [T]) -> StepOutcome {
        if let Some(at) = self.copy_at {
            array[at] = buffer[at];
            self.copy_at = Some(at + 1);
            return StepOutcome::new(format!("Copying back {} to index {at}", array[at])).pivot(at);
        }

        let (i, j, k) = (self.i, self.j, self.k);
        let left_open = i <= self.mid;
        let right_open = j <= self.right;

        let outcome = if left_open && right_open {
            let (a, b) = (array[i], array[j]);
            let message = if a <= b {
                buffer[k] = a;
                self.i += 1;
                format!("Comparing {a} <= {b}: taking {a} from the left half")
            } else {
                buffer[k] = b;
                self.j += 1;
                format!("Comparing {a} > {b}: taking {b} from the right half")
            };
            StepOutcome::new(message).primary(i).secondary(j)
        } else if left_open {
            buffer[k] = array[i];
            self.i += 1;
            StepOutcome::new(format!("Taking remaining {} from the left half", array[i])).primary(i)
        } else {
            buffer[k] = array[j];
            self.j += 1;
            StepOutcome::new(format!("Taking remaining {} from the right half", array[j]))
                .secondary(j)
        };

        self.k += 1;
        if self.k > self.right {
            self.copy_at = Some(self.left);
        }
        outcome
    }
}

/// What a stack entry asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePhase {
    Split,
    Merge,
}

#[derive(Debug, Clone)]
pub struct MergeState<T> {
    /// Pending `(left, right, phase)` entries; replaces the call stack
    stack: Vec<(usize, usize, MergePhase)>,
    active: Option<MergeCursor>,
    buffer: Vec<T>,
}

impl<T: SortKey> MergeState<T> {
    pub fn new(array: &[T]) -> Self {
        let stack = match array.len() {
            0 => Vec::new(),
            len => vec![(0, len - 1, MergePhase::Split)],
        };
        MergeState {
            stack,
            active: None,
            buffer: array.to_vec(),
        }
    }
}

impl<T: SortKey> Stepper<T> for MergeState<T> {
    fn step(&mut self, array: &mut [T], _sorted: &mut SortedSet) -> StepOutcome {
        if let Some(cursor) = &mut self.active {
            let mut outcome = cursor.advance(array, &mut self.buffer);
            if cursor.is_done() {
                let range = cursor.range();
                outcome
                    .message
                    .push_str(&format!(". Merged [{}, {}]", range.start, range.end));
                self.active = None;
            }
            return outcome;
        }

        while let Some((left, right, phase)) = self.stack.pop() {
            let mid = left + (right - left) / 2;
            match phase {
                MergePhase::Split if left < right => {
                    self.stack.push((left, right, MergePhase::Merge));
                    self.stack.push((mid + 1, right, MergePhase::Split));
                    self.stack.push((left, mid, MergePhase::Split));
                    return StepOutcome::new(format!(
                        "Splitting [{left}, {right}] into [{left}, {mid}] and [{}, {right}]",
                        mid + 1
                    ))
                    .primary(left)
                    .secondary(right);
                }
                // Leaf: nothing to split
                MergePhase::Split => continue,
                MergePhase::Merge => {
                    self.active = Some(MergeCursor::new(left, mid, right));
                    return StepOutcome::new(format!(
                        "Merging [{left}, {mid}] and [{}, {right}]",
                        mid + 1
                    ))
                    .primary(left)
                    .secondary(mid + 1);
                }
            }
        }

        StepOutcome::finished("Merge Sort complete.")
    }

    fn render_state(&self) -> RenderState {
        RenderState::Merge {
            zones: self.active.as_ref().map(MergeCursor::zones),
        }
    }
}

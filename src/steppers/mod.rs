//! Resumable sorting algorithms
//!
//! Every algorithm is an explicit state machine. A call to
//! [`Stepper::step`] performs exactly one visible unit of work (a comparison,
//! a swap, a shift, a digit count) and returns; the next call resumes from the
//! state left behind. Recursive formulations are replaced by explicit stacks
//! and multi-stage ones by phase enums, so execution can pause between any
//! two steps.
//!
//! # Modules
//!
//! - [`bubble`], [`selection`], [`gnome`]: single-loop comparison sorts
//! - [`insertion`]: insertion sort plus the [`InsertionCursor`] shared with
//!   [`shell`] and [`tim`]
//! - [`merge`]: merge sort plus the [`MergeCursor`] shared with [`tim`]
//! - [`quick`], [`heap`]: recursion replaced by explicit stacks
//! - [`radix`]: four-phase LSD counting sort
//!
//! Steppers are generic over [`SortKey`] so they can be exercised with
//! payload-carrying elements (stability checks); the engine itself runs them
//! on `i64`.

pub mod bubble;
pub mod gnome;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;
pub mod tim;

use crate::engine::algorithm::Algorithm;
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::RenderState;
use std::fmt;

pub use bubble::BubbleState;
pub use gnome::GnomeState;
pub use heap::HeapState;
pub use insertion::{InsertionCursor, InsertionState};
pub use merge::{MergeCursor, MergePhase, MergeState};
pub use quick::QuickState;
pub use radix::{RadixPhase, RadixState};
pub use selection::SelectionState;
pub use shell::ShellState;
pub use tim::{TimState, MIN_RUN};

/// Element type a stepper can sort
pub trait SortKey: Copy + Ord + fmt::Display {
    /// Integer whose decimal digits drive radix sort
    fn radix_key(&self) -> i64;
}

impl SortKey for i64 {
    fn radix_key(&self) -> i64 {
        *self
    }
}

/// One algorithm's transition function
pub trait Stepper<T: SortKey> {
    /// Perform exactly one unit of work on `array`, certifying positions in
    /// `sorted` as they reach their final slot.
    ///
    /// Must not be called again after it returned a finished outcome.
    fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome;

    /// Algorithm fields the presentation layer draws
    fn render_state(&self) -> RenderState {
        RenderState::Plain
    }
}

/// Live state of whichever algorithm the current run executes
#[derive(Debug, Clone)]
pub enum AlgorithmState<T = i64> {
    Bubble(BubbleState),
    Insertion(InsertionState<T>),
    Selection(SelectionState),
    Quick(QuickState<T>),
    Merge(MergeState<T>),
    Heap(HeapState),
    Shell(ShellState<T>),
    Tim(TimState<T>),
    Radix(RadixState<T>),
    Gnome(GnomeState),
}

impl<T: SortKey> AlgorithmState<T> {
    /// Fresh state for running `algorithm` over `array`
    pub fn new(algorithm: Algorithm, array: &[T]) -> Self {
        match algorithm {
            Algorithm::Bubble => AlgorithmState::Bubble(BubbleState::new()),
            Algorithm::Insertion => AlgorithmState::Insertion(InsertionState::new(array.len())),
            Algorithm::Selection => AlgorithmState::Selection(SelectionState::new()),
            Algorithm::Quick => AlgorithmState::Quick(QuickState::new(array.len())),
            Algorithm::Merge => AlgorithmState::Merge(MergeState::new(array)),
            Algorithm::Heap => AlgorithmState::Heap(HeapState::new(array.len())),
            Algorithm::Shell => AlgorithmState::Shell(ShellState::new(array.len())),
            Algorithm::Tim => AlgorithmState::Tim(TimState::new(array)),
            Algorithm::Radix => AlgorithmState::Radix(RadixState::new(array)),
            Algorithm::Gnome => AlgorithmState::Gnome(GnomeState::new()),
        }
    }

    /// Which algorithm this state belongs to
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmState::Bubble(_) => Algorithm::Bubble,
            AlgorithmState::Insertion(_) => Algorithm::Insertion,
            AlgorithmState::Selection(_) => Algorithm::Selection,
            AlgorithmState::Quick(_) => Algorithm::Quick,
            AlgorithmState::Merge(_) => Algorithm::Merge,
            AlgorithmState::Heap(_) => Algorithm::Heap,
            AlgorithmState::Shell(_) => Algorithm::Shell,
            AlgorithmState::Tim(_) => Algorithm::Tim,
            AlgorithmState::Radix(_) => Algorithm::Radix,
            AlgorithmState::Gnome(_) => Algorithm::Gnome,
        }
    }

    fn stepper(&mut self) -> &mut dyn Stepper<T> {
        match self {
            AlgorithmState::Bubble(state) => state,
            AlgorithmState::Insertion(state) => state,
            AlgorithmState::Selection(state) => state,
            AlgorithmState::Quick(state) => state,
            AlgorithmState::Merge(state) => state,
            AlgorithmState::Heap(state) => state,
            AlgorithmState::Shell(state) => state,
            AlgorithmState::Tim(state) => state,
            AlgorithmState::Radix(state) => state,
            AlgorithmState::Gnome(state) => state,
        }
    }

    /// Advance the active algorithm by one step
    pub fn step(&mut self, array: &mut [T], sorted: &mut SortedSet) -> StepOutcome {
        self.stepper().step(array, sorted)
    }

    /// Rendering-relevant snapshot of the active algorithm
    pub fn render_state(&self) -> RenderState {
        self.stepper_ref().render_state()
    }

    fn stepper_ref(&self) -> &dyn Stepper<T> {
        match self {
            AlgorithmState::Bubble(state) => state,
            AlgorithmState::Insertion(state) => state,
            AlgorithmState::Selection(state) => state,
            AlgorithmState::Quick(state) => state,
            AlgorithmState::Merge(state) => state,
            AlgorithmState::Heap(state) => state,
            AlgorithmState::Shell(state) => state,
            AlgorithmState::Tim(state) => state,
            AlgorithmState::Radix(state) => state,
            AlgorithmState::Gnome(state) => state,
        }
    }
}

/// Whether `array` is in ascending order
pub fn is_sorted<T: Ord>(array: &[T]) -> bool {
    array.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Step limit far above any sequence the unit tests use
    const MAX_STEPS: usize = 100_000;

    /// Drive `state` to completion, returning the outcomes in order
    pub fn run_to_end<T: SortKey>(
        state: &mut AlgorithmState<T>,
        array: &mut [T],
        sorted: &mut SortedSet,
    ) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..MAX_STEPS {
            let outcome = state.step(array, sorted);
            let finished = outcome.finished;
            outcomes.push(outcome);
            if finished {
                return outcomes;
            }
        }
        panic!("algorithm did not finish within {MAX_STEPS} steps");
    }

    /// Sort a copy of `input` with `algorithm`, returning the result and outcomes
    pub fn sort(algorithm: Algorithm, input: &[i64]) -> (Vec<i64>, Vec<StepOutcome>) {
        let mut array = input.to_vec();
        let mut sorted = SortedSet::new();
        let mut state = AlgorithmState::new(algorithm, &array);
        let outcomes = run_to_end(&mut state, &mut array, &mut sorted);
        (array, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sort;
    use super::*;

    #[test]
    fn test_every_algorithm_sorts() {
        let input = vec![58, 12, 91, 7, 34, 76, 25, 63, 89, 3, 47, 68, 20, 99, 14];
        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let (array, outcomes) = sort(algorithm, &input);
            assert_eq!(array, expected, "{algorithm} produced wrong order");
            assert_eq!(
                outcomes.iter().filter(|o| o.finished).count(),
                1,
                "{algorithm} must finish exactly once"
            );
        }
    }

    #[test]
    fn test_state_reports_algorithm() {
        let array = vec![2i64, 1];
        for algorithm in Algorithm::ALL {
            assert_eq!(AlgorithmState::new(algorithm, &array).algorithm(), algorithm);
        }
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i64>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}

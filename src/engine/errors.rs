//! Error types for the sorting engine
//!
//! This module defines [`ValidationError`], raised when a run cannot start
//! with the given input, and [`EngineError`], which covers every recoverable
//! failure of the [`RunController`](super::controller::RunController).
//!
//! Out-of-bounds array access is deliberately absent: it can only come from a
//! broken algorithm state, and slice indexing panics in that case.

use thiserror::Error;

/// Input rejected by `start()`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No numbers were supplied
    #[error("please enter a valid list of numbers")]
    Empty,

    /// Fewer than two numbers; nothing to sort
    #[error("array of length {len} is too small to sort")]
    TooShort { len: usize },
}

/// Errors surfaced by the run controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The run could not be started
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `tick()` was requested while no run is active
    #[error("no sort in progress; start a run first")]
    NotStarted,

    /// Scrub target is past the recorded history
    #[error("step {requested} is out of range ({recorded} frames recorded)")]
    OutOfRangeScrub { requested: usize, recorded: usize },

    /// Stepping backward from the first frame
    #[error("already at the beginning of the history")]
    AtBeginning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::TooShort { len: 1 }.to_string(),
            "array of length 1 is too small to sort"
        );
        let err = EngineError::OutOfRangeScrub {
            requested: 9,
            recorded: 4,
        };
        assert_eq!(err.to_string(), "step 9 is out of range (4 frames recorded)");
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: EngineError = ValidationError::Empty.into();
        assert!(matches!(err, EngineError::Validation(ValidationError::Empty)));
        assert_eq!(err.to_string(), ValidationError::Empty.to_string());
    }
}

// Result of a single stepper call

/// What one tick did: the indices to highlight, a human-readable log line,
/// and whether the algorithm has completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub pivot: Option<usize>,
    pub message: String,
    pub finished: bool,
}

impl StepOutcome {
    /// An outcome with a message and no highlights
    pub fn new(message: impl Into<String>) -> Self {
        StepOutcome {
            message: message.into(),
            ..Default::default()
        }
    }

    /// The terminal outcome of a run
    pub fn finished(message: impl Into<String>) -> Self {
        StepOutcome {
            message: message.into(),
            finished: true,
            ..Default::default()
        }
    }

    pub fn primary(mut self, index: usize) -> Self {
        self.primary = Some(index);
        self
    }

    pub fn secondary(mut self, index: usize) -> Self {
        self.secondary = Some(index);
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    /// Indices highlighted by this outcome, in primary/secondary/pivot order
    pub fn highlighted(&self) -> impl Iterator<Item = usize> + '_ {
        [self.primary, self.secondary, self.pivot].into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let outcome = StepOutcome::new("Comparing").primary(2).pivot(4);
        assert_eq!(outcome.primary, Some(2));
        assert_eq!(outcome.secondary, None);
        assert_eq!(outcome.pivot, Some(4));
        assert!(!outcome.finished);
        assert_eq!(outcome.highlighted().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_finished_has_no_highlights() {
        let outcome = StepOutcome::finished("done");
        assert!(outcome.finished);
        assert_eq!(outcome.highlighted().count(), 0);
    }
}

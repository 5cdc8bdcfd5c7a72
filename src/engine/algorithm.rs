// The ten supported sorting algorithms

use clap::ValueEnum;
use std::fmt;

/// Which sorting algorithm a run executes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Shell,
    Tim,
    Radix,
    Gnome,
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Tim,
        Algorithm::Radix,
        Algorithm::Gnome,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Tim => "Tim Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Gnome => "Gnome Sort",
        }
    }

    /// One-line summary shown under the chart
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Simple but slow. Repeatedly swaps adjacent elements until sorted."
            }
            Algorithm::Insertion => {
                "Builds the sorted array one item at a time. Fast on nearly sorted data."
            }
            Algorithm::Selection => {
                "Finds the minimum and places it. Easy to understand, but always O(n²)."
            }
            Algorithm::Quick => {
                "Divide-and-conquer around a pivot. Fast on average, quadratic in the worst case."
            }
            Algorithm::Merge => {
                "Stable divide-and-conquer that splits and merges for guaranteed O(n log n)."
            }
            Algorithm::Heap => {
                "Builds a binary max-heap and repeatedly extracts the maximum in O(n log n)."
            }
            Algorithm::Shell => {
                "Gap-based generalization of insertion sort for faster O(n log² n) behavior."
            }
            Algorithm::Tim => {
                "Stable hybrid of insertion-sorted runs and pairwise merges, O(n log n)."
            }
            Algorithm::Radix => {
                "Non-comparative and stable. Sorts digit by digit using counting sort."
            }
            Algorithm::Gnome => {
                "Moves elements back and forth like a garden gnome tidying a line of pots."
            }
        }
    }

    /// Whether equal values keep their relative order
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::Insertion
                | Algorithm::Merge
                | Algorithm::Tim
                | Algorithm::Radix
        )
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&algorithm| algorithm == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Gnome);
        assert_eq!(Algorithm::Gnome.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Quick.next(), Algorithm::Merge);

        let mut algorithm = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, Algorithm::Bubble);
    }

    #[test]
    fn test_parse_cli_names() {
        assert_eq!(Algorithm::from_str("radix", true), Ok(Algorithm::Radix));
        assert_eq!(Algorithm::from_str("GNOME", true), Ok(Algorithm::Gnome));
        assert!(Algorithm::from_str("bogo", true).is_err());
    }

    #[test]
    fn test_stability_flags() {
        let stable: Vec<_> = Algorithm::ALL.iter().filter(|a| a.is_stable()).collect();
        assert_eq!(stable.len(), 5);
        assert!(!Algorithm::Selection.is_stable());
        assert!(Algorithm::Tim.is_stable());
    }
}

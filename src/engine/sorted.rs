// Set of array positions certified to hold their final value

use rustc_hash::FxHashSet;

/// Positions the running algorithm has placed in their final slot.
///
/// There is no removal API: a set only grows until the run is reset, at
/// which point the controller replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedSet {
    indices: FxHashSet<usize>,
}

impl SortedSet {
    pub fn new() -> Self {
        SortedSet::default()
    }

    /// Certify a position. Returns true if it was not certified before.
    pub fn insert(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    /// Certify every position of an array of length `len`
    pub fn insert_all(&mut self, len: usize) {
        self.indices.extend(0..len);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether every position in `self` is also in `other`
    pub fn is_subset(&self, other: &SortedSet) -> bool {
        self.indices.is_subset(&other.indices)
    }

    /// Certified positions in ascending order
    pub fn to_sorted_vec(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.indices.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}

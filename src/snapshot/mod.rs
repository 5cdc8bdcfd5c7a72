// Snapshot management for history scrubbing

use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::steppers::radix::RadixPhase;

/// Inclusive range of array positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub start: usize,
    pub end: usize,
}

impl Zone {
    pub fn new(start: usize, end: usize) -> Self {
        Zone { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Number of positions covered
    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// The three highlighted regions of an in-progress merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeZones {
    pub left: Zone,
    pub right: Zone,
    /// Positions already written back into the array, if any
    pub merged: Option<Zone>,
}

/// Algorithm fields that affect rendering, captured per frame.
///
/// Control-flow state (explicit stacks, scan cursors that only matter for
/// resumption) is not part of this; it lives in the live
/// [`AlgorithmState`](crate::steppers::AlgorithmState) only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing beyond the highlighted indices
    #[default]
    Plain,
    Quick {
        range: Option<Zone>,
    },
    Merge {
        zones: Option<MergeZones>,
    },
    Heap {
        heap_size: usize,
        building: bool,
    },
    Shell {
        gap: usize,
        key_index: Option<usize>,
        cursor: Option<usize>,
    },
    Tim {
        runs: Vec<Zone>,
        merging: bool,
        zones: Option<MergeZones>,
    },
    Radix {
        phase: RadixPhase,
        place: u64,
        /// Offset subtracted from each value before taking digits
        base: i64,
        index: Option<usize>,
        counts: [usize; 10],
    },
}

impl RenderState {
    /// Digit of `value` at the current radix place
    pub fn radix_digit(&self, value: i64) -> Option<usize> {
        match self {
            RenderState::Radix { place, base, .. } => {
                Some((value.abs_diff(*base) / place % 10) as usize)
            }
            _ => None,
        }
    }

    fn estimated_size(&self) -> usize {
        match self {
            RenderState::Tim { runs, .. } => runs.len() * std::mem::size_of::<Zone>(),
            _ => 0,
        }
    }
}

/// Immutable record of everything needed to draw one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Position of this frame in the store
    pub step: usize,
    /// Full copy of the array after the step
    pub array: Vec<i64>,
    /// Highlights, log message and completion flag of the step
    pub outcome: StepOutcome,
    /// Certified positions at this point of the run
    pub sorted: SortedSet,
    pub render: RenderState,
}

impl Frame {
    /// Estimate the memory usage of this frame in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough: hash set entries cost about twice their payload
        let array = self.array.len() * std::mem::size_of::<i64>();
        let sorted = self.sorted.len() * std::mem::size_of::<usize>() * 2;
        std::mem::size_of::<Frame>()
            + array
            + sorted
            + self.outcome.message.len()
            + self.render.estimated_size()
    }
}

/// Append-only frame history for one run
#[derive(Debug, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    current_memory: usize,
}

impl FrameStore {
    pub fn new() -> Self {
        FrameStore::default()
    }

    /// Add a frame to history
    pub fn push(&mut self, frame: Frame) {
        self.current_memory += frame.estimated_size();
        self.frames.push(frame);
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Most recently appended frame
    pub fn latest(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Index of the most recently appended frame
    pub fn latest_index(&self) -> Option<usize> {
        self.frames.len().checked_sub(1)
    }

    /// Get the number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.frames.clear();
        self.current_memory = 0;
    }

    /// Get estimated memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Iterate over recorded frames in order
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}

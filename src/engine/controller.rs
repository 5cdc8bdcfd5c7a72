// Run controller: owns the array, the algorithm state and the frame history

use crate::engine::algorithm::Algorithm;
use crate::engine::errors::{EngineError, ValidationError};
use crate::engine::outcome::StepOutcome;
use crate::engine::sorted::SortedSet;
use crate::snapshot::{Frame, FrameStore, RenderState};
use crate::steppers::{is_sorted, AlgorithmState};
use tracing::{debug, info, warn};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No algorithm selected, or just reset
    Idle,
    /// Mid-execution; ticks advance the algorithm
    Running,
    /// The algorithm completed; ticks are no-ops
    Finished,
}

/// Drives one sorting run at a time, one tick per unit of work
#[derive(Debug)]
pub struct RunController {
    status: RunStatus,
    algorithm: Option<Algorithm>,

    /// Working array; replaced by a frame's copy while scrubbing
    array: Vec<i64>,

    /// Live control-flow state of the active algorithm
    state: Option<AlgorithmState>,

    /// Positions certified sorted so far in this run
    sorted: SortedSet,

    /// History of every step of this run
    frames: FrameStore,

    /// Frame currently shown (equals the newest frame unless scrubbed)
    position: usize,
}

impl RunController {
    pub fn new() -> Self {
        RunController {
            status: RunStatus::Idle,
            algorithm: None,
            array: Vec::new(),
            state: None,
            sorted: SortedSet::new(),
            frames: FrameStore::new(),
            position: 0,
        }
    }

    /// Discard any previous run and start `algorithm` on a copy of `input`.
    ///
    /// Records the initial frame. An input that is already in order finishes
    /// immediately with no further frames.
    pub fn start(&mut self, algorithm: Algorithm, input: &[i64]) -> Result<(), ValidationError> {
        self.reset();

        let len = input.len();
        match len {
            0 => {
                warn!("rejected empty input");
                return Err(ValidationError::Empty);
            }
            1 => {
                warn!("array of length 1 is too small to sort");
                return Err(ValidationError::TooShort { len });
            }
            _ => {}
        }

        self.array = input.to_vec();
        let state = AlgorithmState::new(algorithm, &self.array);
        let render = state.render_state();

        let outcome = if is_sorted(&self.array) {
            self.sorted.insert_all(len);
            self.status = RunStatus::Finished;
            StepOutcome::finished(format!("{algorithm}: array is already sorted."))
        } else {
            self.status = RunStatus::Running;
            StepOutcome::new(format!("Starting {algorithm} on {len} elements."))
        };

        self.algorithm = Some(algorithm);
        self.state = Some(state);
        self.record(outcome, render);
        info!(%algorithm, len, status = ?self.status, "run started");
        Ok(())
    }

    /// Perform one unit of work and record it as a new frame.
    ///
    /// After scrubbing, execution resumes from the newest frame as if no
    /// scrub had happened. Once finished this returns the final outcome
    /// again without recording anything.
    pub fn tick(&mut self) -> Result<StepOutcome, EngineError> {
        match self.status {
            RunStatus::Idle => Err(EngineError::NotStarted),
            RunStatus::Finished => self
                .frames
                .latest()
                .map(|frame| frame.outcome.clone())
                .ok_or(EngineError::NotStarted),
            RunStatus::Running => {
                self.resume_from_head();
                let Some(state) = self.state.as_mut() else {
                    return Err(EngineError::NotStarted);
                };

                let outcome = state.step(&mut self.array, &mut self.sorted);
                let render = state.render_state();
                if outcome.finished {
                    self.sorted.insert_all(self.array.len());
                    self.status = RunStatus::Finished;
                }
                self.record(outcome.clone(), render);

                debug!(step = self.position, message = %outcome.message, "tick");
                if outcome.finished {
                    info!(steps = self.position, "run finished");
                }
                Ok(outcome)
            }
        }
    }

    /// Show a previously recorded frame.
    ///
    /// Replaces the working array with the frame's copy. The algorithm's
    /// control flow is left untouched, so scrubbing never changes what the
    /// next `tick` does. Out-of-range indices are rejected, not clamped.
    pub fn scrub(&mut self, index: usize) -> Result<&Frame, EngineError> {
        let recorded = self.frames.len();
        let Some(frame) = self.frames.get(index) else {
            return Err(EngineError::OutOfRangeScrub {
                requested: index,
                recorded,
            });
        };
        self.array.clone_from(&frame.array);
        self.position = index;
        Ok(frame)
    }

    /// Replay the next recorded frame, or tick when already at the newest one
    pub fn step_forward(&mut self) -> Result<StepOutcome, EngineError> {
        match self.frames.latest_index() {
            Some(latest) if self.position < latest => {
                let next = self.position + 1;
                self.scrub(next).map(|frame| frame.outcome.clone())
            }
            _ => self.tick(),
        }
    }

    /// Show the frame before the current one
    pub fn step_backward(&mut self) -> Result<&Frame, EngineError> {
        if self.frames.is_empty() {
            return Err(EngineError::NotStarted);
        }
        let previous = self
            .position
            .checked_sub(1)
            .ok_or(EngineError::AtBeginning)?;
        self.scrub(previous)
    }

    /// Show the initial frame
    pub fn rewind_to_start(&mut self) -> Result<&Frame, EngineError> {
        self.scrub(0)
    }

    /// Show the newest frame
    pub fn jump_to_latest(&mut self) -> Result<&Frame, EngineError> {
        let latest = self.frames.latest_index().ok_or(EngineError::NotStarted)?;
        self.scrub(latest)
    }

    /// Tick until the algorithm finishes, returning the number of ticks taken
    pub fn run_to_end(&mut self) -> Result<usize, EngineError> {
        if self.status == RunStatus::Idle {
            return Err(EngineError::NotStarted);
        }
        let mut ticks = 0;
        while self.status == RunStatus::Running {
            self.tick()?;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Drop the run entirely and return to idle
    pub fn reset(&mut self) {
        if self.status != RunStatus::Idle {
            info!(frames = self.frames.len(), "run reset");
        }
        self.status = RunStatus::Idle;
        self.algorithm = None;
        self.array = Vec::new();
        self.state = None;
        self.sorted = SortedSet::new();
        self.frames.clear();
        self.position = 0;
    }

    /// Re-seat the working array from the newest frame after a scrub
    fn resume_from_head(&mut self) {
        if let Some(latest) = self.frames.latest() {
            if self.position != latest.step {
                self.array.clone_from(&latest.array);
                self.position = latest.step;
            }
        }
    }

    fn record(&mut self, outcome: StepOutcome, render: RenderState) {
        let step = self.frames.len();
        self.frames.push(Frame {
            step,
            array: self.array.clone(),
            outcome,
            sorted: self.sorted.clone(),
            render,
        });
        self.position = step;
    }

    // ========== Getter methods for UI ==========

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == RunStatus::Finished
    }

    /// Algorithm of the current run, if any
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Working array
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// Live sorted-index set (of the newest step, not of a scrubbed frame)
    pub fn sorted(&self) -> &SortedSet {
        &self.sorted
    }

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    /// Number of recorded frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame currently shown
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the view is at the newest frame
    pub fn is_at_head(&self) -> bool {
        self.frames
            .latest_index()
            .map_or(true, |latest| latest == self.position)
    }

    /// Frame currently shown
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.position)
    }

    pub fn latest_frame(&self) -> Option<&Frame> {
        self.frames.latest()
    }
}

impl Default for RunController {
    fn default() -> Self {
        Self::new()
    }
}

//! Sorting engine
//!
//! This module provides the run-level logic:
//! - [`controller`]: the [`RunController`](controller::RunController), which
//!   starts runs, ticks the active stepper and scrubs through history
//! - [`algorithm`]: the ten selectable algorithms
//! - [`outcome`]: what a single tick reports
//! - [`sorted`]: the monotonic set of certified positions
//! - [`errors`]: validation and engine error types
//!
//! # Execution Model
//!
//! A run is single-threaded and cooperative. Each tick performs one unit of
//! work and appends one [`Frame`](crate::snapshot::Frame); between ticks the
//! engine is quiescent. Callers that share a controller across threads must
//! serialize access themselves.

pub mod algorithm;
pub mod controller;
pub mod errors;
pub mod outcome;
pub mod sorted;

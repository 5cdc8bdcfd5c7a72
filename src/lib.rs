//! # Introduction
//!
//! sortty runs sorting algorithms one unit of work at a time, recording a
//! frame of the whole array state after every step. The frame history can be
//! scrubbed forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → RunController → Stepper ticks → Frames → TUI
//! ```
//!
//! 1. [`input`]: parses typed lists and generates random arrays.
//! 2. [`engine`]: the [`engine::controller::RunController`] lifecycle
//!    (start, tick, scrub, reset) plus outcomes and the sorted-index set.
//! 3. [`steppers`]: one resumable state machine per algorithm.
//! 4. [`snapshot`]: immutable [`snapshot::Frame`]s in an append-only store.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, Insertion, Selection, Quick (Lomuto), Merge (top-down), Heap,
//! Shell (halving gaps), Tim (run size 32), Radix (LSD, base 10) and Gnome.

pub mod config;
pub mod engine;
pub mod input;
pub mod snapshot;
pub mod steppers;
pub mod ui;

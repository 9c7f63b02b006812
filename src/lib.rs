//! # Introduction
//!
//! sortty animates classic comparison sorts in the terminal. Each algorithm
//! runs once over a private copy of the array and records a full
//! [`snapshot::Step`] at its own granularity; the recorded
//! [`snapshot::StepSequence`] is then replayed on a timer through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! ArrayConfig → array::generate → sorting::record_steps → StepSequence
//!                                                              │
//!                        TUI ◀── PlaybackView ◀── Controller::tick
//! ```
//!
//! 1. [`array`] — uniform random arrays within configured bounds.
//! 2. [`sorting`] — step-recording bubble, insertion, merge and quick sort,
//!    all sharing a direction-aware [`sorting::Comparator`].
//! 3. [`snapshot`] — immutable steps and the sequence that holds them.
//! 4. [`playback`] — the [`playback::Controller`] state machine (Idle /
//!    Running) clocked by the caller.
//! 5. [`config`] — sort settings, speed slider mapping, TOML settings file.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod array;
pub mod config;
pub mod errors;
pub mod playback;
pub mod snapshot;
pub mod sorting;
pub mod ui;

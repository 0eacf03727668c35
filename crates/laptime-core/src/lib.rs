// Rust guideline compliant 2026-02-06

//! Laptime Core Library
//!
//! This crate provides a console timer for command-line tools:
//! - Operation timing with decorated start and completion lines
//! - Total command run time
//! - Human-readable duration formatting
//! - Injectable clock and terminal width for deterministic output
//! - Configuration loading and error types

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod terminal;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ColorMode, TimerConfig, DECORATION_COLUMNS};
pub use error::{Error, Result};
pub use format::{fill, fill_count, format_duration, ELLIPSIS};
pub use terminal::{FixedWidth, TermSize, TerminalWidth};
pub use timer::{ConsoleTimer, MeasureScope, Operation};

// Rust guideline compliant 2026-02-06

//! Laptime CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::{color_choice, should_use_color};

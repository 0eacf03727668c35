// Rust guideline compliant 2026-02-06

//! Command implementations for the Laptime CLI.

pub mod exec;
pub mod format;
pub mod steps;

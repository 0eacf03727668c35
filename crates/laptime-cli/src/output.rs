// Rust guideline compliant 2026-02-06

//! Output formatting module for the Laptime CLI.
//!
//! This module renders formatted durations as plain text or JSON.

use laptime_core::format_duration;
use serde::Serialize;
use serde_json::json;

/// A duration alongside its human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDuration {
    /// Raw duration in milliseconds.
    pub ms: u64,
    /// The rendered string.
    pub formatted: String,
}

impl FormattedDuration {
    /// Formats `ms` with [`format_duration`].
    pub fn new(ms: u64) -> Self {
        Self {
            ms,
            formatted: format_duration(ms),
        }
    }
}

/// Output formatter trait.
///
/// Defines the interface for rendering duration lists.
pub trait OutputFormatter {
    /// Formats a list of durations for display.
    ///
    /// # Arguments
    /// * `durations` - The durations to format
    ///
    /// # Returns
    /// A printable string
    fn format_durations(&self, durations: &[FormattedDuration]) -> String;
}

/// JSON output formatter.
///
/// Emits an array of `{ "ms", "formatted" }` objects for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_durations(&self, durations: &[FormattedDuration]) -> String {
        serde_json::to_string_pretty(durations)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize durations" }).to_string())
    }
}

/// Plain text output formatter, one duration per line.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_durations(&self, durations: &[FormattedDuration]) -> String {
        durations
            .iter()
            .map(|d| d.formatted.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether JSON output was requested
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}

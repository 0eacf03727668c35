// Rust guideline compliant 2026-02-06

//! Implementation of the `laptime format` command.

use crate::output::{FormattedDuration, OutputFormatter};

/// Renders each millisecond value with the given formatter.
///
/// # Arguments
///
/// * `values` - Durations in milliseconds
/// * `formatter` - Plain or JSON formatter
///
/// # Returns
///
/// The text to print.
pub fn execute(values: &[u64], formatter: &dyn OutputFormatter) -> String {
    let durations: Vec<FormattedDuration> =
        values.iter().copied().map(FormattedDuration::new).collect();
    formatter.format_durations(&durations)
}

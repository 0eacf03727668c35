// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the Laptime CLI.
//!
//! This module decides whether timer output is colored and prints
//! status messages to stderr.

use laptime_core::ColorMode;
use std::env;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Resolves the configured color mode into a stream color choice.
///
/// # Arguments
/// * `mode` - The configured color mode
/// * `no_color` - Whether `--no-color` was passed
///
/// # Returns
/// The `ColorChoice` to open stdout with
pub fn color_choice(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }

    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if should_use_color() => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Writes a status message with a colored prefix.
///
/// # Arguments
/// * `out` - Destination stream
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn write_status<W: WriteColor>(
    out: &mut W,
    prefix: &str,
    prefix_color: Color,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true))?;
    write!(out, "{}: ", prefix)?;
    out.reset()?;
    writeln!(out, "{}", message)
}

/// Prints a status message to stderr.
///
/// # Arguments
/// * `choice` - The resolved color choice
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(choice: ColorChoice, prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(choice);
    let _ = write_status(&mut stderr, prefix, prefix_color, message);
}

/// Prints an error message.
pub fn print_error(choice: ColorChoice, message: &str) {
    print_status(choice, "✗", Color::Red, message);
}

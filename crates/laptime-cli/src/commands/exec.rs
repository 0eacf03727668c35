// Rust guideline compliant 2026-02-06

//! Implementation of the `laptime exec` command.
//!
//! Runs a single program as a timed operation and reports the total run time.

use anyhow::{Context, Result};
use laptime_core::{Clock, ConsoleTimer, TerminalWidth};
use std::process::{Command, ExitStatus};
use termcolor::WriteColor;

/// Runs a program inside a measured operation.
///
/// # Arguments
///
/// * `timer` - Timer writing the decoration
/// * `label` - Operation label; defaults to the command line
/// * `command` - Program followed by its arguments
///
/// # Returns
///
/// The program's exit code.
///
/// # Errors
///
/// Returns an error if:
/// - `command` is empty
/// - The program cannot be spawned
/// - The command total cannot be written
pub fn execute<W, C, T>(
    timer: &mut ConsoleTimer<W, C, T>,
    label: Option<String>,
    command: &[String],
) -> Result<i32>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    let (program, args) = command
        .split_first()
        .context("No program given. Usage: laptime exec -- <program> [args...]")?;
    let label = label.unwrap_or_else(|| command.join(" "));

    timer.start_command_timer();
    let status = timer.measure(&label, || run_program(program, args))?;
    timer.display_command_time()?;

    Ok(exit_code(status))
}

/// Spawns `program` with inherited stdio and waits for it.
///
/// # Errors
///
/// Returns an error if the program cannot be spawned.
pub fn run_program(program: &str, args: &[String]) -> Result<ExitStatus> {
    tracing::debug!(program, ?args, "spawning");
    Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run '{}'", program))
}

/// Maps an exit status to a process exit code; signals become 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

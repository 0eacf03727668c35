// Rust guideline compliant 2026-02-06

//! Implementation of the `laptime steps` command.
//!
//! Runs a TOML list of steps one after another, each as a timed operation:
//!
//! ```toml
//! [[step]]
//! label = "Installing dependencies"
//! command = ["npm", "ci"]
//!
//! [[step]]
//! label = "Building"
//! command = ["npm", "run", "build"]
//! ```

use crate::commands::exec::{exit_code, run_program};
use crate::terminal::print_error;
use anyhow::{Context, Result};
use laptime_core::{Clock, ConsoleTimer, TerminalWidth};
use serde::Deserialize;
use std::path::Path;
use termcolor::{ColorChoice, WriteColor};

/// A single step of a steps file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Step {
    /// Label printed on the step's line.
    pub label: String,
    /// Program followed by its arguments.
    pub command: Vec<String>,
}

/// Parsed contents of a steps file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepsFile {
    /// Steps in execution order.
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl StepsFile {
    /// Parses and validates steps from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid, there are no steps, or a step
    /// has an empty command.
    pub fn parse(content: &str) -> Result<Self> {
        let file: StepsFile = toml::from_str(content).context("Invalid steps file")?;

        if file.steps.is_empty() {
            anyhow::bail!("Steps file contains no [[step]] entries");
        }
        if let Some(step) = file.steps.iter().find(|s| s.command.is_empty()) {
            anyhow::bail!("Step '{}' has an empty command", step.label);
        }

        Ok(file)
    }

    /// Reads and parses a steps file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read steps file {}", path.display()))?;
        Self::parse(&content)
    }
}

/// Executes the steps command.
///
/// Stops at the first step exiting unsuccessfully; the command total is
/// printed either way.
///
/// # Arguments
///
/// * `timer` - Timer writing the decoration
/// * `path` - Path to the steps file
/// * `color` - Color choice for the failure message on stderr
///
/// # Returns
///
/// Exit code of the failing step, or 0 if every step succeeded.
///
/// # Errors
///
/// Returns an error if the file is invalid or a program cannot be spawned.
pub fn execute<W, C, T>(
    timer: &mut ConsoleTimer<W, C, T>,
    path: &Path,
    color: ColorChoice,
) -> Result<i32>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    let file = StepsFile::load(path)?;
    run_steps(timer, &file.steps, color)
}

/// Runs already-validated steps.
///
/// # Errors
///
/// Returns an error if a program cannot be spawned or output fails.
pub fn run_steps<W, C, T>(
    timer: &mut ConsoleTimer<W, C, T>,
    steps: &[Step],
    color: ColorChoice,
) -> Result<i32>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    timer.start_command_timer();

    let mut code = 0;
    for step in steps {
        let Some((program, args)) = step.command.split_first() else {
            continue;
        };
        let status = timer.measure(&step.label, || run_program(program, args))?;
        if !status.success() {
            code = exit_code(status);
            print_error(
                color,
                &format!("Step '{}' failed with {}", step.label, status),
            );
            break;
        }
    }

    timer.display_command_time()?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let file = StepsFile::parse(
            r#"
[[step]]
label = "Fetch"
command = ["git", "fetch"]

[[step]]
label = "Test"
command = ["cargo", "test", "--all"]
"#,
        )
        .unwrap();

        assert_eq!(file.steps.len(), 2);
        assert_eq!(file.steps[0].label, "Fetch");
        assert_eq!(file.steps[1].command, vec!["cargo", "test", "--all"]);
    }

    #[test]
    fn test_parse_rejects_empty_file() {
        assert!(StepsFile::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_command() {
        let err = StepsFile::parse("[[step]]\nlabel = \"Nothing\"\ncommand = []\n").unwrap_err();
        assert!(err.to_string().contains("Nothing"));
    }

    #[test]
    fn test_parse_rejects_missing_label() {
        assert!(StepsFile::parse("[[step]]\ncommand = [\"true\"]\n").is_err());
    }
}

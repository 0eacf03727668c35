// Rust guideline compliant 2026-02-06

//! The console timer.
//!
//! A [`ConsoleTimer`] is held by a command and writes two decorated lines per
//! operation: one when the operation starts and one when it finishes. It can
//! also report the total time of the whole command run.
//!
//! ```text
//!   09:30:15 Compiling ........................................ 1.50s DONE
//!
//!   Completed in: 2m 3s
//! ```

use crate::clock::{elapsed_millis, Clock, SystemClock};
use crate::config::TimerConfig;
use crate::format::{fill, fill_count, format_duration};
use crate::terminal::{TermSize, TerminalWidth};
use crate::Result;
use chrono::{DateTime, Local};
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::{debug, warn};

const DONE_LABEL: &str = "DONE";
const COMPLETED_LABEL: &str = "Completed in:";

/// An operation that has been started and not yet finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    started_at: DateTime<Local>,
    message: String,
}

impl Operation {
    /// The label passed to [`ConsoleTimer::start_measure`].
    pub fn message(&self) -> &str {
        &self.message
    }

    fn time_string(&self) -> String {
        self.started_at.format("%H:%M:%S").to_string()
    }
}

/// Measures and prints elapsed time for operations and for a whole command.
///
/// The output sink, clock and terminal width query are injected, so a test can
/// pair a [`termcolor::Buffer`] with a [`ManualClock`](crate::ManualClock) and
/// a [`FixedWidth`](crate::FixedWidth).
///
/// Starting a second operation before finishing the first replaces the pending
/// one; its completion line is never written.
pub struct ConsoleTimer<W, C = SystemClock, T = TermSize> {
    output: W,
    clock: C,
    terminal: T,
    config: TimerConfig,
    command_started_at: Option<DateTime<Local>>,
    operation: Option<Operation>,
}

impl<W: WriteColor> ConsoleTimer<W> {
    /// Creates a timer writing to `output` with default settings.
    pub fn new(output: W) -> Self {
        Self::with_config(output, TimerConfig::default())
    }

    /// Creates a timer writing to `output` using the wall clock and the real
    /// terminal width.
    pub fn with_config(output: W, config: TimerConfig) -> Self {
        let terminal = TermSize::new(config.fallback_width);
        Self::with_parts(output, SystemClock, terminal, config)
    }
}

impl<W, C, T> ConsoleTimer<W, C, T>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    /// Creates a timer from explicit collaborators.
    pub fn with_parts(output: W, clock: C, terminal: T, config: TimerConfig) -> Self {
        Self {
            output,
            clock,
            terminal,
            config,
            command_started_at: None,
            operation: None,
        }
    }

    /// Records the current time as the start of the command.
    ///
    /// Calling it again resets the baseline.
    pub fn start_command_timer(&mut self) {
        self.command_started_at = Some(self.clock.now());
    }

    /// Starts measuring an operation and writes its start line.
    ///
    /// The line holds the start time and `message` and is left open so the
    /// completion line continues it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be written.
    pub fn start_measure(&mut self, message: &str) -> Result<()> {
        if let Some(pending) = &self.operation {
            debug!(operation = %pending.message, "discarding unfinished operation");
        }

        let operation = Operation {
            started_at: self.clock.now(),
            message: message.to_string(),
        };
        let time_string = operation.time_string();
        // An empty label leaves nothing pending, so finishing it is a no-op.
        self.operation = (!message.is_empty()).then_some(operation);
        debug!(operation = message, "operation started");

        write!(self.output, "{:indent$}", "", indent = self.config.indent)?;
        self.output.set_color(&gray())?;
        write!(self.output, "{}", time_string)?;
        self.output.reset()?;
        write!(self.output, " {} ", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Finishes the pending operation and writes its completion line.
    ///
    /// Does nothing when no operation is pending. The pending operation is
    /// cleared even if writing fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be written.
    pub fn finish_measure(&mut self) -> Result<()> {
        let Some(operation) = self.operation.take() else {
            return Ok(());
        };
        self.display_operation_time(&operation)
    }

    /// Runs `callback` between a start line and a completion line.
    ///
    /// The completion line is written on every exit path, including when the
    /// callback returns an `Err` or panics; the callback's value (or panic)
    /// then reaches the caller unchanged. Failures writing the decoration are
    /// logged rather than returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use laptime_core::ConsoleTimer;
    /// use termcolor::Buffer;
    ///
    /// let mut timer = ConsoleTimer::new(Buffer::no_color());
    /// let answer = timer.measure("Thinking", || 42);
    /// assert_eq!(answer, 42);
    /// ```
    pub fn measure<R, F>(&mut self, message: &str, callback: F) -> R
    where
        F: FnOnce() -> R,
    {
        let scope = self.scope(message);
        let result = callback();
        drop(scope);
        result
    }

    /// Starts an operation that finishes when the returned guard is dropped.
    ///
    /// Use [`MeasureScope::finish`] to observe write errors on the completion
    /// line; a plain drop logs them instead.
    pub fn scope(&mut self, message: &str) -> MeasureScope<'_, W, C, T> {
        if let Err(err) = self.start_measure(message) {
            warn!(error = %err, "failed to write start line");
        }
        MeasureScope {
            timer: self,
            finished: false,
        }
    }

    fn display_operation_time(&mut self, operation: &Operation) -> Result<()> {
        let elapsed_ms = elapsed_millis(operation.started_at, self.clock.now());
        let duration = format_duration(elapsed_ms);
        debug!(operation = %operation.message, elapsed_ms, "operation finished");

        let content_len = operation.message.chars().count()
            + operation.time_string().chars().count()
            + duration.chars().count();
        let count = fill_count(
            self.terminal.width(),
            self.config.reserved_columns,
            content_len,
        );
        let dots = fill(self.config.fill_char, count);

        self.output.set_color(&gray())?;
        write!(self.output, "{}", dots)?;
        self.output.reset()?;
        write!(self.output, " {} ", duration)?;
        self.output.set_color(&done())?;
        write!(self.output, "{}", DONE_LABEL)?;
        self.output.reset()?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes the total time since [`start_command_timer`](Self::start_command_timer).
    ///
    /// Does nothing if the command timer was never started.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be written.
    pub fn display_command_time(&mut self) -> Result<()> {
        let Some(started_at) = self.command_started_at else {
            return Ok(());
        };

        let elapsed_ms = elapsed_millis(started_at, self.clock.now());
        let duration = format_duration(elapsed_ms);
        debug!(elapsed_ms, "command finished");

        writeln!(self.output)?;
        write!(self.output, "{:indent$}", "", indent = self.config.indent)?;
        self.output.set_color(&green())?;
        write!(self.output, "{}", COMPLETED_LABEL)?;
        self.output.reset()?;
        writeln!(self.output, " {}", duration)?;
        self.output.flush()?;
        Ok(())
    }

    /// Whether an operation has been started and not finished.
    pub fn is_measuring(&self) -> bool {
        self.operation.is_some()
    }

    /// The pending operation, if any.
    pub fn pending(&self) -> Option<&Operation> {
        self.operation.as_ref()
    }

    /// The active configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the timer and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Guard returned by [`ConsoleTimer::scope`].
///
/// Writes the completion line when finished or dropped, whichever comes first.
#[must_use = "the operation finishes as soon as the scope is dropped"]
pub struct MeasureScope<'a, W, C, T>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    timer: &'a mut ConsoleTimer<W, C, T>,
    finished: bool,
}

impl<W, C, T> MeasureScope<'_, W, C, T>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    /// Finishes the operation now.
    ///
    /// # Errors
    ///
    /// Returns an error if the completion line cannot be written.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        self.timer.finish_measure()
    }
}

impl<W, C, T> Drop for MeasureScope<'_, W, C, T>
where
    W: WriteColor,
    C: Clock,
    T: TerminalWidth,
{
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(err) = self.timer.finish_measure() {
            warn!(error = %err, "failed to write completion line");
        }
    }
}

/// Bright black, rendered as gray by most terminals.
fn gray() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Black)).set_intense(true);
    spec
}

fn green() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green));
    spec
}

fn done() -> ColorSpec {
    let mut spec = green();
    spec.set_bold(true);
    spec
}

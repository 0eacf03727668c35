// Rust guideline compliant 2026-02-06

//! Integration tests for the console timer's `measure` guarantees.

use chrono::{Local, TimeZone};
use laptime_core::{ConsoleTimer, FixedWidth, ManualClock, TimerConfig};
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use termcolor::{Buffer, ColorSpec, WriteColor};

type TestTimer = ConsoleTimer<Buffer, ManualClock, FixedWidth>;

fn create_timer() -> (TestTimer, ManualClock) {
    let start = Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let clock = ManualClock::new(start);
    let timer = ConsoleTimer::with_parts(
        Buffer::no_color(),
        clock.clone(),
        FixedWidth(80),
        TimerConfig::default(),
    );
    (timer, clock)
}

fn output_of(timer: &TestTimer) -> String {
    String::from_utf8(timer.output().as_slice().to_vec()).expect("Output should be UTF-8")
}

#[derive(Debug, PartialEq, Eq)]
struct DeployError(&'static str);

#[test]
fn test_measure_propagates_callback_error_after_done() {
    let (mut timer, clock) = create_timer();

    let result: Result<u32, DeployError> = timer.measure("Deploying", || {
        clock.advance_millis(2500);
        Err(DeployError("host unreachable"))
    });

    assert_eq!(result, Err(DeployError("host unreachable")));
    let output = output_of(&timer);
    assert!(output.starts_with("  15:09:26 Deploying "));
    assert!(output.ends_with(" 2.50s DONE\n"));
    assert!(!timer.is_measuring());
}

#[test]
fn test_measure_returns_ok_value() {
    let (mut timer, clock) = create_timer();

    let result: Result<&str, DeployError> = timer.measure("Fetching", || {
        clock.advance_millis(65_000);
        Ok("fetched")
    });

    assert_eq!(result, Ok("fetched"));
    let output = output_of(&timer);
    assert_eq!(output.matches("Fetching").count(), 1);
    assert_eq!(output.matches("DONE").count(), 1);
    assert_eq!(output.lines().count(), 1);
    assert!(output.ends_with(" 1m 5s DONE\n"));
}

#[test]
fn test_measure_writes_done_when_callback_panics() {
    let (mut timer, _clock) = create_timer();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        timer.measure::<(), _>("Exploding", || panic!("boom"))
    }));

    let payload = outcome.expect_err("Panic should propagate out of measure");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
    assert!(output_of(&timer).ends_with(" DONE\n"));
    assert!(!timer.is_measuring());
}

#[test]
fn test_measure_with_question_mark_in_callback() {
    let (mut timer, _clock) = create_timer();

    let parse = |raw: &str| -> Result<u32, std::num::ParseIntError> {
        let value: u32 = raw.parse()?;
        Ok(value * 2)
    };

    let ok = timer.measure("Parsing", || parse("21"));
    let err = timer.measure("Parsing", || parse("twenty"));

    assert_eq!(ok, Ok(42));
    assert!(err.is_err());
    assert_eq!(output_of(&timer).matches("DONE").count(), 2);
}

#[test]
fn test_full_command_run() {
    let (mut timer, clock) = create_timer();

    timer.start_command_timer();
    timer.measure("Resolving", || clock.advance_millis(300));
    timer.measure("Building", || clock.advance_millis(4200));
    timer.display_command_time().unwrap();

    let output = output_of(&timer);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(" 300ms DONE"));
    assert!(lines[1].ends_with(" 4.20s DONE"));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "  Completed in: 4.50s");
}

#[test]
fn test_completion_line_fills_terminal_width() {
    let (mut timer, clock) = create_timer();

    timer.measure("Indexing", || clock.advance_millis(12));

    let output = output_of(&timer);
    let line = output.trim_end_matches('\n');
    // The fill leaves 13 columns for indent, separators and the label,
    // of which the line itself uses 10.
    assert_eq!(line.chars().count(), 80 - 3);
}

#[test]
fn test_wide_indent_with_matching_reserve_stays_within_width() {
    let start = Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let config = TimerConfig {
        indent: 6,
        reserved_columns: 6 + laptime_core::DECORATION_COLUMNS,
        ..TimerConfig::default()
    };
    config.validate().expect("Config should be valid");
    let mut timer = ConsoleTimer::with_parts(
        Buffer::no_color(),
        ManualClock::new(start),
        FixedWidth(80),
        config,
    );

    timer.measure("Indexing", || ());

    let output = output_of(&timer);
    let line = output.trim_end_matches('\n');
    assert!(line.starts_with("      15:09:26 Indexing "));
    assert_eq!(line.chars().count(), 80 - 3);
}

/// Sink that rejects every write.
struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

impl WriteColor for BrokenSink {
    fn supports_color(&self) -> bool {
        false
    }

    fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_errors_surface_from_direct_calls() {
    let start = Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let mut timer = ConsoleTimer::with_parts(
        BrokenSink,
        ManualClock::new(start),
        FixedWidth(80),
        TimerConfig::default(),
    );

    assert!(timer.start_measure("Writing").is_err());
    assert!(timer.finish_measure().is_err());
    assert!(!timer.is_measuring(), "Pending operation should be cleared");
    assert!(timer.finish_measure().is_ok());
}

#[test]
fn test_sink_errors_do_not_replace_callback_value() {
    let start = Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let mut timer = ConsoleTimer::with_parts(
        BrokenSink,
        ManualClock::new(start),
        FixedWidth(80),
        TimerConfig::default(),
    );

    let value = timer.measure("Writing", || 99);
    assert_eq!(value, 99);
}

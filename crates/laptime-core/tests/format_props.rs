// Rust guideline compliant 2026-02-06

//! Property-based tests for duration formatting and fill padding.

use laptime_core::{fill, fill_count, format_duration, ELLIPSIS};
use proptest::prelude::*;

/// Parses a humanized string such as "1h 2m 3s" back into seconds.
fn humanized_seconds(text: &str) -> u64 {
    text.split(' ')
        .map(|part| {
            let split = part.find(|c: char| !c.is_ascii_digit()).unwrap();
            let (count, unit) = part.split_at(split);
            let count: u64 = count.parse().unwrap();
            let size = match unit {
                "w" => 604_800,
                "d" => 86_400,
                "h" => 3_600,
                "m" => 60,
                "s" => 1,
                other => panic!("unexpected unit {other}"),
            };
            count * size
        })
        .sum()
}

proptest! {
    /// Sub-second durations render as whole milliseconds.
    #[test]
    fn prop_millisecond_bucket(ms in 0u64..1000) {
        let text = format_duration(ms);
        prop_assert_eq!(text, format!("{}ms", ms));
    }

    /// Durations under a minute render as seconds with two decimals.
    #[test]
    fn prop_second_bucket(ms in 1000u64..60_000) {
        let text = format_duration(ms);
        prop_assert!(text.ends_with('s'));
        prop_assert!(!text.ends_with("ms"));

        let number = text.trim_end_matches('s');
        let (_, decimals) = number.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);

        let seconds: f64 = number.parse().unwrap();
        prop_assert!((seconds - ms as f64 / 1000.0).abs() < 0.0051);
    }

    /// Minute-plus durations humanize to the whole seconds they contain.
    #[test]
    fn prop_humanized_bucket(ms in 60_000u64..10_000_000_000) {
        let text = format_duration(ms);
        prop_assert!(!text.contains('.'));
        prop_assert!(!text.ends_with("ms"));
        prop_assert_eq!(humanized_seconds(&text), ms / 1000);
    }

    /// Fill length is `max(width - reserved - content, 0)`.
    #[test]
    fn prop_fill_count(width in 0usize..400, content in 0usize..400) {
        let expected = (width as i64 - 13 - content as i64).max(0) as usize;
        prop_assert_eq!(fill_count(width, 13, content), expected);
    }

    /// Fill never renders empty.
    #[test]
    fn prop_fill_never_empty(count in 0usize..200) {
        let run = fill('.', count);
        if count == 0 {
            prop_assert_eq!(run, ELLIPSIS);
        } else {
            prop_assert_eq!(run.chars().count(), count);
        }
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(format_duration(42), "42ms");
    assert_eq!(format_duration(1500), "1.50s");
    assert_eq!(format_duration(65_000), "1m 5s");
}

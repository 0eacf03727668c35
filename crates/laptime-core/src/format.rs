// Rust guideline compliant 2026-02-06

//! Duration strings and fill padding.

/// Placeholder used when there is no room for fill characters.
pub const ELLIPSIS: &str = "…";

const UNITS: [(u64, &str); 5] = [
    (7 * 24 * 60 * 60, "w"),
    (24 * 60 * 60, "d"),
    (60 * 60, "h"),
    (60, "m"),
    (1, "s"),
];

/// Formats a duration given in milliseconds.
///
/// - one minute or more: short humanized form, largest unit first (`"1m 5s"`)
/// - one second or more: seconds with two decimals (`"1.50s"`)
/// - otherwise: whole milliseconds (`"42ms"`)
///
/// # Examples
///
/// ```
/// use laptime_core::format_duration;
///
/// assert_eq!(format_duration(42), "42ms");
/// assert_eq!(format_duration(1500), "1.50s");
/// assert_eq!(format_duration(65_000), "1m 5s");
/// ```
pub fn format_duration(millis: u64) -> String {
    if millis >= 60_000 {
        return humanize_short(millis / 1000);
    }

    if millis >= 1000 {
        // Round half up on centiseconds to avoid binary float artifacts.
        let centis = (millis + 5) / 10;
        return format!("{}.{:02}s", centis / 100, centis % 100);
    }

    format!("{}ms", millis)
}

/// Renders whole seconds as space separated unit parts, skipping zeros.
fn humanize_short(mut secs: u64) -> String {
    let mut parts = Vec::new();
    for (size, unit) in UNITS {
        let count = secs / size;
        if count > 0 {
            parts.push(format!("{}{}", count, unit));
            secs %= size;
        }
    }

    if parts.is_empty() {
        return "0s".to_string();
    }
    parts.join(" ")
}

/// Number of fill characters for a completion line.
///
/// `content_len` is the character count of the message, the start time and
/// the duration combined.
pub fn fill_count(terminal_width: usize, reserved: usize, content_len: usize) -> usize {
    terminal_width
        .saturating_sub(reserved)
        .saturating_sub(content_len)
}

/// Builds the fill run, or [`ELLIPSIS`] when the count is zero.
pub fn fill(fill_char: char, count: usize) -> String {
    if count == 0 {
        return ELLIPSIS.to_string();
    }
    std::iter::repeat(fill_char).take(count).collect()
}

// Rust guideline compliant 2026-02-06

//! Terminal width detection.
//!
//! `COLUMNS` takes precedence over the terminal query so piped output can
//! still be padded to a chosen width.

/// Source of the terminal's column count.
pub trait TerminalWidth {
    /// Returns the current width in columns.
    fn width(&self) -> usize;
}

/// Queries the controlling terminal, falling back to a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct TermSize {
    fallback: usize,
}

impl TermSize {
    /// Creates a query that reports `fallback` when no terminal is attached.
    pub fn new(fallback: usize) -> Self {
        Self { fallback }
    }
}

impl Default for TermSize {
    fn default() -> Self {
        Self::new(80)
    }
}

impl TermSize {
    /// Resolves the width, reading `COLUMNS` through `lookup`.
    ///
    /// Order: a positive `COLUMNS`, then the terminal query, then the fallback.
    pub fn width_with<F>(&self, lookup: F) -> usize
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("COLUMNS")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .or_else(|| term_size::dimensions().map(|(w, _)| w).filter(|w| *w > 0))
            .unwrap_or(self.fallback)
    }
}

impl TerminalWidth for TermSize {
    fn width(&self) -> usize {
        self.width_with(|key| std::env::var(key).ok())
    }
}

/// Always reports the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn width(&self) -> usize {
        self.0
    }
}

// Rust guideline compliant 2026-02-06

//! Configuration management for Laptime.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color preference for timer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

/// Columns of the completion line besides the indent and the content: four
/// separator spaces, the `DONE` label and a three-column margin.
pub const DECORATION_COLUMNS: usize = 11;

/// Configuration for the console timer's decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Leading spaces before the start line and the command total.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Columns kept free of fill characters on the completion line.
    ///
    /// Must be at least `indent + DECORATION_COLUMNS` so the line fits the
    /// terminal.
    #[serde(default = "default_reserved_columns")]
    pub reserved_columns: usize,

    /// Character repeated to pad the completion line.
    #[serde(default = "default_fill_char")]
    pub fill_char: char,

    /// Width used when the terminal size cannot be queried.
    #[serde(default = "default_fallback_width")]
    pub fallback_width: usize,

    /// Whether to colorize output.
    #[serde(default)]
    pub color: ColorMode,
}

fn default_indent() -> usize {
    2
}

/// Leaves room for the indent, separators and the `DONE` label.
fn default_reserved_columns() -> usize {
    13
}

fn default_fill_char() -> char {
    '.'
}

fn default_fallback_width() -> usize {
    80
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            reserved_columns: default_reserved_columns(),
            fill_char: default_fill_char(),
            fallback_width: default_fallback_width(),
            color: ColorMode::default(),
        }
    }
}

impl TimerConfig {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `config_path`, when it exists
    /// 3. Environment variables with `LAPTIME_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to a `laptime.toml` file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `LAPTIME_*` overrides read through `lookup`.
    ///
    /// Supported variables:
    /// - `LAPTIME_INDENT` - Leading spaces
    /// - `LAPTIME_RESERVED_COLUMNS` - Columns kept free of fill
    /// - `LAPTIME_FILL_CHAR` - Single fill character
    /// - `LAPTIME_FALLBACK_WIDTH` - Width when the terminal cannot be queried
    /// - `LAPTIME_COLOR` - auto/always/never
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("LAPTIME_INDENT") {
            self.indent = val.parse().map_err(|_| {
                Error::Config("LAPTIME_INDENT must be a non-negative number".to_string())
            })?;
        }

        if let Some(val) = lookup("LAPTIME_RESERVED_COLUMNS") {
            self.reserved_columns = val.parse().map_err(|_| {
                Error::Config("LAPTIME_RESERVED_COLUMNS must be a non-negative number".to_string())
            })?;
        }

        if let Some(val) = lookup("LAPTIME_FILL_CHAR") {
            let mut chars = val.chars();
            self.fill_char = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(Error::Config(
                        "LAPTIME_FILL_CHAR must be exactly one character".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("LAPTIME_FALLBACK_WIDTH") {
            self.fallback_width = val.parse().map_err(|_| {
                Error::Config("LAPTIME_FALLBACK_WIDTH must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("LAPTIME_COLOR") {
            self.color = match val.as_str() {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => {
                    return Err(Error::Config(
                        "LAPTIME_COLOR must be auto, always, or never".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - fill_char is a control character
    /// - fallback_width is zero
    /// - reserved_columns is too small for the indent
    pub fn validate(&self) -> Result<()> {
        if self.fill_char.is_control() {
            return Err(Error::Config(format!(
                "fill_char must be printable, got {:?}",
                self.fill_char
            )));
        }

        if self.fallback_width == 0 {
            return Err(Error::Config(
                "fallback_width must be greater than 0".to_string(),
            ));
        }

        let min_reserved = self.indent + DECORATION_COLUMNS;
        if self.reserved_columns < min_reserved {
            return Err(Error::Config(format!(
                "reserved_columns must be at least indent + {} = {}, got {}",
                DECORATION_COLUMNS, min_reserved, self.reserved_columns
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

// Rust guideline compliant 2026-02-06

//! Error types for the Laptime core library.

use thiserror::Error;

/// Result type alias for Laptime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Laptime operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output sink or reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),
}

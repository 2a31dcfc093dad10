// File: crates/growth-core/src/error.rs
// Summary: Error types. Validation outcomes are values shown to the user; operational failures are `GrowthError`.

use thiserror::Error;

/// Why a form snapshot did not produce a projection.
/// `Display` yields the message shown in place of the headline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter values to start")]
    MissingValues,
    #[error("Please enter realistic values")]
    Unrealistic,
}

#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode chart as PNG")]
    Encode,

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),

    #[error("nothing to export: {0}")]
    NothingToExport(ValidationError),
}

pub type Result<T, E = GrowthError> = std::result::Result<T, E>;

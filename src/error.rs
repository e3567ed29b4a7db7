//! Library error type.

use std::path::PathBuf;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while configuring, formatting or compositing.
///
/// Malformed escape sequences inside stored grid content are deliberately
/// absent from this list: the tokenizer degrades them to literal cells.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid color bounds: min {min} must not exceed max {max}")]
    InvalidBounds { min: u8, max: u8 },

    #[error("Initial color value {value} lies outside {min}-{max}")]
    ValueOutOfRange { value: u8, min: u8, max: u8 },

    #[error("Color increment must be a finite number (got {0})")]
    NonFiniteIncrement(f64),

    #[error("Unknown color mode '{0}' (expected 'rgb' or 'palette')")]
    UnknownColorMode(String),

    #[error("Color {color} cannot be used in {mode} mode")]
    ColorModeMismatch { mode: &'static str, color: String },

    #[error("Unknown gradient preset '{0}'")]
    UnknownPreset(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Invalid settings file {path}: {source}")]
    InvalidSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read settings file {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this is a configuration problem detected before any grid I/O.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}

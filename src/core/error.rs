//! Error types for configuration and asset loading.

use thiserror::Error;

/// Errors that make the game configuration unusable.
///
/// These are fatal at startup: the game refuses to open a window with a
/// configuration it cannot lay out or schedule.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// No hole grid is defined for this many holes.
    #[error("Unsupported hole count {0} (expected 6, 9 or 12)")]
    UnsupportedHoleCount(usize),

    /// The hole grid is larger than the screen.
    #[error("{holes} holes of {hole_size}px do not fit on a {width}x{height} screen")]
    GridDoesNotFit {
        holes: usize,
        hole_size: f32,
        width: f32,
        height: f32,
    },

    /// Spawn interval bounds are inverted or not positive.
    #[error("Invalid spawn interval {min}..{max}")]
    InvalidSpawnInterval { min: f32, max: f32 },

    /// At least one target must be allowed on screen.
    #[error("Concurrency cap must be at least 1")]
    ZeroConcurrencyCap,

    /// A duration or size that must be strictly positive.
    #[error("'{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// Rounds must last at least a second.
    #[error("Round length must be at least one second")]
    ZeroRoundLength,
}

/// Errors raised while resolving asset files on disk.
///
/// Always recoverable: callers log them and fall back to placeholders.
#[derive(Debug, Error)]
pub enum AssetError {
    /// File could not be found under the asset root.
    #[error("Asset not found: {0}")]
    FileNotFound(String),

    /// Some frames of an animation sequence are missing.
    #[error("Sequence '{sequence}' is missing {missing} of {expected} frames")]
    MissingFrames {
        sequence: String,
        missing: usize,
        expected: usize,
    },
}

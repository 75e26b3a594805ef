//! Error type shared by every core operation.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors raised at the API boundary of the automaton core.
///
/// Geometry never produces an error: out-of-range coordinates under the
/// bounded edge policy are clipped cell by cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// Rule preset name not present in the catalog.
    #[error("unknown rule preset: {0}")]
    UnknownRulePreset(String),

    /// Pattern name not present in the catalog.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Edit tool name not recognized.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Two buffers that must share dimensions do not.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, got.0, got.1)]
    DimensionMismatch {
        /// Dimensions of the reference buffer (cols, rows).
        expected: (usize, usize),
        /// Dimensions actually supplied (cols, rows).
        got: (usize, usize),
    },

    /// Raw cell buffer does not hold cols * rows entries.
    #[error("buffer length {got} does not match {expected} cells")]
    InvalidBufferLength {
        /// cols * rows
        expected: usize,
        /// Length supplied.
        got: usize,
    },

    /// Raw cell buffer holds a byte other than 0 or 1.
    #[error("invalid cell state {value} at index {index}")]
    InvalidCellState {
        /// Offending index.
        index: usize,
        /// Offending byte.
        value: u8,
    },

    /// Brush size must be a positive integer.
    #[error("invalid brush size: {0}")]
    InvalidBrushSize(u32),

    /// Random fill density outside [0, 1].
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    /// Simulation speed that is not finite or lies outside the supported range.
    #[error("speed must be within [{min}, {max}] generations per second, got {value}")]
    InvalidSpeed {
        /// Value supplied.
        value: f32,
        /// Lowest supported speed.
        min: f32,
        /// Highest supported speed.
        max: f32,
    },

    /// Heat decay or ceiling that is not a finite positive number.
    #[error("{name} must be a finite positive number, got {value}")]
    InvalidHeatParameter {
        /// Parameter name.
        name: &'static str,
        /// Value supplied.
        value: f32,
    },
}

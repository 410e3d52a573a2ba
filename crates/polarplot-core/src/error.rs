//! Error handling for Polarplot
//!
//! Provides error types for every layer of the plotter pipeline:
//! - Kinematics errors (unreachable or imaginary spool solutions)
//! - Configuration errors (invalid step sizes, geometry, coordinates)
//! - Transcript errors (reading and writing command files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Kinematics error type
///
/// Raised when a pair of string lengths cannot be turned back into a
/// position on the drawing surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The strings are too short to meet: `left + right < spool_distance`
    #[error(
        "Taut string: lengths {left} + {right} cannot span spool distance {spool_distance}"
    )]
    TautString {
        /// Left string length.
        left: f64,
        /// Right string length.
        right: f64,
        /// Distance between the anchors.
        spool_distance: f64,
    },

    /// The two length circles do not intersect, the y coordinate is imaginary
    #[error("Geometry error: lengths ({left}, {right}) give imaginary y (radicand {radicand})")]
    Geometry {
        /// Left string length.
        left: f64,
        /// Right string length.
        right: f64,
        /// The negative value that would have been square-rooted.
        radicand: f64,
    },
}

/// Configuration error type
///
/// Rejected before any traversal starts, so no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size, count, or distance that must be strictly positive was not
    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A coordinate or parameter was NaN or infinite
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFinite {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Transcript error type
///
/// Represents errors related to reading and writing step command transcripts.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// A line did not hold exactly three symbols
    #[error("Invalid command at line {line_number}: expected 3 symbols, got {line:?}")]
    InvalidLength {
        /// The 1-based line number.
        line_number: usize,
        /// The offending line, trimmed.
        line: String,
    },

    /// A symbol outside `+`, `-`, `.` was found
    #[error("Invalid symbol {symbol:?} at line {line_number}")]
    InvalidSymbol {
        /// The 1-based line number.
        line_number: usize,
        /// The offending character.
        symbol: char,
    },

    /// I/O error while reading or writing a transcript
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Main error type for Polarplot
///
/// Unified error type that can represent any error that occurs in the library.
#[derive(Error, Debug)]
pub enum Error {
    /// Kinematics error
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transcript error
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

/// Result type alias for Polarplot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects NaN and infinities.
pub fn ensure_finite(name: &'static str, value: f64) -> std::result::Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

/// Rejects zero, negative, and non-finite values.
pub fn ensure_positive(name: &'static str, value: f64) -> std::result::Result<f64, ConfigError> {
    let value = ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

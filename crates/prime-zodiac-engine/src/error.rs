//! Error types for prime-zodiac-engine.
//!
//! This module defines the central error type [`EngineError`] covering the
//! three caller-contract violations the engine can detect, along with the
//! [`EngineResult<T>`] type alias.
//!
//! Conditions that merely look erroneous are not errors here: a separation
//! matching no aspect yields `None`, degree inputs outside `[0, 360)` are
//! normalized, and non-positive bijective-ternary inputs take the
//! documented degenerate encoding.
//!
//! # Examples
//!
//! ```rust
//! use prime_zodiac_engine::EngineError;
//!
//! let error = EngineError::IncompleteHouseTable { expected: 13, actual: 7 };
//! assert!(error.to_string().contains("13"));
//! ```

use thiserror::Error;

use prime_zodiac_core::CoreError;

/// Top-level error type for engine operations.
///
/// Each variant marks a caller contract violation; none are retried or
/// silently recovered.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A ternary value or tag does not fit any recognized representation
    #[error("Invalid ternary representation: {reason}")]
    InvalidRepresentation {
        /// What was unrecognized or out of range
        reason: String,
    },

    /// A date outside the supported historical domain
    #[error("Date {date} is out of range: phase years before {min_year} are not supported")]
    DateOutOfRange {
        /// The rejected input date (ISO-8601)
        date: String,
        /// First supported Gregorian year
        min_year: i32,
    },

    /// House resolution was given fewer than 13 cusps
    #[error("House table must contain {expected} cusps, got {actual}; membership is indeterminate")]
    IncompleteHouseTable {
        /// Required cusp count (always 13)
        expected: usize,
        /// Cusp count actually supplied
        actual: usize,
    },

    /// A static table failed validation
    #[error(transparent)]
    Table(#[from] CoreError),

    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

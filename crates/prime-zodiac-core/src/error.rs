//! Error types for prime-zodiac-core.
//!
//! This module defines the central error type [`CoreError`] used by table
//! validation, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use prime_zodiac_core::{CoreError, tables::SignTable};
//!
//! let mut table = SignTable::default();
//! table.entries.pop();
//!
//! match table.validate() {
//!     Err(CoreError::WrongEntryCount { expected, actual }) => {
//!         assert_eq!(expected, 13);
//!         assert_eq!(actual, 12);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Top-level error type for prime-zodiac-core table validation.
///
/// Provides structured variants for every way a phase table or aspect
/// catalog can violate the ring invariants, enabling precise error handling
/// and informative messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A phase table does not contain exactly 13 entries
    #[error("Phase table must contain exactly {expected} entries, got {actual}")]
    WrongEntryCount {
        /// Required entry count (always 13)
        expected: usize,
        /// Entry count actually supplied
        actual: usize,
    },

    /// A phase arc does not match its slot `[i*28, (i+1)*28)`
    #[error(
        "Phase arc at index {index} is [{start}, {end}), expected [{expected_start}, {expected_end})"
    )]
    ArcMismatch {
        /// Table index of the offending record
        index: usize,
        /// Supplied arc start
        start: f64,
        /// Supplied arc end
        end: f64,
        /// Required arc start for this slot
        expected_start: f64,
        /// Required arc end for this slot
        expected_end: f64,
    },

    /// A table record carries an empty display name
    #[error("Phase table entry at index {index} has an empty name")]
    EmptyName {
        /// Table index of the offending record
        index: usize,
    },

    /// An aspect definition is outside the documented ranges
    #[error("Aspect '{name}' is invalid: {reason}")]
    InvalidAspect {
        /// Aspect display name
        name: String,
        /// What was out of range
        reason: String,
    },

    /// The weekday cycle does not contain exactly 7 names
    #[error("Weekday cycle must contain exactly {expected} names, got {actual}")]
    WrongWeekdayCount {
        /// Required name count (always 7)
        expected: usize,
        /// Name count actually supplied
        actual: usize,
    },
}

/// Result alias for table validation.
pub type CoreResult<T> = Result<T, CoreError>;

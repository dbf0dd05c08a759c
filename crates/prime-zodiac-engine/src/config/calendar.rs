//! Calendar epoch and irregular-day settings.
//!
//! Two epoch rule sets exist historically and are not reconcilable; they
//! are kept as distinct presets and never merged:
//!
//! - **Canonical** (the default): year anchored at April 1, leap-aware. The
//!   Day Out of Time falls 225 days after the anchor, and when the
//!   following Gregorian year is a leap year its Feb 29 is inserted outside
//!   the 13 × 28 grid.
//! - **Legacy Dreamspell** ([`CalendarConfig::legacy_dreamspell`]): year
//!   anchored at July 26, same day-225 offset, no leap-day handling.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Settings for the Gregorian to 13-phase calendar mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Gregorian month of the epoch anchor (1..=12).
    pub epoch_month: u32,

    /// Gregorian day-of-month of the epoch anchor (1..=28, so the anchor
    /// exists in every Gregorian year).
    pub epoch_day: u32,

    /// Whether Feb 29 of the following leap year is inserted as an
    /// irregular day outside the grid.
    pub insert_leap_day: bool,

    /// First supported Gregorian phase year; earlier dates are rejected
    /// with `DateOutOfRange` rather than clamped.
    pub min_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            epoch_month: 4,
            epoch_day: 1,
            insert_leap_day: true,
            min_year: 1,
        }
    }
}

impl CalendarConfig {
    /// The legacy Dreamspell variant: July 26 anchor, no leap-day
    /// insertion.
    pub fn legacy_dreamspell() -> Self {
        Self {
            epoch_month: 7,
            epoch_day: 26,
            insert_leap_day: false,
            ..Default::default()
        }
    }

    /// Validate the anchor date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if the anchor month/day pair
    /// does not exist in every Gregorian year.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.epoch_month) {
            return Err(EngineError::Configuration(format!(
                "epoch_month must be in 1..=12, got {}",
                self.epoch_month
            )));
        }
        if !(1..=28).contains(&self.epoch_day) {
            return Err(EngineError::Configuration(format!(
                "epoch_day must be in 1..=28, got {}",
                self.epoch_day
            )));
        }
        Ok(())
    }
}

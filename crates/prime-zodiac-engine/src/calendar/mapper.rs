//! The Gregorian to 13-phase mapping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use prime_zodiac_core::{WeekdayCycle, CYCLE_EPOCH_OFFSET, PHASE_COUNT};

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};

use super::epoch;

/// Days per phase on the temporal ring.
const DAYS_PER_PHASE: i64 = 28;

/// Highest regular day index of a phase year.
const LAST_DAY_INDEX: i64 = 363;

/// The position of one Gregorian date in the 13-phase calendar.
///
/// Either a regular grid day or one of the two irregular days, which fall
/// outside the 13 × 28 grid and carry no phase or day-in-phase value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarPosition {
    /// A day of the 13 × 28 grid.
    Regular {
        /// Phase (moon) number, 1..=13.
        phase_number: u8,
        /// Day within the phase, 1..=28.
        day_in_phase: u8,
        /// Index into the 7-name weekday cycle, 0..=6.
        weekday_index: u8,
        /// Phase year plus the historical epoch offset.
        cycle_count: i64,
    },

    /// The golden-section day, 225 days after the epoch anchor.
    DayOutOfTime,

    /// Feb 29 of the Gregorian year following the epoch year, when the
    /// leap-aware variant inserts it.
    InsertedLeapDay,
}

/// Maps Gregorian dates onto the 13-phase calendar.
///
/// Pure over its configuration: the same date always maps to the same
/// position.
#[derive(Debug, Clone)]
pub struct CalendarMapper {
    config: CalendarConfig,
    weekdays: WeekdayCycle,
}

impl CalendarMapper {
    /// Build a mapper over a validated configuration and weekday cycle.
    ///
    /// # Errors
    ///
    /// Propagates configuration or cycle validation failures.
    pub fn new(config: CalendarConfig, weekdays: WeekdayCycle) -> EngineResult<Self> {
        config.validate()?;
        weekdays.validate()?;
        Ok(Self { config, weekdays })
    }

    /// Build a mapper with the canonical April-1, leap-aware configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: CalendarConfig::default(),
            weekdays: WeekdayCycle::default(),
        }
    }

    /// Map a Gregorian calendar date (UTC day) to its calendar position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateOutOfRange`] for dates whose phase year
    /// precedes the configured minimum; such dates are rejected, never
    /// clamped.
    pub fn map_date(&self, date: NaiveDate) -> EngineResult<CalendarPosition> {
        let phase_year = epoch::phase_year_of(&self.config, date)?;
        if phase_year < self.config.min_year {
            return Err(EngineError::DateOutOfRange {
                date: date.to_string(),
                min_year: self.config.min_year,
            });
        }

        let epoch_start = epoch::anchor(&self.config, phase_year)?;
        let day_out_of_time = epoch::day_out_of_time(epoch_start);
        if date == day_out_of_time {
            return Ok(CalendarPosition::DayOutOfTime);
        }

        let leap_day = epoch::inserted_leap_day(&self.config, phase_year);
        if leap_day == Some(date) {
            return Ok(CalendarPosition::InsertedLeapDay);
        }

        // Remove irregular days at or before the input so the remaining
        // days form a dense 0..=363 sequence.
        let mut adjusted = (date - epoch_start).num_days();
        if day_out_of_time <= date {
            adjusted -= 1;
        }
        if leap_day.is_some_and(|leap| leap <= date) {
            adjusted -= 1;
        }
        let adjusted = adjusted.clamp(0, LAST_DAY_INDEX);

        let phase_index = (adjusted / DAYS_PER_PHASE).clamp(0, PHASE_COUNT as i64 - 1);
        let position = CalendarPosition::Regular {
            phase_number: (phase_index + 1) as u8,
            day_in_phase: (adjusted % DAYS_PER_PHASE + 1) as u8,
            weekday_index: (adjusted % 7) as u8,
            cycle_count: i64::from(phase_year) + CYCLE_EPOCH_OFFSET,
        };

        debug!(%date, phase_year, adjusted, "mapped date");
        Ok(position)
    }

    /// The weekday name for a regular position's index.
    #[inline]
    pub fn weekday_name(&self, weekday_index: u8) -> Option<&str> {
        self.weekdays.name(weekday_index as usize)
    }
}

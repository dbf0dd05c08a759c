//! Epoch anchor resolution and the two irregular days.

use chrono::{Datelike, Duration, NaiveDate};

use prime_zodiac_core::DAY_OUT_OF_TIME_OFFSET;

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};

/// Standard Gregorian leap rule: divisible by 4, not by 100 unless by 400.
#[inline]
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The epoch anchor date within one Gregorian year.
pub(super) fn anchor(config: &CalendarConfig, year: i32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, config.epoch_month, config.epoch_day).ok_or_else(|| {
        EngineError::Configuration(format!(
            "epoch anchor {}-{:02} does not exist in year {year}",
            config.epoch_month, config.epoch_day
        ))
    })
}

/// The phase year whose anchor is the latest one at or before `date`.
pub(super) fn phase_year_of(config: &CalendarConfig, date: NaiveDate) -> EngineResult<i32> {
    let anchor_this_year = anchor(config, date.year())?;
    if date >= anchor_this_year {
        Ok(date.year())
    } else {
        Ok(date.year() - 1)
    }
}

/// The Day Out of Time for an epoch start: exactly 225 days after the
/// anchor, independent of leap years.
pub(super) fn day_out_of_time(epoch_start: NaiveDate) -> NaiveDate {
    epoch_start + Duration::days(DAY_OUT_OF_TIME_OFFSET)
}

/// The inserted leap day for an epoch year, if the variant uses one.
///
/// Exists only when leap insertion is enabled and the phase year contains
/// a Gregorian Feb 29: for anchors from March onward that is Feb 29 of the
/// following year, while a January or February anchor (day capped at 28)
/// already has its own year's Feb 29 ahead of it inside the phase year.
pub(super) fn inserted_leap_day(config: &CalendarConfig, epoch_year: i32) -> Option<NaiveDate> {
    if !config.insert_leap_day {
        return None;
    }

    let leap_year = if config.epoch_month < 3 {
        epoch_year
    } else {
        epoch_year + 1
    };

    if is_gregorian_leap_year(leap_year) {
        NaiveDate::from_ymd_opt(leap_year, 2, 29)
    } else {
        None
    }
}

//! The 13-phase calendar: mapping Gregorian dates onto the 13 × 28 grid.
//!
//! A phase year holds exactly 364 regular days (13 phases of 28 days) plus
//! one or two irregular days that fall outside the grid: the Day Out of
//! Time, 225 days after the epoch anchor, and, in the canonical leap-aware
//! variant, the Gregorian Feb 29 of the following leap year. Removing the
//! irregular days leaves a dense `0..=363` day sequence to index phases,
//! days and weekdays.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use prime_zodiac_engine::calendar::{CalendarMapper, CalendarPosition};
//!
//! let mapper = CalendarMapper::with_defaults();
//! let new_year = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
//!
//! match mapper.map_date(new_year).unwrap() {
//!     CalendarPosition::Regular { phase_number, day_in_phase, .. } => {
//!         assert_eq!(phase_number, 1);
//!         assert_eq!(day_in_phase, 1);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod epoch;
mod mapper;


pub use epoch::is_gregorian_leap_year;
pub use mapper::{CalendarMapper, CalendarPosition};

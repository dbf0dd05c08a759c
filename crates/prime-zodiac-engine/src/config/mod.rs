//! Engine configuration types.
//!
//! Each subsystem has its own config struct with a `Default` carrying the
//! documented canonical values and a `validate()` method; [`EngineConfig`]
//! aggregates them. Static tables (signs, moons, aspects, weekdays) are not
//! configuration in this sense; they are injected data owned by
//! `prime-zodiac-core`.

mod aspect;
mod calendar;
mod degree;


pub use self::aspect::AspectConfig;
pub use self::calendar::CalendarConfig;
pub use self::degree::DegreeConfig;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// Aggregate configuration for all engine subsystems.
///
/// # Example
///
/// ```
/// use prime_zodiac_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.calendar.epoch_month, 4);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Degree conversion settings.
    pub degree: DegreeConfig,

    /// Aspect matching and cluster detection settings.
    pub aspect: AspectConfig,

    /// Calendar epoch and irregular-day settings.
    pub calendar: CalendarConfig,
}

impl EngineConfig {
    /// Create a configuration with the canonical defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration using the legacy Dreamspell calendar variant.
    ///
    /// Only the calendar subsystem differs from the defaults; see
    /// [`CalendarConfig::legacy_dreamspell`].
    pub fn legacy_calendar_preset() -> Self {
        Self {
            calendar: CalendarConfig::legacy_dreamspell(),
            ..Default::default()
        }
    }

    /// Validate every subsystem configuration.
    ///
    /// # Errors
    ///
    /// Returns the first subsystem's [`crate::EngineError::Configuration`].
    pub fn validate(&self) -> EngineResult<()> {
        self.degree.validate()?;
        self.aspect.validate()?;
        self.calendar.validate()?;
        Ok(())
    }
}

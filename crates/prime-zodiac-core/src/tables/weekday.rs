//! The fixed 7-name weekday cycle of the temporal ring.

use serde::{Deserialize, Serialize};

use crate::constants::WEEK_LENGTH;
use crate::error::{CoreError, CoreResult};

/// The 7-day plasma cycle indexed by `adjusted_day mod 7`.
///
/// # Example
///
/// ```
/// use prime_zodiac_core::tables::WeekdayCycle;
///
/// let cycle = WeekdayCycle::default();
/// assert_eq!(cycle.name(0), Some("Dali"));
/// assert_eq!(cycle.name(6), Some("Silio"));
/// assert_eq!(cycle.name(7), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayCycle {
    /// Day names in cycle order.
    pub names: Vec<String>,
}

impl WeekdayCycle {
    /// Check the cycle holds exactly 7 names.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WrongWeekdayCount`] otherwise.
    pub fn validate(&self) -> CoreResult<()> {
        if self.names.len() != WEEK_LENGTH {
            return Err(CoreError::WrongWeekdayCount {
                expected: WEEK_LENGTH,
                actual: self.names.len(),
            });
        }
        Ok(())
    }

    /// The name at a weekday index, if in range.
    #[inline]
    pub fn name(&self, weekday_index: usize) -> Option<&str> {
        self.names.get(weekday_index).map(String::as_str)
    }
}

impl Default for WeekdayCycle {
    fn default() -> Self {
        Self {
            names: ["Dali", "Seli", "Gamma", "Kali", "Alpha", "Limi", "Silio"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

//! Degree conversion settings.

use serde::{Deserialize, Serialize};

use prime_zodiac_core::BOUNDARY_EPSILON;

use crate::error::{EngineError, EngineResult};

/// Settings for tropical-to-prime degree conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeConfig {
    /// Snap tolerance at the 364 boundary.
    ///
    /// A scaled degree within this distance of 364 is treated as 0 so the
    /// half-open `[0, 364)` contract holds under floating-point error.
    pub boundary_epsilon: f64,
}

impl Default for DegreeConfig {
    fn default() -> Self {
        Self {
            boundary_epsilon: BOUNDARY_EPSILON,
        }
    }
}

impl DegreeConfig {
    /// Validate the snap tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if the epsilon is not a
    /// positive value smaller than one degree.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.boundary_epsilon > 0.0 && self.boundary_epsilon < 1.0) {
            return Err(EngineError::Configuration(format!(
                "boundary_epsilon must be in (0, 1), got {}",
                self.boundary_epsilon
            )));
        }
        Ok(())
    }
}

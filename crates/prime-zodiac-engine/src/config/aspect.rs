//! Aspect matching and cluster detection settings.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Settings for stellium-style cluster detection.
///
/// Clustering deliberately runs over the traditional 360-degree domain with
/// the legacy 12-sign window width; it predates the prime ring and is kept
/// on the old grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectConfig {
    /// Width of a cluster window, in tropical degrees.
    pub cluster_group_width: f64,

    /// Minimum number of bodies in one window to report a cluster.
    pub cluster_threshold: usize,
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            cluster_group_width: 30.0,
            cluster_threshold: 3,
        }
    }
}

impl AspectConfig {
    /// Validate window width and threshold.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if the width is not positive
    /// or larger than the ring, or the threshold is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.cluster_group_width > 0.0 && self.cluster_group_width <= 360.0) {
            return Err(EngineError::Configuration(format!(
                "cluster_group_width must be in (0, 360], got {}",
                self.cluster_group_width
            )));
        }
        if self.cluster_threshold == 0 {
            return Err(EngineError::Configuration(
                "cluster_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! Separation measurement and catalog classification.

use serde::{Deserialize, Serialize};
use tracing::debug;

use prime_zodiac_core::{AspectCatalog, Resonance, HALF_PRIME_RING, PRIME_RING};

use crate::config::AspectConfig;
use crate::degree::to_prime_degree;
use crate::error::EngineResult;

use super::cluster::{detect_clusters_with, Cluster};

/// A named body with its tropical longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Display name, e.g. "Mars".
    pub name: String,

    /// Tropical longitude in degrees; any real value is accepted.
    pub tropical: f64,
}

impl BodyPosition {
    /// Convenience constructor.
    pub fn new(name: &str, tropical: f64) -> Self {
        Self {
            name: name.to_string(),
            tropical,
        }
    }
}

/// A classified aspect between two positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    /// Catalog name of the matched aspect.
    pub name: String,

    /// Exact catalog angle, in prime degrees.
    pub angle: f64,

    /// How far the separation sits from the exact angle, `<= orb`.
    pub deviation: f64,

    /// Number of whole phases the aspect spans.
    pub phase_count: u32,

    /// Resonance class of the phase count.
    pub resonance: Resonance,
}

/// A matched pair out of [`AspectMatcher::all_aspects`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairAspect {
    /// Name of the first body (earlier in input order).
    pub first: String,

    /// Name of the second body.
    pub second: String,

    /// Minimal separation between the pair, in prime degrees.
    pub separation: f64,

    /// The classified aspect.
    pub aspect: AspectMatch,
}

/// Minimal angular separation between two tropical longitudes, measured on
/// the prime ring and folded into the shorter arc.
///
/// # Example
///
/// ```
/// use prime_zodiac_engine::aspect::minimal_separation;
///
/// // Symmetric, and never longer than half the ring
/// assert_eq!(minimal_separation(10.0, 10.0), 0.0);
/// assert_eq!(minimal_separation(350.0, 10.0), minimal_separation(10.0, 350.0));
/// assert!(minimal_separation(0.0, 359.0) < 182.0);
/// ```
pub fn minimal_separation(a_tropical: f64, b_tropical: f64) -> f64 {
    let difference = (to_prime_degree(a_tropical) - to_prime_degree(b_tropical))
        .abs()
        .rem_euclid(PRIME_RING);

    if difference > HALF_PRIME_RING {
        PRIME_RING - difference
    } else {
        difference
    }
}

/// Classifies separations against an injected aspect catalog.
///
/// Catalog order is the tie-break rule: overlapping orb windows resolve to
/// whichever aspect is declared first.
#[derive(Debug, Clone)]
pub struct AspectMatcher {
    catalog: AspectCatalog,
    config: AspectConfig,
}

impl AspectMatcher {
    /// Build a matcher over a validated catalog.
    ///
    /// # Errors
    ///
    /// Propagates catalog or config validation failures.
    pub fn new(catalog: AspectCatalog, config: AspectConfig) -> EngineResult<Self> {
        catalog.validate()?;
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Build a matcher with the default catalog and configuration.
    pub fn with_defaults() -> Self {
        Self {
            catalog: AspectCatalog::default(),
            config: AspectConfig::default(),
        }
    }

    /// Classify a separation against the catalog.
    ///
    /// Returns the first catalog entry whose orb window contains the
    /// separation, or `None` when nothing matches. "No aspect" is a valid
    /// outcome, not an error.
    pub fn classify(&self, separation: f64) -> Option<AspectMatch> {
        for entry in &self.catalog.entries {
            let deviation = (separation - entry.angle).abs();
            if deviation <= entry.orb {
                debug!(
                    separation,
                    aspect = %entry.name,
                    deviation,
                    "classified separation"
                );
                return Some(AspectMatch {
                    name: entry.name.clone(),
                    angle: entry.angle,
                    deviation,
                    phase_count: entry.phase_count,
                    resonance: entry.resonance,
                });
            }
        }
        None
    }

    /// Classify every unordered pair of distinct bodies.
    ///
    /// Output follows the input's iteration order, first index then second
    /// index; only pairs that produced a match are included.
    pub fn all_aspects(&self, positions: &[BodyPosition]) -> Vec<PairAspect> {
        let mut matches = Vec::new();

        for (i, first) in positions.iter().enumerate() {
            for second in positions.iter().skip(i + 1) {
                let separation = minimal_separation(first.tropical, second.tropical);
                if let Some(aspect) = self.classify(separation) {
                    matches.push(PairAspect {
                        first: first.name.clone(),
                        second: second.name.clone(),
                        separation,
                        aspect,
                    });
                }
            }
        }

        matches
    }

    /// Detect clusters of bodies on the legacy 360-degree grid.
    ///
    /// See [`Cluster`]; window width and threshold come from the matcher's
    /// [`AspectConfig`].
    pub fn detect_clusters(&self, positions: &[BodyPosition]) -> Vec<Cluster> {
        detect_clusters_with(
            positions,
            self.config.cluster_group_width,
            self.config.cluster_threshold,
        )
    }
}

//! The aspect catalog: named angular relationships in priority order.
//!
//! Angles live on the 364-degree prime ring (the classical 360-degree
//! aspect angles scaled by 364/360, which keeps the square at exactly 91
//! and the opposition at exactly 182). Catalog order is the tie-break
//! order: when orb windows overlap, the earlier entry wins, and entries
//! are declared in conventional significance order.

use serde::{Deserialize, Serialize};

use crate::constants::{HALF_PRIME_RING, PHASE_SPAN, PRIME_RING};
use crate::error::{CoreError, CoreResult};

/// Resonance class of an aspect, the phase count reduced modulo 3.
///
/// # Example
///
/// ```
/// use prime_zodiac_core::tables::Resonance;
///
/// assert_eq!(Resonance::from_phase_count(6), Resonance::Completion);
/// assert_eq!(Resonance::from_phase_count(1), Resonance::Initiation);
/// assert_eq!(Resonance::from_phase_count(5), Resonance::Manifestation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resonance {
    /// Phase count ≡ 0 (mod 3): closure of a cycle
    Completion,
    /// Phase count ≡ 1 (mod 3): start of a cycle
    Initiation,
    /// Phase count ≡ 2 (mod 3): the cycle bearing fruit
    Manifestation,
}

impl Resonance {
    /// Classify a phase count into its resonance class.
    #[inline]
    pub fn from_phase_count(phase_count: u32) -> Self {
        match phase_count % 3 {
            0 => Resonance::Completion,
            1 => Resonance::Initiation,
            _ => Resonance::Manifestation,
        }
    }

    /// The fixed display label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            Resonance::Completion => "Completion",
            Resonance::Initiation => "Initiation",
            Resonance::Manifestation => "Manifestation",
        }
    }
}

/// One named aspect definition.
///
/// `phase_count` and `resonance` are derived from the angle at
/// construction, not stored independently, so a catalog cannot carry
/// inconsistent annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDef {
    /// Display name, e.g. "opposition".
    pub name: String,

    /// Exact angle on the prime ring, in `[0, 182]`.
    pub angle: f64,

    /// Matching tolerance around the angle, ≥ 0.
    pub orb: f64,

    /// Number of whole phases the angle spans.
    pub phase_count: u32,

    /// Resonance class of the phase count.
    pub resonance: Resonance,
}

impl AspectDef {
    /// Build an aspect, deriving phase count and resonance from the angle.
    ///
    /// The phase count rounds ties to even so the 182-degree opposition
    /// (6.5 phases) resolves to 6 and lands in Completion, matching the
    /// documented mathematics.
    pub fn new(name: &str, angle: f64, orb: f64) -> Self {
        let phase_count = (angle / PHASE_SPAN).round_ties_even().max(0.0) as u32;
        Self {
            name: name.to_string(),
            angle,
            orb,
            phase_count,
            resonance: Resonance::from_phase_count(phase_count),
        }
    }
}

/// Ordered catalog of aspect definitions.
///
/// # Example
///
/// ```
/// use prime_zodiac_core::tables::AspectCatalog;
///
/// let catalog = AspectCatalog::default();
/// assert!(catalog.validate().is_ok());
/// assert_eq!(catalog.entries[0].name, "conjunction");
/// assert_eq!(catalog.entries[1].phase_count, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectCatalog {
    /// Definitions in decreasing priority order.
    pub entries: Vec<AspectDef>,
}

impl AspectCatalog {
    /// Check every definition against the documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAspect`] for the first entry whose angle
    /// leaves `[0, 182]`, whose orb is negative, or whose name is empty.
    pub fn validate(&self) -> CoreResult<()> {
        for entry in &self.entries {
            if entry.name.is_empty() {
                return Err(CoreError::InvalidAspect {
                    name: entry.name.clone(),
                    reason: "empty name".to_string(),
                });
            }
            if !(0.0..=HALF_PRIME_RING).contains(&entry.angle) {
                return Err(CoreError::InvalidAspect {
                    name: entry.name.clone(),
                    reason: format!("angle {} outside [0, {HALF_PRIME_RING}]", entry.angle),
                });
            }
            if entry.orb < 0.0 {
                return Err(CoreError::InvalidAspect {
                    name: entry.name.clone(),
                    reason: format!("negative orb {}", entry.orb),
                });
            }
        }
        Ok(())
    }
}

impl Default for AspectCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                AspectDef::new("conjunction", 0.0, 8.0),
                AspectDef::new("opposition", HALF_PRIME_RING, 8.0),
                AspectDef::new("trine", PRIME_RING / 3.0, 8.0),
                AspectDef::new("square", PRIME_RING / 4.0, 7.0),
                AspectDef::new("sextile", PRIME_RING / 6.0, 6.0),
                AspectDef::new("quintile", PRIME_RING / 5.0, 2.0),
                AspectDef::new("septile", PRIME_RING / 7.0, 2.0),
                AspectDef::new("novile", PRIME_RING / 9.0, 2.0),
                AspectDef::new("resonance", PHASE_SPAN, 2.0),
                AspectDef::new("quincunx", 5.0 * PRIME_RING / 12.0, 3.0),
            ],
        }
    }
}

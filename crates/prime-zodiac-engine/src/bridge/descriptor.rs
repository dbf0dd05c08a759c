//! Cross-domain descriptor construction.

use serde::{Deserialize, Serialize};

use prime_zodiac_core::{MoonTable, SignTable};

use crate::degree::resolve_phase;
use crate::error::{EngineError, EngineResult};
use crate::ternary::bijective;

/// A unified description of one prime degree across both domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeDescriptor {
    /// Phase number, 1..=13, shared by both rings.
    pub phase_number: u8,

    /// Sign name at this phase on the spatial ring.
    pub spatial_name: String,

    /// Moon name at this phase on the temporal ring.
    pub temporal_name: String,

    /// Presentational resonance line composed from both tables.
    pub resonance_text: String,

    /// The phase number in bijective ternary digits, e.g. `13 → "111"`.
    pub ternary_label: String,

    /// Day within the phase the degree-in-phase corresponds to, 1..=28.
    pub day_in_phase: u8,
}

/// Composes phase resolution with both phase tables.
#[derive(Debug, Clone)]
pub struct SpaceTimeBridge {
    signs: SignTable,
    moons: MoonTable,
}

impl SpaceTimeBridge {
    /// Build a bridge over validated tables.
    ///
    /// # Errors
    ///
    /// Propagates table validation failures.
    pub fn new(signs: SignTable, moons: MoonTable) -> EngineResult<Self> {
        signs.validate()?;
        moons.validate()?;
        Ok(Self { signs, moons })
    }

    /// Build a bridge over the default tables.
    pub fn with_defaults() -> Self {
        Self {
            signs: SignTable::default(),
            moons: MoonTable::default(),
        }
    }

    /// Describe a prime degree across both domains.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] only if a table lookup
    /// misses, which validated 13-entry tables rule out.
    ///
    /// # Example
    ///
    /// ```
    /// use prime_zodiac_engine::bridge::SpaceTimeBridge;
    ///
    /// let bridge = SpaceTimeBridge::with_defaults();
    /// let descriptor = bridge.bridge(0.0).unwrap();
    ///
    /// assert_eq!(descriptor.phase_number, 1);
    /// assert_eq!(descriptor.spatial_name, "Ares Prime");
    /// assert_eq!(descriptor.temporal_name, "Magnetic");
    /// assert_eq!(descriptor.ternary_label, "1");
    /// ```
    pub fn bridge(&self, prime_degree: f64) -> EngineResult<BridgeDescriptor> {
        let phase = resolve_phase(prime_degree);
        let index = usize::from(phase.phase_number - 1);

        let sign = self.signs.record(index).ok_or_else(|| {
            EngineError::Configuration(format!("sign table has no entry at index {index}"))
        })?;
        let moon = self.moons.record(index).ok_or_else(|| {
            EngineError::Configuration(format!("moon table has no entry at index {index}"))
        })?;

        // Both rings are [0, 28) per phase, so degree-in-phase maps onto
        // day-in-phase by identity, plus one for 1-based days.
        let day_in_phase = phase.degree_in_phase.floor() as u8 + 1;

        Ok(BridgeDescriptor {
            phase_number: phase.phase_number,
            spatial_name: sign.name.clone(),
            temporal_name: moon.name.clone(),
            resonance_text: format!(
                "{} tone {} to {}: {} the {}",
                moon.name, moon.tone, sign.name, moon.signature, sign.archetype
            ),
            ternary_label: bijective::encode_label(i64::from(phase.phase_number)),
            day_in_phase,
        })
    }
}

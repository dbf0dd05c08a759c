//! The temporal phase table: 13 moons over the 364-day year.
//!
//! Structurally identical to the spatial table; the units of its arcs are
//! days since the epoch anchor rather than prime degrees. Moon names follow
//! the thirteen galactic tones, each with a one-word signature.

use serde::{Deserialize, Serialize};

use super::{validate_phase_entries, PhaseArc};
use crate::error::CoreResult;

/// A single entry of the temporal table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonRecord {
    /// Tone name, e.g. "Magnetic".
    pub name: String,

    /// One-word signature used in resonance text.
    pub signature: String,

    /// Tone number, 1..=13.
    pub tone: u8,

    /// The 28-day arc this moon spans on the temporal ring.
    pub arc: PhaseArc,
}

/// The temporal phase table: exactly 13 moons partitioning the 364-day year.
///
/// # Example
///
/// ```
/// use prime_zodiac_core::tables::MoonTable;
///
/// let moons = MoonTable::default();
/// assert!(moons.validate().is_ok());
/// assert_eq!(moons.entries[0].name, "Magnetic");
/// assert_eq!(moons.entries[12].name, "Cosmic");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonTable {
    /// Moon records in year order, phase 1 first.
    pub entries: Vec<MoonRecord>,
}

impl MoonTable {
    /// Check the structural invariants: 13 entries, arcs in slot order,
    /// non-empty names, tones numbered 1..=13 in order.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::CoreError`] naming the first violated invariant.
    pub fn validate(&self) -> CoreResult<()> {
        validate_phase_entries(self.entries.iter().map(|r| (r.name.as_str(), r.arc)))
    }

    /// The record for a zero-based phase index, if the table holds one.
    #[inline]
    pub fn record(&self, phase_index: usize) -> Option<&MoonRecord> {
        self.entries.get(phase_index)
    }
}

impl Default for MoonTable {
    fn default() -> Self {
        let raw: [(&str, &str); 13] = [
            ("Magnetic", "Unify"),
            ("Lunar", "Polarize"),
            ("Electric", "Activate"),
            ("Self-Existing", "Define"),
            ("Overtone", "Empower"),
            ("Rhythmic", "Organize"),
            ("Resonant", "Channel"),
            ("Galactic", "Harmonize"),
            ("Solar", "Pulse"),
            ("Planetary", "Perfect"),
            ("Spectral", "Dissolve"),
            ("Crystal", "Dedicate"),
            ("Cosmic", "Endure"),
        ];

        Self {
            entries: raw
                .iter()
                .enumerate()
                .map(|(i, (name, signature))| MoonRecord {
                    name: (*name).to_string(),
                    signature: (*signature).to_string(),
                    tone: (i + 1) as u8,
                    arc: PhaseArc::of_index(i),
                })
                .collect(),
        }
    }
}

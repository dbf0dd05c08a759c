//! The spatial phase table: 13 signs over the 364-degree ring.
//!
//! The prime zodiac keeps the twelve familiar sign archetypes, restores
//! Ophiuchus as the ninth sign, and widens every sign to an equal 28 prime
//! degrees. Sign names carry the "Prime" suffix to distinguish them from
//! their 30-degree tropical namesakes.

use serde::{Deserialize, Serialize};

use super::{validate_phase_entries, PhaseArc};
use crate::error::CoreResult;

/// Classical element assigned to a sign.
///
/// The four classical elements cycle through the table; the restored
/// thirteenth sign, Ophiuchus, carries the fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Cardinal fire signs
    Fire,
    /// Grounding earth signs
    Earth,
    /// Mental air signs
    Air,
    /// Emotional water signs
    Water,
    /// The serpent-bearer's element, outside the classical four
    Aether,
}

/// A single entry of the spatial table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignRecord {
    /// Display name, e.g. "Ares Prime".
    pub name: String,

    /// One-word archetype used in resonance text.
    pub archetype: String,

    /// Classical element.
    pub element: Element,

    /// The 28-degree arc this sign spans on the prime ring.
    pub arc: PhaseArc,
}

/// The spatial phase table: exactly 13 signs partitioning the prime ring.
///
/// # Example
///
/// ```
/// use prime_zodiac_core::tables::SignTable;
///
/// let signs = SignTable::default();
/// assert!(signs.validate().is_ok());
/// assert_eq!(signs.entries.len(), 13);
/// assert_eq!(signs.entries[8].name, "Ophiuchus Prime");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignTable {
    /// Sign records in ring order, phase 1 first.
    pub entries: Vec<SignRecord>,
}

impl SignTable {
    /// Check the structural invariants: 13 entries, arcs in slot order,
    /// non-empty names.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::CoreError`] naming the first violated invariant.
    pub fn validate(&self) -> CoreResult<()> {
        validate_phase_entries(self.entries.iter().map(|r| (r.name.as_str(), r.arc)))
    }

    /// The record for a zero-based phase index, if the table holds one.
    #[inline]
    pub fn record(&self, phase_index: usize) -> Option<&SignRecord> {
        self.entries.get(phase_index)
    }
}

impl Default for SignTable {
    fn default() -> Self {
        let raw: [(&str, &str, Element); 13] = [
            ("Ares Prime", "Warrior", Element::Fire),
            ("Taurus Prime", "Builder", Element::Earth),
            ("Gemini Prime", "Messenger", Element::Air),
            ("Cancer Prime", "Nurturer", Element::Water),
            ("Leo Prime", "Sovereign", Element::Fire),
            ("Virgo Prime", "Healer", Element::Earth),
            ("Libra Prime", "Harmonizer", Element::Air),
            ("Scorpio Prime", "Alchemist", Element::Water),
            ("Ophiuchus Prime", "Serpent-Bearer", Element::Aether),
            ("Sagittarius Prime", "Seeker", Element::Fire),
            ("Capricorn Prime", "Architect", Element::Earth),
            ("Aquarius Prime", "Visionary", Element::Air),
            ("Pisces Prime", "Mystic", Element::Water),
        ];

        Self {
            entries: raw
                .iter()
                .enumerate()
                .map(|(i, (name, archetype, element))| SignRecord {
                    name: (*name).to_string(),
                    archetype: (*archetype).to_string(),
                    element: *element,
                    arc: PhaseArc::of_index(i),
                })
                .collect(),
        }
    }
}

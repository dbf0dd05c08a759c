//! Half-open phase arcs on the 364-unit ring.

use serde::{Deserialize, Serialize};

use crate::constants::PHASE_SPAN;

/// A half-open interval `[start, end)` on the prime ring.
///
/// Phase `i` of a valid table always spans `[i*28, (i+1)*28)`; the 13 arcs
/// partition the ring with no gaps or overlaps. The same arcs describe days
/// of the temporal ring, where the units are days rather than degrees.
///
/// # Example
///
/// ```
/// use prime_zodiac_core::tables::PhaseArc;
///
/// let first = PhaseArc::of_index(0);
/// assert!(first.contains(0.0));
/// assert!(first.contains(27.999));
/// assert!(!first.contains(28.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseArc {
    /// Inclusive lower bound, in prime degrees.
    pub start: f64,

    /// Exclusive upper bound, in prime degrees.
    pub end: f64,
}

impl PhaseArc {
    /// The canonical arc for table slot `index`.
    pub fn of_index(index: usize) -> Self {
        Self {
            start: index as f64 * PHASE_SPAN,
            end: (index + 1) as f64 * PHASE_SPAN,
        }
    }

    /// Whether `value` falls inside this arc (half-open test).
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value < self.end
    }

    /// Arc width in prime degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

//! Static tables for the prime zodiac.
//!
//! Four pieces of injected configuration data:
//! - [`SignTable`]: the spatial table, 13 signs over the 364-degree ring
//! - [`MoonTable`]: the temporal table, 13 moons over the 364-day year
//! - [`AspectCatalog`]: named angular aspects in priority order
//! - [`WeekdayCycle`]: the fixed 7-name day cycle
//!
//! Both phase tables share the same structure: 13 records, each spanning a
//! half-open arc of 28 units, partitioning the ring exactly. [`validate`]
//! methods enforce that shape; the engine assumes it afterwards.
//!
//! [`validate`]: SignTable::validate

mod arc;
mod aspect;
mod moon;
mod sign;
mod weekday;

#[cfg(test)]
mod tests;

pub use arc::PhaseArc;
pub use aspect::{AspectCatalog, AspectDef, Resonance};
pub use moon::{MoonRecord, MoonTable};
pub use sign::{Element, SignRecord, SignTable};
pub use weekday::WeekdayCycle;

use crate::constants::{PHASE_COUNT, PHASE_SPAN};
use crate::error::{CoreError, CoreResult};

/// Validate the shared phase-table shape: 13 entries, arcs in slot order.
///
/// `entries` yields `(name, arc)` pairs in table order. Used by both
/// [`SignTable::validate`] and [`MoonTable::validate`] so the two tables
/// cannot drift structurally.
pub(crate) fn validate_phase_entries<'a, I>(entries: I) -> CoreResult<()>
where
    I: ExactSizeIterator<Item = (&'a str, PhaseArc)>,
{
    if entries.len() != PHASE_COUNT {
        return Err(CoreError::WrongEntryCount {
            expected: PHASE_COUNT,
            actual: entries.len(),
        });
    }

    for (index, (name, arc)) in entries.enumerate() {
        if name.is_empty() {
            return Err(CoreError::EmptyName { index });
        }

        let expected = PhaseArc::of_index(index);
        if arc != expected {
            return Err(CoreError::ArcMismatch {
                index,
                start: arc.start,
                end: arc.end,
                expected_start: index as f64 * PHASE_SPAN,
                expected_end: (index + 1) as f64 * PHASE_SPAN,
            });
        }
    }

    Ok(())
}

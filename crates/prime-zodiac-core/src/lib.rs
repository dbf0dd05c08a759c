//! Data model for the prime zodiac: the 364-degree, 13-phase ring.
//!
//! This crate holds the immutable configuration data the computation engine
//! (`prime-zodiac-engine`) consumes: the spatial sign table, the temporal
//! moon table, the aspect catalog, the weekday cycle, and the ring
//! geometry constants (`364 = 13 × 28`).
//!
//! # Modules
//!
//! - [`constants`]: ring geometry and epoch constants
//! - [`error`]: error types and result alias
//! - [`tables`]: sign/moon phase tables, aspect catalog, weekday cycle
//!
//! # Design
//!
//! All tables are plain serde-derived data with `Default` impls carrying the
//! canonical 13-entry contents, and `validate()` methods that enforce the
//! structural invariants (13 entries, arcs partitioning the ring with no
//! gaps or overlaps). Nothing in this crate computes; callers inject these
//! tables into the engine, which makes alternate tables trivial to test.
//!
//! # Example
//!
//! ```
//! use prime_zodiac_core::tables::{SignTable, MoonTable, AspectCatalog};
//!
//! let signs = SignTable::default();
//! let moons = MoonTable::default();
//! let catalog = AspectCatalog::default();
//!
//! assert!(signs.validate().is_ok());
//! assert!(moons.validate().is_ok());
//! assert!(catalog.validate().is_ok());
//! assert_eq!(signs.entries[0].name, "Ares Prime");
//! assert_eq!(moons.entries[0].name, "Magnetic");
//! ```

pub mod constants;
pub mod error;
pub mod tables;

pub use constants::{
    BOUNDARY_EPSILON, CYCLE_EPOCH_OFFSET, DAY_OUT_OF_TIME_OFFSET, HALF_PRIME_RING, PHASE_COUNT,
    PHASE_SPAN, PRIME_RING, TROPICAL_RING, WEEK_LENGTH,
};
pub use error::{CoreError, CoreResult};
pub use tables::{
    AspectCatalog, AspectDef, Element, MoonRecord, MoonTable, PhaseArc, Resonance, SignRecord,
    SignTable, WeekdayCycle,
};

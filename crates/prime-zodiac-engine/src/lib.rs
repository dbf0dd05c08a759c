//! Computation engine for the prime zodiac: the 364-degree, 13-phase ring.
//!
//! Converts angular positions and calendar dates between the traditional
//! 360-degree domain and the unified 364-unit, 13-phase domain
//! (`364 = 13 × 28`), and annotates relationships between positions with a
//! three-representation balanced ternary algebra over GF(3).
//!
//! # Modules
//!
//! - [`config`]: per-subsystem configuration with defaults and validation
//! - [`error`]: error types and result alias
//! - [`degree`]: 360° → 364° conversion, phase and house resolution
//! - [`ternary`]: representation conversion, GF(3) and balanced operations,
//!   bijective base-3 encoding
//! - [`aspect`]: angular separation classification and cluster detection
//! - [`calendar`]: Gregorian → 13-phase calendar mapping with the two
//!   irregular inserted days
//! - [`bridge`]: the cross-domain descriptor composing all of the above
//!
//! Every operation is synchronous, pure and stateless: the same input
//! always yields the same output, and nothing here blocks or performs I/O.
//! Static tables come from `prime-zodiac-core` and are injected, never
//! global.
//!
//! # Example
//!
//! ```
//! use prime_zodiac_engine::aspect::{minimal_separation, AspectMatcher};
//! use prime_zodiac_engine::degree::to_prime_degree;
//!
//! // 0 and 180 tropical sit exactly half the prime ring apart
//! let separation = minimal_separation(0.0, 180.0);
//! assert_eq!(separation, 182.0);
//!
//! let matcher = AspectMatcher::with_defaults();
//! let matched = matcher.classify(separation).expect("opposition");
//! assert_eq!(matched.name, "opposition");
//! ```

pub mod aspect;
pub mod bridge;
pub mod calendar;
pub mod config;
pub mod degree;
pub mod error;
pub mod ternary;

// Re-export commonly used types from this crate
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};

// Re-export table types from prime-zodiac-core (do not duplicate)
pub use prime_zodiac_core::{
    AspectCatalog, AspectDef, Element, MoonRecord, MoonTable, Resonance, SignRecord, SignTable,
    WeekdayCycle,
};

// Re-export the main entry points for convenience
pub use aspect::{minimal_separation, AspectMatcher, BodyPosition};
pub use bridge::{BridgeDescriptor, SpaceTimeBridge};
pub use calendar::{CalendarMapper, CalendarPosition};
pub use degree::{house_cusps, resolve_house, resolve_phase, to_prime_degree};
pub use ternary::{Representation, TernaryValue};

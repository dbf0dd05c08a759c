//! Aspect matching: classifying angular separations against the catalog.
//!
//! Separations are measured on the prime ring and folded into the shorter
//! arc `[0, 182]`. Classification walks the catalog in declared priority
//! order and returns the first entry whose orb window contains the
//! separation; no match is a valid `None` outcome, not an error.
//!
//! Cluster detection is the one deliberate exception to the prime ring: it
//! buckets positions on the legacy 360-degree, 12-sign grid.
//!
//! # Example
//!
//! ```
//! use prime_zodiac_engine::aspect::{minimal_separation, AspectMatcher};
//!
//! let matcher = AspectMatcher::with_defaults();
//! let separation = minimal_separation(0.0, 180.0);
//! assert_eq!(separation, 182.0);
//!
//! let matched = matcher.classify(separation).expect("opposition");
//! assert_eq!(matched.name, "opposition");
//! assert_eq!(matched.phase_count, 6);
//! ```

mod cluster;
mod matcher;

#[cfg(test)]
mod tests;

pub use cluster::Cluster;
pub use matcher::{minimal_separation, AspectMatch, AspectMatcher, BodyPosition, PairAspect};

//! Degree conversion: the 360-degree tropical ring onto the 364-degree
//! prime ring, with phase and house resolution.
//!
//! Every function here is total over the reals: out-of-range and negative
//! longitudes normalize by floored modulo rather than erroring. The one
//! contract check is [`resolve_house`], which refuses house tables with
//! fewer than 13 cusps.
//!
//! # Example
//!
//! ```
//! use prime_zodiac_engine::degree::{to_prime_degree, resolve_phase};
//!
//! let prime = to_prime_degree(90.0);
//! assert!((prime - 91.0).abs() < 1e-9);
//!
//! let phase = resolve_phase(prime);
//! assert_eq!(phase.phase_number, 4);
//! ```

mod converter;


pub use converter::{
    house_cusps, resolve_house, resolve_phase, to_prime_degree, to_prime_degree_configured,
    to_prime_degree_with_epsilon, HousePosition, PhasePosition,
};

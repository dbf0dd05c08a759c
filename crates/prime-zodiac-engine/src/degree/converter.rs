//! Tropical-to-prime conversion and phase/house resolution.

use serde::{Deserialize, Serialize};
use tracing::trace;

use prime_zodiac_core::{BOUNDARY_EPSILON, PHASE_COUNT, PHASE_SPAN, PRIME_RING, TROPICAL_RING};

use crate::config::DegreeConfig;
use crate::error::{EngineError, EngineResult};

/// A resolved position within one phase of the prime ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhasePosition {
    /// Phase number, 1..=13.
    pub phase_number: u8,

    /// Offset into the phase, in `[0, 28)` prime degrees.
    pub degree_in_phase: f64,
}

/// A resolved house membership relative to an ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousePosition {
    /// House number, 1..=13.
    pub house_number: u8,

    /// Whether the position falls in the restored thirteenth house.
    pub is_thirteenth_house: bool,
}

/// Convert a tropical longitude to a prime degree in `[0, 364)`.
///
/// Scales by 364/360, normalizes with floored modulo (so any real input,
/// negative or beyond 360, lands in range), then snaps values within
/// [`BOUNDARY_EPSILON`] of 364 down to 0.
///
/// # Example
///
/// ```
/// use prime_zodiac_engine::degree::to_prime_degree;
///
/// assert_eq!(to_prime_degree(0.0), 0.0);
/// assert_eq!(to_prime_degree(-360.0), 0.0);
/// assert!((to_prime_degree(180.0) - 182.0).abs() < 1e-9);
/// ```
#[inline]
pub fn to_prime_degree(tropical: f64) -> f64 {
    to_prime_degree_with_epsilon(tropical, BOUNDARY_EPSILON)
}

/// [`to_prime_degree`] using a configured snap tolerance.
pub fn to_prime_degree_configured(config: &DegreeConfig, tropical: f64) -> f64 {
    to_prime_degree_with_epsilon(tropical, config.boundary_epsilon)
}

/// [`to_prime_degree`] with an explicit boundary snap tolerance.
pub fn to_prime_degree_with_epsilon(tropical: f64, epsilon: f64) -> f64 {
    let scaled = tropical * (PRIME_RING / TROPICAL_RING);
    let normalized = scaled.rem_euclid(PRIME_RING);

    // rem_euclid keeps the value below 364 mathematically, but rounding can
    // leave it a hair under the boundary; snap that to 0.
    if PRIME_RING - normalized < epsilon {
        0.0
    } else {
        normalized
    }
}

/// Resolve a prime degree to its phase number and offset.
///
/// The phase index floors `prime / 28` and is clamped into `[0, 12]` to
/// absorb floating-point overshoot at the upper boundary.
pub fn resolve_phase(prime: f64) -> PhasePosition {
    let phase_index = ((prime / PHASE_SPAN).floor() as i64).clamp(0, PHASE_COUNT as i64 - 1);

    PhasePosition {
        phase_number: (phase_index + 1) as u8,
        degree_in_phase: prime.rem_euclid(PHASE_SPAN),
    }
}

/// The 13 house cusps for an ascendant, in ascending phase order.
///
/// Cusp `i` sits `i * 28` prime degrees past the unified ascendant, wrapped
/// on the ring. Cusp 0 is the ascendant itself.
pub fn house_cusps(ascendant_tropical: f64) -> [f64; PHASE_COUNT] {
    let ascendant = to_prime_degree(ascendant_tropical);
    let mut cusps = [0.0; PHASE_COUNT];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = (ascendant + i as f64 * PHASE_SPAN).rem_euclid(PRIME_RING);
    }
    cusps
}

/// Resolve which house a tropical longitude falls in.
///
/// Measures the position's prime degree relative to cusp 0 (the
/// ascendant), wrapped into `[0, 364)`, and floors into 28-degree houses.
///
/// # Errors
///
/// Returns [`EngineError::IncompleteHouseTable`] when fewer than 13 cusps
/// are supplied; membership is indeterminate against a partial table.
pub fn resolve_house(tropical: f64, cusps: &[f64]) -> EngineResult<HousePosition> {
    if cusps.len() < PHASE_COUNT {
        return Err(EngineError::IncompleteHouseTable {
            expected: PHASE_COUNT,
            actual: cusps.len(),
        });
    }

    let prime = to_prime_degree(tropical);
    let relative = (prime - cusps[0]).rem_euclid(PRIME_RING);
    let house_index = ((relative / PHASE_SPAN).floor() as i64).clamp(0, PHASE_COUNT as i64 - 1);

    trace!(tropical, prime, relative, house_index, "resolved house");

    Ok(HousePosition {
        house_number: (house_index + 1) as u8,
        is_thirteenth_house: house_index == PHASE_COUNT as i64 - 1,
    })
}

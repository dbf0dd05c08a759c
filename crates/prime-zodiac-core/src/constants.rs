//! Ring geometry and epoch constants.
//!
//! The unified ring is 364 units wide, split into 13 equal phases of 28
//! units each. Both the spatial table (signs over degrees) and the temporal
//! table (moons over days) share this geometry, which is what makes the
//! space/time bridge an identity mapping.

/// Width of the traditional tropical ring, in degrees.
pub const TROPICAL_RING: f64 = 360.0;

/// Width of the unified prime ring, in prime degrees (13 × 28).
pub const PRIME_RING: f64 = 364.0;

/// Number of phases on the prime ring.
pub const PHASE_COUNT: usize = 13;

/// Width of a single phase, in prime degrees (or days, on the temporal ring).
pub const PHASE_SPAN: f64 = 28.0;

/// Longest possible minimal separation between two points on the prime ring.
pub const HALF_PRIME_RING: f64 = 182.0;

/// Length of the weekday cycle.
pub const WEEK_LENGTH: usize = 7;

/// Offset added to a phase year to produce its cycle count.
///
/// Anchors the year numbering to the system's historical epoch.
pub const CYCLE_EPOCH_OFFSET: i64 = 28000;

/// Day index of the Day Out of Time, counted from the epoch anchor.
///
/// The day index closest to `364 / φ` (φ the golden ratio, ≈ 1.618);
/// independent of leap years.
pub const DAY_OUT_OF_TIME_OFFSET: i64 = 225;

/// Snap tolerance for values that land on the upper ring boundary.
///
/// A scaled degree within this distance of [`PRIME_RING`] is treated as 0,
/// so the half-open `[0, 364)` contract holds under floating-point error.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_geometry_is_consistent() {
        assert_eq!(PHASE_COUNT as f64 * PHASE_SPAN, PRIME_RING);
        assert_eq!(HALF_PRIME_RING * 2.0, PRIME_RING);
    }

    #[test]
    fn test_day_out_of_time_is_nearest_to_golden_section() {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let golden_day = PRIME_RING / phi;
        assert!((golden_day - DAY_OUT_OF_TIME_OFFSET as f64).abs() < 0.5);
    }
}

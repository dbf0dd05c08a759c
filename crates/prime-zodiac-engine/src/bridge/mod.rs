//! The space/time bridge: one phase index read against both tables.
//!
//! The spatial ring (364 prime degrees) and the temporal ring (364 days)
//! share the 13 × 28 geometry, so a prime degree's phase index addresses
//! both the sign table and the moon table, and its degree-in-phase maps
//! onto a day-in-phase by identity. This module only composes lookups; all
//! arithmetic lives in [`crate::degree`] and [`crate::ternary`].

mod descriptor;


pub use descriptor::{BridgeDescriptor, SpaceTimeBridge};

//! Stellium-style cluster detection on the legacy 360-degree grid.
//!
//! Clustering predates the prime ring and stays on the traditional
//! 12-sign geometry: positions are bucketed into fixed windows (30 degrees
//! by default) of the 360-degree circle, independent of the 364-degree
//! system used everywhere else.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matcher::BodyPosition;

/// A window of the 360-degree circle holding at least the threshold number
/// of bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Lower bound of the window, in tropical degrees.
    pub window_start: f64,

    /// Window width, in tropical degrees.
    pub window_width: f64,

    /// Names of the bodies inside the window, in input order.
    pub members: Vec<String>,
}

/// Bucket positions into fixed windows and report the full ones.
pub(super) fn detect_clusters_with(
    positions: &[BodyPosition],
    group_width: f64,
    threshold: usize,
) -> Vec<Cluster> {
    let bucket_count = (360.0 / group_width).ceil() as usize;
    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); bucket_count];

    for position in positions {
        let normalized = position.tropical.rem_euclid(360.0);
        let index = ((normalized / group_width).floor() as usize).min(bucket_count - 1);
        buckets[index].push(&position.name);
    }

    let clusters: Vec<Cluster> = buckets
        .into_iter()
        .enumerate()
        .filter(|(_, members)| members.len() >= threshold)
        .map(|(index, members)| Cluster {
            window_start: index as f64 * group_width,
            window_width: group_width,
            members: members.into_iter().map(str::to_string).collect(),
        })
        .collect();

    if !clusters.is_empty() {
        debug!(count = clusters.len(), "detected position clusters");
    }
    clusters
}

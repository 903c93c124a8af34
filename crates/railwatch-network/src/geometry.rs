//! Position math on the schematic map.
//!
//! A train's rendered position is the linear interpolation between its
//! segment's two endpoint stations at the train's progress parameter.
//! The SVG curve of the segment is cosmetic and never affects position.

use railwatch_types::{MapPoint, SegmentId, Train};
use tracing::debug;

use crate::network::RailNetwork;

/// Linear interpolation between two map points at parameter `t` in `[0, 1]`.
///
/// Uses the weighted form so that `t = 0` and `t = 1` return the endpoints
/// exactly regardless of rounding.
pub fn lerp(start: MapPoint, end: MapPoint, t: f64) -> MapPoint {
    MapPoint {
        x: start.x.mul_add(1.0 - t, end.x * t),
        y: start.y.mul_add(1.0 - t, end.y * t),
    }
}

/// Position along a segment at the given progress.
///
/// Progress is clamped into `[0, 1]`. An unknown segment yields the map
/// origin `(0, 0)` rather than an error; such lookups indicate caller
/// misuse and are logged at debug level.
pub fn position_on(network: &RailNetwork, segment: &SegmentId, progress: f64) -> MapPoint {
    network.segment(segment).map_or_else(
        || {
            debug!(segment = %segment, "position lookup for unknown segment");
            MapPoint::ORIGIN
        },
        |seg| lerp(seg.start.position, seg.end.position, progress.clamp(0.0, 1.0)),
    )
}

/// Rendered position of a train on the schematic map.
pub fn train_position(network: &RailNetwork, train: &Train) -> MapPoint {
    position_on(network, &train.segment, train.progress)
}

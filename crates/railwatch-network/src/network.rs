//! The rail network: a keyed registry of static segments.
//!
//! Segments are reference data loaded once at startup and never mutated
//! afterwards. A [`BTreeMap`] keyed by [`SegmentId`] gives deterministic
//! iteration order for rendering and tests.

use std::collections::BTreeMap;

use railwatch_types::{Segment, SegmentId};
use serde::{Deserialize, Serialize};

/// Registry of all segments in the rail network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RailNetwork {
    /// All segments, keyed by their label.
    segments: BTreeMap<SegmentId, Segment>,
}

impl RailNetwork {
    /// Create an empty network.
    pub const fn new() -> Self {
        Self {
            segments: BTreeMap::new(),
        }
    }

    /// Add a segment to the network, replacing any segment with the same id.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.insert(segment.id.clone(), segment);
    }

    /// Look up a segment by id.
    pub fn segment(&self, id: &SegmentId) -> Option<&Segment> {
        self.segments.get(id)
    }

    /// Whether a segment with the given id exists.
    pub fn contains(&self, id: &SegmentId) -> bool {
        self.segments.contains_key(id)
    }

    /// Number of segments in the network.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the network has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over all segments in label order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Iterate over all segment ids in label order.
    pub fn segment_ids(&self) -> impl Iterator<Item = &SegmentId> {
        self.segments.keys()
    }
}

//! Schedule board ordering and per-row expansion flags.

use std::collections::BTreeSet;

use railwatch_types::{Train, TrainId};

/// Order trains for the schedule board.
///
/// Sorts by ascending priority (lower rank is more urgent), ties broken
/// by ascending ETA. The sort is stable, so trains tied on both keys
/// keep their feed order, and re-sorting an ordered list is a fixpoint.
pub fn schedule_order(trains: &[Train]) -> Vec<&Train> {
    let mut ordered: Vec<&Train> = trains.iter().collect();
    ordered.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.eta.cmp(&b.eta)));
    ordered
}

/// Which schedule rows are expanded to show train detail.
///
/// Expansion is independent of selection: any number of rows may be
/// open at once, and rows stay expanded across position updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows(BTreeSet<TrainId>);

impl ExpandedRows {
    /// Flip a row's expansion flag; returns `true` if it is now expanded.
    pub fn toggle(&mut self, train: &TrainId) -> bool {
        if self.0.remove(train) {
            false
        } else {
            self.0.insert(train.clone());
            true
        }
    }

    /// Whether a row is currently expanded.
    pub fn is_expanded(&self, train: &TrainId) -> bool {
        self.0.contains(train)
    }

    /// Number of expanded rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no rows are expanded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

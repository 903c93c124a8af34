//! Enumeration types shared across the RailWatch workspace.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Train status
// ---------------------------------------------------------------------------

/// Operational status tag attached to a train.
///
/// Status is reported by the feed alongside the delay figure but is not
/// derived from it; the two can disagree (a stopped train may carry a
/// positive delay, an on-time train exactly zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "kebab-case")]
pub enum TrainStatus {
    /// Running on schedule.
    OnTime,
    /// Running behind schedule.
    Delayed,
    /// Running ahead of schedule.
    Ahead,
    /// Not currently moving.
    Stopped,
}

impl TrainStatus {
    /// Fixed display color for this status, as a CSS hex string.
    pub const fn display_color(self) -> &'static str {
        match self {
            Self::OnTime => "#00D1B2",
            Self::Delayed => "#FF6B6B",
            Self::Ahead => "#4ECDC4",
            Self::Stopped => "#FFB86B",
        }
    }

    /// Display color used when no status is available.
    pub const fn fallback_color() -> &'static str {
        "#00D1B2"
    }
}

// ---------------------------------------------------------------------------
// Notification kind
// ---------------------------------------------------------------------------

/// Category of a dashboard notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational -- a notable event that does not require action.
    Info,
    /// Warning -- an operator intervention was initiated.
    Warning,
    /// Delay alert -- a train is running significantly late.
    Delay,
}

// ---------------------------------------------------------------------------
// Scenario kind
// ---------------------------------------------------------------------------

/// Kind of what-if intervention evaluated by the impact estimator.
///
/// Dialog payloads deserialize into this enum; an unrecognized kind maps
/// to [`Unknown`](Self::Unknown) and estimates to zero impact rather
/// than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Temporarily stop the train at its current position.
    Hold,
    /// Move the train to an alternative segment.
    Reroute,
    /// Adjust the train's priority level.
    Priority,
    /// Forward-compatibility catch-all for unrecognized kinds.
    #[serde(other)]
    Unknown,
}

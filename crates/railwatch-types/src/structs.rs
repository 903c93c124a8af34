//! Core entity structs for the RailWatch dashboard.
//!
//! Field renames mirror the JSON shapes the dashboard frontend consumes
//! (`trainId`, `holdDuration`, ...), so the exported `TypeScript` bindings
//! match the wire data byte for byte.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{NotificationKind, ScenarioKind, TrainStatus};
use crate::ids::{NotificationId, SegmentId, TrainId};

// ---------------------------------------------------------------------------
// Map geometry
// ---------------------------------------------------------------------------

/// A point in the schematic map's planar coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MapPoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl MapPoint {
    /// The map origin, used as the fallback position for unknown segments.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from raw coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named station anchoring one end of a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Station {
    /// Display name, e.g. `"New Delhi"`.
    pub name: String,
    /// Position on the schematic map.
    pub position: MapPoint,
}

impl Station {
    /// Create a station from a name and map coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: MapPoint::new(x, y),
        }
    }
}

/// A static named path between two stations.
///
/// Segments are immutable reference data for the lifetime of the process.
/// The `path` descriptor is an SVG curve used only for drawing; computed
/// train positions interpolate the straight line between the two endpoint
/// stations and ignore the curve entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Segment {
    /// Segment label, e.g. `"S1"`.
    pub id: SegmentId,
    /// Display name, e.g. `"New Delhi - Gurgaon"`.
    pub name: String,
    /// SVG path descriptor for rendering (cosmetic only).
    pub path: String,
    /// Station at progress 0.
    pub start: Station,
    /// Station at progress 1.
    pub end: Station,
}

// ---------------------------------------------------------------------------
// Train
// ---------------------------------------------------------------------------

/// A tracked train: position along a segment, schedule, and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// Operator-assigned train number.
    #[serde(rename = "trainId")]
    pub id: TrainId,
    /// The segment this train currently runs on.
    pub segment: SegmentId,
    /// Current speed in km/h. Never negative.
    pub speed: f64,
    /// Estimated arrival time.
    pub eta: DateTime<Utc>,
    /// Reported operational status (not derived from `delay`).
    pub status: TrainStatus,
    /// Priority rank; lower is more urgent.
    pub priority: u8,
    /// Origin station label.
    pub origin: String,
    /// Destination station label.
    pub destination: String,
    /// Fractional position along the segment, in `[0, 1]`.
    pub progress: f64,
    /// Delay in minutes; negative means ahead of schedule.
    pub delay: f64,
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// A transient, auto-expiring user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique, time-ordered identifier.
    pub id: NotificationId,
    /// Notification category.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short headline, e.g. `"Delay Alert"`.
    pub title: String,
    /// Body text.
    pub message: String,
    /// The train this notification refers to, if any. Identity only --
    /// the notification never owns or extends the train's lifecycle.
    #[serde(rename = "trainId")]
    pub train: Option<TrainId>,
    /// Creation timestamp.
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification stamped with a fresh id and the current time.
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        train: Option<TrainId>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            train,
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario simulation
// ---------------------------------------------------------------------------

/// A what-if intervention request from the simulation dialog.
///
/// Parameter fields all carry the dialog's defaults so a payload only
/// needs to name the fields relevant to its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScenarioRequest {
    /// Which intervention to evaluate.
    pub kind: ScenarioKind,
    /// Hold duration in minutes (hold scenarios). Valid range 1-30.
    #[serde(rename = "holdDuration", default = "default_hold_minutes")]
    pub hold_minutes: u32,
    /// Alternative segment (reroute scenarios).
    #[serde(rename = "rerouteSegment", default = "default_alternate_segment")]
    pub alternate_segment: SegmentId,
    /// Requested priority level (priority scenarios). Valid levels 1-3.
    #[serde(rename = "priorityLevel", default = "default_priority_level")]
    pub priority_level: u8,
}

const fn default_hold_minutes() -> u32 {
    10
}

fn default_alternate_segment() -> SegmentId {
    SegmentId::new("S2")
}

const fn default_priority_level() -> u8 {
    2
}

impl ScenarioRequest {
    /// A hold request for the given duration, other parameters at defaults.
    pub fn hold(minutes: u32) -> Self {
        Self {
            kind: ScenarioKind::Hold,
            hold_minutes: minutes,
            ..Self::default()
        }
    }

    /// A reroute request onto the given segment, other parameters at defaults.
    pub fn reroute(segment: SegmentId) -> Self {
        Self {
            kind: ScenarioKind::Reroute,
            alternate_segment: segment,
            ..Self::default()
        }
    }

    /// A priority-change request to the given level, other parameters at defaults.
    pub fn priority(level: u8) -> Self {
        Self {
            kind: ScenarioKind::Priority,
            priority_level: level,
            ..Self::default()
        }
    }
}

impl Default for ScenarioRequest {
    /// The dialog's initial state: a 10-minute hold.
    fn default() -> Self {
        Self {
            kind: ScenarioKind::Hold,
            hold_minutes: default_hold_minutes(),
            alternate_segment: default_alternate_segment(),
            priority_level: default_priority_level(),
        }
    }
}

/// Predicted impact of a scenario, for display only.
///
/// Estimates never feed back into train state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ImpactEstimate {
    /// Change in delay, in minutes. Positive means more delay.
    #[serde(rename = "delayChange")]
    pub delay_change: i64,
    /// Change in network throughput, in percent.
    #[serde(rename = "throughputImpact")]
    pub throughput_impact: i64,
    /// Number of trains the intervention would touch.
    #[serde(rename = "affectedTrains")]
    pub affected_trains: u32,
}

impl ImpactEstimate {
    /// The zero-impact estimate returned for unrecognized scenario kinds.
    pub const NONE: Self = Self {
        delay_change: 0,
        throughput_impact: 0,
        affected_trains: 0,
    };
}

// ---------------------------------------------------------------------------
// KPIs and analytics
// ---------------------------------------------------------------------------

/// Headline key-performance indicators shown in the KPI column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Kpis {
    /// Network throughput in trains per hour.
    pub throughput: f64,
    /// Mean delay across tracked trains, in minutes.
    #[serde(rename = "avgDelay")]
    pub avg_delay: f64,
    /// Network utilization as a percentage.
    pub utilization: f64,
}

/// One point of the throughput time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ThroughputPoint {
    /// Time-of-day label, e.g. `"12:30"`.
    pub time: String,
    /// Trains per hour at that time.
    pub value: f64,
}

impl ThroughputPoint {
    /// Create a point from a label and value.
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self {
            time: time.into(),
            value,
        }
    }
}

/// One cell of the delay heatmap: mean delay for a segment during an hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HeatmapCell {
    /// The segment this cell describes.
    pub segment: SegmentId,
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Mean observed delay in minutes.
    pub delay: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn train_serializes_with_frontend_field_names() {
        let train = Train {
            id: TrainId::from("502"),
            segment: SegmentId::from("S1"),
            speed: 48.0,
            eta: Utc::now(),
            status: TrainStatus::OnTime,
            priority: 2,
            origin: String::from("New Delhi"),
            destination: String::from("Gurgaon"),
            progress: 0.65,
            delay: 0.0,
        };
        let value = serde_json::to_value(&train).unwrap();
        assert_eq!(value["trainId"], "502");
        assert_eq!(value["status"], "on-time");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn notification_serializes_kind_as_type() {
        let n = Notification::new(
            NotificationKind::Delay,
            "Delay Alert",
            "Predicted delay: 12 minutes",
            Some(TrainId::from("728")),
        );
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(value["type"], "delay");
        assert_eq!(value["trainId"], "728");
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn scenario_request_fills_missing_params_with_dialog_defaults() {
        let parsed: ScenarioRequest = serde_json::from_str(r#"{"kind":"reroute"}"#).unwrap();
        assert_eq!(parsed.kind, ScenarioKind::Reroute);
        assert_eq!(parsed.hold_minutes, 10);
        assert_eq!(parsed.alternate_segment, SegmentId::from("S2"));
        assert_eq!(parsed.priority_level, 2);
    }
}

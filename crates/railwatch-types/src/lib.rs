//! Shared type definitions for the RailWatch control dashboard.
//!
//! This crate is the single source of truth for all types used across the
//! RailWatch workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers (train/segment labels,
//!   notification and listener UUIDs)
//! - [`enums`] -- Enumeration types (train status, notification kind,
//!   scenario kind)
//! - [`structs`] -- Core entity structs (trains, segments, notifications,
//!   scenario requests, KPIs)
//! - [`messages`] -- The feed message envelope

pub mod enums;
pub mod ids;
pub mod messages;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{NotificationKind, ScenarioKind, TrainStatus};
pub use ids::{ListenerId, NotificationId, SegmentId, TrainId};
pub use messages::FeedMessage;
pub use structs::{
    HeatmapCell, ImpactEstimate, Kpis, MapPoint, Notification, ScenarioRequest, Segment, Station,
    ThroughputPoint, Train,
};

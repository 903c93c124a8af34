//! Dashboard state for the RailWatch train traffic control system.
//!
//! This crate is the consumer side of the update pipeline: a
//! [`Dashboard`] subscribes to the positions feed, owns all mutable
//! UI-facing state (trains, notifications, selection, analytics), and
//! exposes the pure derived views a frontend renders from. Data flows
//! one direction: feed message in, state replaced, views recomputed.
//!
//! # Modules
//!
//! - [`config`] -- [`DashboardConfig`] (alert throttle, queue bounds, timers)
//! - [`state`] -- [`DashboardState`] controller and the shared [`Dashboard`] handle
//! - [`listener`] -- [`DashboardListener`], the feed-to-dashboard bridge
//! - [`notifications`] -- bounded auto-dismissing notification queue
//! - [`selection`] -- selection / simulation-dialog state machine
//! - [`schedule`] -- schedule-board ordering and row expansion
//! - [`scenario`] -- what-if impact estimation
//! - [`metrics`] -- KPIs, throughput history, delay heatmap

pub mod config;
pub mod listener;
pub mod metrics;
pub mod notifications;
pub mod scenario;
pub mod schedule;
pub mod selection;
pub mod state;

pub use config::DashboardConfig;
pub use listener::DashboardListener;
pub use metrics::{DelayHeatmap, ThroughputSeries, live_kpis, seed_kpis};
pub use notifications::NotificationCenter;
pub use scenario::estimate;
pub use schedule::{ExpandedRows, schedule_order};
pub use selection::Selection;
pub use state::{Dashboard, DashboardState};

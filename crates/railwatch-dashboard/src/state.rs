//! The dashboard state controller.
//!
//! [`DashboardState`] is the single consumer of feed messages: it owns
//! the authoritative train list, the notification queue, selection and
//! expansion state, and the analytics. [`Dashboard`] wraps it in a
//! cheaply cloneable shared handle so the feed-listener path, user
//! actions, and the startup-notice timer all mutate through one lock.
//! Nothing holds that lock across an await.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Timelike, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use railwatch_types::{
    FeedMessage, Kpis, Notification, NotificationId, NotificationKind, Train, TrainId,
};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::metrics::{self, DelayHeatmap, ThroughputSeries};
use crate::notifications::NotificationCenter;
use crate::schedule::{self, ExpandedRows};
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// State controller
// ---------------------------------------------------------------------------

/// All mutable dashboard-facing state.
#[derive(Debug)]
pub struct DashboardState {
    /// Authoritative train list, replaced wholesale by each snapshot.
    trains: Vec<Train>,
    /// Timestamp of the last applied snapshot.
    last_update: Option<DateTime<Utc>>,
    /// Number of snapshots applied so far.
    tick_count: u64,
    /// Selection and simulation-dialog state.
    selection: Selection,
    /// Expanded schedule rows.
    expanded: ExpandedRows,
    /// Notification queue handle.
    notifications: NotificationCenter,
    /// Headline KPIs, recomputed per snapshot.
    kpis: Kpis,
    /// Trains-per-hour history.
    series: ThroughputSeries,
    /// Mean delay per segment per hour.
    heatmap: DelayHeatmap,
    /// Sampler for the delay-alert throttle.
    rng: SmallRng,
    config: DashboardConfig,
    /// Whether the one-time startup notice has fired.
    online_notice_sent: bool,
}

impl DashboardState {
    /// Create the controller over an initial train snapshot.
    ///
    /// The dashboard starts populated, exactly as the feed does, so the
    /// startup notice and first render reflect real counts rather than
    /// an empty list.
    pub fn new(config: DashboardConfig, initial_trains: Vec<Train>) -> Self {
        Self {
            trains: initial_trains,
            last_update: None,
            tick_count: 0,
            selection: Selection::default(),
            expanded: ExpandedRows::default(),
            notifications: NotificationCenter::new(
                config.notification_capacity,
                config.notification_ttl(),
            ),
            kpis: metrics::seed_kpis(),
            series: ThroughputSeries::seeded(),
            heatmap: DelayHeatmap::seeded(),
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            online_notice_sent: false,
        }
    }

    /// Apply one feed message.
    ///
    /// A positions message replaces the train list wholesale
    /// (last-write-wins, no merge), refreshes the KPIs and heatmap, and
    /// rolls the delay-alert throttle once per train over the threshold.
    /// Unrecognized message types are ignored.
    pub fn apply_message(&mut self, message: &FeedMessage) {
        match message {
            FeedMessage::Positions { payload, ts } => {
                self.trains = payload.clone();
                self.tick_count = self.tick_count.saturating_add(1);
                self.last_update = Some(*ts);
                self.kpis = metrics::live_kpis(&self.trains, self.kpis);

                let hour = u8::try_from(ts.hour()).unwrap_or(0);
                let threshold = self.config.delay_threshold_minutes;
                let probability = self.config.delay_alert_probability.clamp(0.0, 1.0);
                for train in &self.trains {
                    self.heatmap.observe(&train.segment, hour, train.delay);
                    if train.delay > threshold && self.rng.random_bool(probability) {
                        self.notifications.notify(
                            NotificationKind::Delay,
                            "Delay Alert",
                            format!("Predicted delay: {:.0} minutes", train.delay),
                            Some(train.id.clone()),
                        );
                    }
                }

                debug!(
                    tick = self.tick_count,
                    trains = self.trains.len(),
                    "positions snapshot applied"
                );
            }
            FeedMessage::Unknown => debug!("unrecognized feed message ignored"),
        }
    }

    // --- User actions ---

    /// Select a train for inspection.
    ///
    /// Ignored while the simulation dialog is open.
    pub fn select_train(&mut self, train: TrainId) -> bool {
        self.selection.select(train)
    }

    /// Hold a train at its current position.
    ///
    /// Cosmetic only: enqueues the warning notification and never
    /// mutates the train.
    pub fn hold_train(&self, train: &TrainId) -> NotificationId {
        info!(train = %train, "hold initiated");
        self.notifications.notify(
            NotificationKind::Warning,
            "Train Hold Initiated",
            format!("Train {train} will be held at current position"),
            Some(train.clone()),
        )
    }

    /// Select a train and open the simulation dialog for it.
    pub fn reroute_train(&mut self, train: TrainId) {
        info!(train = %train, "reroute requested, opening simulation dialog");
        self.selection.open_dialog_for(train);
    }

    /// Flip a schedule row's expansion flag; returns the new state.
    pub fn toggle_expanded(&mut self, train: &TrainId) -> bool {
        self.expanded.toggle(train)
    }

    /// Open the simulation dialog, keeping the current selection.
    pub fn open_dialog(&mut self) {
        self.selection.open_dialog();
    }

    /// Close the simulation dialog, restoring the prior selection.
    pub fn close_dialog(&mut self) {
        self.selection.close_dialog();
    }

    /// Dismiss a notification explicitly.
    pub fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Send the one-time startup notice if it has not fired yet.
    pub fn send_online_notice(&mut self) -> bool {
        if self.online_notice_sent {
            return false;
        }
        self.online_notice_sent = true;
        let count = self.trains.len();
        info!(trains = count, "system online");
        self.notifications.notify(
            NotificationKind::Info,
            "System Online",
            format!("Train traffic control system is monitoring {count} active trains"),
            None,
        );
        true
    }

    /// Record a real throughput reading into the history.
    pub fn record_throughput(&mut self, time: impl Into<String>, value: f64) {
        self.series.record(time, value);
    }

    // --- Read access ---

    /// The current train snapshot.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Trains in schedule-board order.
    pub fn schedule(&self) -> Vec<&Train> {
        schedule::schedule_order(&self.trains)
    }

    /// Number of snapshots applied so far.
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Timestamp of the last applied snapshot, if any.
    pub const fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Current headline KPIs.
    pub const fn kpis(&self) -> Kpis {
        self.kpis
    }

    /// Current selection state.
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Expanded schedule rows.
    pub const fn expanded(&self) -> &ExpandedRows {
        &self.expanded
    }

    /// Current notifications, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.snapshot()
    }

    /// Trains-per-hour history.
    pub const fn series(&self) -> &ThroughputSeries {
        &self.series
    }

    /// Delay heatmap.
    pub const fn heatmap(&self) -> &DelayHeatmap {
        &self.heatmap
    }

    /// The configuration this controller was built with.
    pub const fn config(&self) -> DashboardConfig {
        self.config
    }
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// Cheaply cloneable shared handle to a [`DashboardState`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    state: Arc<Mutex<DashboardState>>,
}

impl Dashboard {
    /// Create a shared dashboard over an initial train snapshot.
    pub fn new(config: DashboardConfig, initial_trains: Vec<Train>) -> Self {
        Self {
            state: Arc::new(Mutex::new(DashboardState::new(config, initial_trains))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a closure against the locked state.
    ///
    /// For compound reads that should observe one consistent snapshot.
    pub fn with_state<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        f(&self.lock())
    }

    /// Apply one feed message. See [`DashboardState::apply_message`].
    pub fn apply_message(&self, message: &FeedMessage) {
        self.lock().apply_message(message);
    }

    /// Select a train for inspection.
    pub fn select_train(&self, train: TrainId) -> bool {
        self.lock().select_train(train)
    }

    /// Hold a train at its current position (cosmetic).
    pub fn hold_train(&self, train: &TrainId) -> NotificationId {
        self.lock().hold_train(train)
    }

    /// Select a train and open the simulation dialog for it.
    pub fn reroute_train(&self, train: TrainId) {
        self.lock().reroute_train(train);
    }

    /// Flip a schedule row's expansion flag.
    pub fn toggle_expanded(&self, train: &TrainId) -> bool {
        self.lock().toggle_expanded(train)
    }

    /// Open the simulation dialog, keeping the current selection.
    pub fn open_dialog(&self) {
        self.lock().open_dialog();
    }

    /// Close the simulation dialog, restoring the prior selection.
    pub fn close_dialog(&self) {
        self.lock().close_dialog();
    }

    /// Dismiss a notification explicitly.
    pub fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.lock().dismiss_notification(id)
    }

    /// Schedule the one-time "System Online" notice after the configured
    /// startup delay.
    ///
    /// Returns the timer task's handle. The notice fires at most once
    /// per dashboard no matter how often this is called.
    pub fn start_online_notice(&self) -> JoinHandle<()> {
        let dashboard = self.clone();
        let delay = self.lock().config().startup_notice_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            dashboard.lock().send_online_notice();
        })
    }

    /// A clone of the current train snapshot.
    pub fn trains(&self) -> Vec<Train> {
        self.lock().trains().to_vec()
    }

    /// Number of snapshots applied so far.
    pub fn tick_count(&self) -> u64 {
        self.lock().tick_count()
    }

    /// Timestamp of the last applied snapshot, if any.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.lock().last_update()
    }

    /// Current headline KPIs.
    pub fn kpis(&self) -> Kpis {
        self.lock().kpis()
    }

    /// Current selection state.
    pub fn selection(&self) -> Selection {
        self.lock().selection().clone()
    }

    /// Current notifications, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use chrono::TimeZone;
    use railwatch_types::{SegmentId, TrainStatus};

    use super::*;

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    fn train(id: &str, delay: f64) -> Train {
        Train {
            id: TrainId::new(id),
            speed: 45.0,
            segment: SegmentId::new("S1"),
            progress: 0.5,
            eta: Utc.with_ymd_and_hms(2025, 1, 20, 14, 30, 0).unwrap(),
            status: TrainStatus::OnTime,
            delay,
            priority: 2,
            origin: "A".to_owned(),
            destination: "B".to_owned(),
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, hour, minute, 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn positions_snapshot_replaces_the_train_list_wholesale() {
        let mut state = DashboardState::new(config(), vec![train("a", 0.0)]);

        state.apply_message(&FeedMessage::positions_at(
            vec![train("b", 0.0), train("c", 0.0)],
            at(14, 30),
        ));
        assert_eq!(state.trains().len(), 2);
        assert_eq!(state.tick_count(), 1);
        assert_eq!(state.last_update(), Some(at(14, 30)));

        state.apply_message(&FeedMessage::positions_at(vec![train("d", 0.0)], at(14, 33)));
        assert_eq!(state.trains().len(), 1);
        assert_eq!(state.trains()[0].id, TrainId::new("d"));
        assert_eq!(state.tick_count(), 2);
    }

    #[test]
    fn unrecognized_messages_are_ignored() {
        let mut state = DashboardState::new(config(), vec![train("a", 0.0)]);
        state.apply_message(&FeedMessage::Unknown);

        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.trains().len(), 1);
        assert_eq!(state.last_update(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_alerts_fire_only_above_the_threshold() {
        let cfg = DashboardConfig {
            delay_alert_probability: 1.0,
            ..config()
        };
        let mut state = DashboardState::new(cfg, Vec::new());

        // 12 is over the threshold; 10 is not strictly over; 3 is under.
        state.apply_message(&FeedMessage::positions_at(
            vec![train("late", 12.0), train("edge", 10.0), train("fine", 3.0)],
            at(14, 30),
        ));

        let notifications = state.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Delay);
        assert_eq!(notifications[0].title, "Delay Alert");
        assert_eq!(notifications[0].message, "Predicted delay: 12 minutes");
        assert_eq!(notifications[0].train, Some(TrainId::new("late")));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_probability_suppresses_every_alert() {
        let cfg = DashboardConfig {
            delay_alert_probability: 0.0,
            ..config()
        };
        let mut state = DashboardState::new(cfg, Vec::new());

        state.apply_message(&FeedMessage::positions_at(vec![train("late", 25.0)], at(14, 30)));
        assert!(state.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn alert_sampling_replays_under_the_same_seed() {
        let cfg = DashboardConfig {
            delay_alert_probability: 0.5,
            ..config()
        };
        let trains: Vec<Train> = (0..20).map(|i| train(&format!("t{i}"), 15.0)).collect();
        let message = FeedMessage::positions_at(trains, at(14, 30));

        let mut first = DashboardState::new(cfg, Vec::new());
        let mut second = DashboardState::new(cfg, Vec::new());
        first.apply_message(&message);
        second.apply_message(&message);

        let fired: Vec<Option<TrainId>> =
            first.notifications().into_iter().map(|n| n.train).collect();
        let refired: Vec<Option<TrainId>> =
            second.notifications().into_iter().map(|n| n.train).collect();
        assert_eq!(fired, refired);
    }

    #[tokio::test(start_paused = true)]
    async fn kpis_recompute_per_snapshot_with_throughput_carried() {
        let mut state = DashboardState::new(config(), Vec::new());
        assert_eq!(state.kpis(), metrics::seed_kpis());

        state.apply_message(&FeedMessage::positions_at(
            vec![train("a", 6.0), train("b", 3.0)],
            at(14, 30),
        ));
        let kpis = state.kpis();
        assert_eq!(kpis.throughput, 124.0);
        assert_eq!(kpis.avg_delay, 4.5);
        assert_eq!(kpis.utilization, 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn each_snapshot_folds_delays_into_the_heatmap() {
        let mut state = DashboardState::new(config(), Vec::new());

        // Seeded S1@14 is 6.0 from one reading; folding 12.0 in means 9.0.
        state.apply_message(&FeedMessage::positions_at(vec![train("a", 12.0)], at(14, 35)));
        assert_eq!(state.heatmap().mean(&SegmentId::new("S1"), 14), Some(9.0));
    }

    #[tokio::test(start_paused = true)]
    async fn startup_notice_fires_exactly_once() {
        let mut state = DashboardState::new(config(), vec![train("a", 0.0), train("b", 0.0)]);

        assert!(state.send_online_notice());
        assert!(!state.send_online_notice());

        let notifications = state.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Info);
        assert_eq!(notifications[0].title, "System Online");
        assert_eq!(
            notifications[0].message,
            "Train traffic control system is monitoring 2 active trains"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn hold_notifies_without_touching_the_train() {
        let state = DashboardState::new(config(), vec![train("502", 0.0)]);
        let before = state.trains().to_vec();

        state.hold_train(&TrainId::new("502"));
        assert_eq!(state.trains(), before.as_slice());
        assert_eq!(state.selection(), &Selection::Idle);

        let notifications = state.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Warning);
        assert_eq!(notifications[0].title, "Train Hold Initiated");
        assert_eq!(
            notifications[0].message,
            "Train 502 will be held at current position"
        );
        assert_eq!(notifications[0].train, Some(TrainId::new("502")));
    }

    #[tokio::test(start_paused = true)]
    async fn reroute_selects_and_opens_the_dialog() {
        let mut state = DashboardState::new(config(), vec![train("728", 0.0)]);
        state.reroute_train(TrainId::new("728"));

        assert_eq!(
            state.selection(),
            &Selection::SimulationOpen(Some(TrainId::new("728")))
        );

        state.close_dialog();
        assert_eq!(state.selection(), &Selection::TrainSelected(TrainId::new("728")));
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_notifications_goes_through_the_center() {
        let state = DashboardState::new(config(), Vec::new());
        let id = state.hold_train(&TrainId::new("502"));

        assert!(state.dismiss_notification(id));
        assert!(!state.dismiss_notification(id));
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn toggling_rows_tracks_expansion() {
        let mut state = DashboardState::new(config(), Vec::new());
        let id = TrainId::new("502");

        assert!(state.toggle_expanded(&id));
        assert!(state.expanded().is_expanded(&id));
        assert!(!state.toggle_expanded(&id));
        assert!(!state.expanded().is_expanded(&id));
    }

    #[tokio::test(start_paused = true)]
    async fn handle_clones_share_one_state() {
        let dashboard = Dashboard::new(config(), Vec::new());
        let clone = dashboard.clone();

        clone.apply_message(&FeedMessage::positions_at(vec![train("a", 0.0)], at(14, 30)));
        assert_eq!(dashboard.tick_count(), 1);
        assert_eq!(dashboard.trains().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn online_notice_arrives_after_the_configured_delay() {
        let dashboard = Dashboard::new(config(), vec![train("a", 0.0)]);
        let _notice = dashboard.start_online_notice();

        tokio::time::sleep(std::time::Duration::from_millis(1900)).await;
        assert!(dashboard.notifications().is_empty());

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let notifications = dashboard.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "System Online");

        // Scheduling again does not produce a second notice.
        let _again = dashboard.start_online_notice();
        tokio::time::sleep(std::time::Duration::from_millis(2100)).await;
        assert_eq!(dashboard.notifications().len(), 1);
    }
}

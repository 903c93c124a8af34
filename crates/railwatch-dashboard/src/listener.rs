//! Feed-to-dashboard bridge.

use railwatch_feed::FeedListener;
use railwatch_types::FeedMessage;

use crate::state::Dashboard;

/// Applies every feed message to a shared [`Dashboard`].
///
/// This is the listener the application registers with the feed; tests
/// that drive the dashboard directly can skip it and call
/// [`Dashboard::apply_message`] themselves.
pub struct DashboardListener {
    dashboard: Dashboard,
}

impl DashboardListener {
    /// Create a listener feeding the given dashboard handle.
    pub const fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

impl FeedListener for DashboardListener {
    fn on_message(&mut self, message: &FeedMessage) {
        self.dashboard.apply_message(message);
    }
}

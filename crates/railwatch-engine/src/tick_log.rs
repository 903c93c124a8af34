//! Per-tick logging listener.
//!
//! Registered alongside the dashboard listener so every broadcast also
//! produces one summary log line. At debug level it additionally logs
//! each train's interpolated map position, which is the engine's only
//! view onto the rail geometry.

use railwatch_feed::FeedListener;
use railwatch_network::{RailNetwork, train_position};
use railwatch_types::FeedMessage;
use tracing::{debug, info};

/// Logs a one-line summary of every positions message.
pub struct TickLogger {
    network: RailNetwork,
    ticks_seen: u64,
}

impl TickLogger {
    /// Create a logger resolving train positions against `network`.
    pub const fn new(network: RailNetwork) -> Self {
        Self {
            network,
            ticks_seen: 0,
        }
    }

    /// Number of positions messages observed so far.
    pub const fn ticks_seen(&self) -> u64 {
        self.ticks_seen
    }
}

impl FeedListener for TickLogger {
    fn on_message(&mut self, message: &FeedMessage) {
        let FeedMessage::Positions { payload, ts } = message else {
            debug!("unrecognized feed message ignored");
            return;
        };
        self.ticks_seen = self.ticks_seen.saturating_add(1);

        let late = payload.iter().filter(|train| train.delay > 0.0).count();
        let total_delay: f64 = payload.iter().map(|train| train.delay).sum();
        // Train counts are tiny; safe to represent as f64.
        #[allow(clippy::cast_precision_loss)]
        let avg_delay = if payload.is_empty() {
            0.0
        } else {
            total_delay / payload.len() as f64
        };

        info!(
            tick = self.ticks_seen,
            ts = %ts,
            trains = payload.len(),
            late,
            avg_delay = (avg_delay * 10.0).round() / 10.0,
            "positions tick"
        );

        for train in payload {
            let position = train_position(&self.network, train);
            debug!(
                train = %train.id,
                segment = %train.segment,
                progress = train.progress,
                x = position.x,
                y = position.y,
                "train position"
            );
        }
    }
}

//! The simulated positions feed.
//!
//! [`TrainFeed`] plays the role a live backend connection would: once
//! connected, a background task wakes every tick interval, advances the
//! held snapshot by one perturbation step, and fans the resulting
//! [`FeedMessage`] out to every registered listener in registration
//! order. Ticks are strictly sequential -- the next tick cannot begin
//! until every listener has observed the current message.
//!
//! The feed is an explicitly constructed service instance: callers own
//! it, start it with [`connect`](TrainFeed::connect), and stop it with
//! [`disconnect`](TrainFeed::disconnect), which cancels the tick task
//! outright and waits for it to finish. After `disconnect` returns, no
//! further delivery can occur.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use railwatch_types::{FeedMessage, ListenerId, Train};
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::FeedConfig;
use crate::perturb;

/// Receives every message the feed broadcasts.
///
/// Listeners are invoked sequentially in registration order, all with a
/// shared reference to the same message.
pub trait FeedListener: Send {
    /// Called once per tick with the freshly generated message.
    fn on_message(&mut self, message: &FeedMessage);
}

/// A no-op listener for testing.
pub struct NoOpListener;

impl FeedListener for NoOpListener {
    fn on_message(&mut self, _message: &FeedMessage) {}
}

/// State shared between the feed handle and its tick task.
struct FeedShared {
    /// Whether the feed is currently broadcasting.
    connected: AtomicBool,
    /// Registered listeners, in registration order.
    listeners: Mutex<Vec<(ListenerId, Box<dyn FeedListener>)>>,
    /// The current snapshot, perturbed in place each tick.
    trains: Mutex<Vec<Train>>,
    /// Signals the tick task to shut down.
    shutdown: Notify,
}

/// The simulated live feed of train position snapshots.
pub struct TrainFeed {
    config: FeedConfig,
    shared: Arc<FeedShared>,
    /// Handle of the running tick task, if connected.
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TrainFeed {
    /// Create a disconnected feed holding the given initial snapshot.
    pub fn new(config: FeedConfig, initial_trains: Vec<Train>) -> Self {
        Self {
            config,
            shared: Arc::new(FeedShared {
                connected: AtomicBool::new(false),
                listeners: Mutex::new(Vec::new()),
                trains: Mutex::new(initial_trains),
                shutdown: Notify::new(),
            }),
            task: Mutex::new(None),
        }
    }

    /// Whether the feed is currently broadcasting.
    pub fn is_connected(&self) -> bool {
        self.shared.connected.load(Ordering::SeqCst)
    }

    /// Register a listener; returns the id to later remove it with.
    ///
    /// Takes effect before the next tick.
    pub async fn add_listener(&self, listener: Box<dyn FeedListener>) -> ListenerId {
        let id = ListenerId::new();
        let mut listeners = self.shared.listeners.lock().await;
        listeners.push((id, listener));
        debug!(listener = %id, total = listeners.len(), "feed listener registered");
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Takes effect before the next tick. Returns `false` if the id was
    /// never registered (or already removed); that case is a no-op.
    pub async fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.shared.listeners.lock().await;
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = listeners.len() < before;
        if removed {
            debug!(listener = %id, "feed listener removed");
        } else {
            debug!(listener = %id, "remove for unknown listener ignored");
        }
        removed
    }

    /// Current snapshot (a clone of the feed's held trains).
    pub async fn current_trains(&self) -> Vec<Train> {
        self.shared.trains.lock().await.clone()
    }

    /// Start broadcasting.
    ///
    /// Spawns the tick task; the first message goes out one full tick
    /// interval after the call. Connecting an already-connected feed is
    /// a logged no-op -- there is never more than one tick task.
    pub async fn connect(&self) {
        if self.shared.connected.swap(true, Ordering::SeqCst) {
            warn!("feed already connected, ignoring connect");
            return;
        }

        let shared = Arc::clone(&self.shared);
        let period = self.config.tick_interval();
        let mut rng = SmallRng::seed_from_u64(self.config.seed);

        info!(
            tick_interval_ms = self.config.tick_interval_ms,
            seed = self.config.seed,
            "feed connected"
        );

        let handle = tokio::spawn(async move {
            let mut tick: u64 = 0;
            loop {
                tokio::select! {
                    () = shared.shutdown.notified() => break,
                    () = tokio::time::sleep(period) => {}
                }
                if !shared.connected.load(Ordering::SeqCst) {
                    break;
                }
                tick = tick.saturating_add(1);

                // --- Build the next snapshot ---
                let message = {
                    let mut trains = shared.trains.lock().await;
                    perturb::advance_trains(&mut trains, &mut rng);
                    FeedMessage::positions(trains.clone())
                };

                // --- Fan out, in registration order ---
                let mut listeners = shared.listeners.lock().await;
                debug!(tick, listeners = listeners.len(), "broadcasting snapshot");
                for (_, listener) in &mut *listeners {
                    listener.on_message(&message);
                }
            }
            debug!("feed tick task stopped");
        });

        *self.task.lock().await = Some(handle);
    }

    /// Stop broadcasting.
    ///
    /// Cancels the tick task and waits for it to finish, so zero
    /// deliveries occur after this returns. Disconnecting a feed that is
    /// not connected is a no-op.
    pub async fn disconnect(&self) {
        if !self.shared.connected.swap(false, Ordering::SeqCst) {
            return;
        }
        self.shared.shutdown.notify_one();
        let handle = self.task.lock().await.take();
        if let Some(handle) = handle {
            if handle.await.is_err() {
                warn!("feed tick task ended abnormally");
            }
        }
        info!("feed disconnected");
    }
}

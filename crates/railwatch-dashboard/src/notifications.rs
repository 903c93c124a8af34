//! Bounded notification queue with auto-dismissal.
//!
//! Notifications are held newest first, capped at a configured capacity
//! (oldest dropped). Every push schedules an auto-dismiss timer; manual
//! dismissal cancels the timer outright, so a dismissed notification can
//! never be removed twice and dismissing an unknown id is a harmless
//! no-op.
//!
//! The center is a cheap [`Clone`] handle around shared state, so the
//! dismiss timers it spawns can reach back into it. Pushing requires a
//! running Tokio runtime.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use railwatch_types::{Notification, NotificationId, NotificationKind, TrainId};
use tokio::task::AbortHandle;
use tracing::debug;

/// Shared queue state behind the center handle.
#[derive(Debug, Default)]
struct CenterInner {
    /// All live notifications, newest first.
    queue: Vec<Notification>,
    /// Pending auto-dismiss timers, keyed by notification id.
    timers: BTreeMap<NotificationId, AbortHandle>,
}

/// Handle to the dashboard's notification queue.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<CenterInner>>,
    capacity: usize,
    ttl: Duration,
}

impl NotificationCenter {
    /// Create a center holding at most `capacity` notifications, each
    /// auto-dismissed `ttl` after creation.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CenterInner::default())),
            capacity,
            ttl,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CenterInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create and enqueue a notification; returns its id.
    pub fn notify(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        train: Option<TrainId>,
    ) -> NotificationId {
        self.push(Notification::new(kind, title, message, train))
    }

    /// Enqueue a notification: prepend, bound the queue, and schedule
    /// its auto-dismissal.
    pub fn push(&self, notification: Notification) -> NotificationId {
        let id = notification.id;
        debug!(notification = %id, kind = ?notification.kind, title = notification.title, "notification pushed");

        let mut guard = self.lock();
        let inner = &mut *guard;
        inner.queue.insert(0, notification);

        // Bound the queue; notifications dropped here lose their timers too.
        if inner.queue.len() > self.capacity {
            for dropped in inner.queue.split_off(self.capacity) {
                if let Some(timer) = inner.timers.remove(&dropped.id) {
                    timer.abort();
                }
            }
        }

        let center = self.clone();
        let ttl = self.ttl;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            center.remove(id, "auto");
        });
        inner.timers.insert(id, handle.abort_handle());
        id
    }

    /// Dismiss a notification explicitly, cancelling its pending
    /// auto-dismiss timer.
    ///
    /// Returns `false` if the id is not (or no longer) present.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.remove(id, "manual")
    }

    fn remove(&self, id: NotificationId, reason: &str) -> bool {
        let mut guard = self.lock();
        let inner = &mut *guard;
        if let Some(timer) = inner.timers.remove(&id) {
            timer.abort();
        }
        let before = inner.queue.len();
        inner.queue.retain(|n| n.id != id);
        let removed = inner.queue.len() < before;
        if removed {
            debug!(notification = %id, reason, "notification dismissed");
        } else {
            debug!(notification = %id, reason, "dismiss for unknown notification ignored");
        }
        removed
    }

    /// Current notifications, newest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().queue.clone()
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }
}

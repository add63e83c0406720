//! Ordered set of transient notifications with timer-driven expiry.
//!
//! Every notification gets its own expiry timer when it is added. Timers run
//! as spawned tasks that only sleep and report the id back over a channel;
//! the active set itself is touched exclusively through `&mut self`, so the
//! owner decides when an expiry is applied (see
//! [`NotificationCenter::expire_next`]).
//!
//! Removal is idempotent. A timer that fires for a notification that was
//! dismissed in the meantime is simply a no-op, so aborting timers on
//! dismissal is only an optimization.

use std::{collections::HashMap, time::Duration};

use moodtrack_bridge::{
    config::{DEFAULT_EXPIRY_MS, NotificationsConfig},
    notification::{Notification, NotificationId, NotificationKind, NotificationRequest},
};
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    task::JoinHandle,
    time::Instant,
};

pub struct NotificationCenter {
    /// Active notifications, oldest first.
    active: Vec<Notification>,
    /// Lifetime of each notification from the moment it is added.
    expiry: Duration,
    /// Pending expiry timers, keyed by the notification they will remove.
    timers: HashMap<NotificationId, JoinHandle<()>>,
    expired_tx: UnboundedSender<NotificationId>,
    expired_rx: UnboundedReceiver<NotificationId>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_expiry(Duration::from_millis(DEFAULT_EXPIRY_MS))
    }
}

impl NotificationCenter {
    /// Creates an empty center using the configured expiry delay.
    pub fn new(config: &NotificationsConfig) -> Self {
        Self::with_expiry(config.expiry())
    }

    /// Creates an empty center whose notifications expire after `expiry`.
    pub fn with_expiry(expiry: Duration) -> Self {
        let (expired_tx, expired_rx) = unbounded_channel();
        Self {
            active: Vec::new(),
            expiry,
            timers: HashMap::new(),
            expired_tx,
            expired_rx,
        }
    }

    /// Appends a new notification and schedules its expiry. Returns the id
    /// to dismiss it early.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime, since the expiry timer is
    /// a spawned task.
    pub fn add(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.submit(NotificationRequest::new(kind, title, message)).id
    }

    /// Same as [`Self::add`], for requests that carry details. Returns the
    /// newly added notification.
    pub fn submit(&mut self, request: NotificationRequest) -> &Notification {
        let notification = Notification::new(request);
        let id = notification.id;

        let deadline = Instant::now() + self.expiry;
        let expired_tx = self.expired_tx.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // the center may already be gone
            let _ = expired_tx.send(id);
        });
        self.timers.insert(id, timer);

        log::debug!(
            "Added {} notification {id}: {:?}",
            notification.kind,
            notification.title
        );
        self.active.push(notification);
        &self.active[self.active.len() - 1]
    }

    pub fn show_success(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.add(NotificationKind::Success, title, message)
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.add(NotificationKind::Error, title, message)
    }

    pub fn show_info(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.add(NotificationKind::Info, title, message)
    }

    pub fn show_warning(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.add(NotificationKind::Warning, title, message)
    }

    /// Removes the notification with the given id, if it is still active.
    ///
    /// Unknown ids are ignored, which makes removal idempotent. The remaining
    /// notifications keep their relative order.
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        if let Some(timer) = self.timers.remove(&id) {
            timer.abort();
        }

        let index = self.active.iter().position(|notification| notification.id == id)?;
        Some(self.active.remove(index))
    }

    /// Removes every active notification and cancels their timers. Returns
    /// the removed notifications, oldest first.
    pub fn clear(&mut self) -> Vec<Notification> {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
        std::mem::take(&mut self.active)
    }

    /// Waits for the next expiry timer to fire and removes its notification.
    ///
    /// Returns `None` when the notification was already removed. Waits
    /// forever while nothing is scheduled. Cancel-safe, so it can be used as
    /// a `tokio::select!` branch.
    pub async fn expire_next(&mut self) -> Option<Notification> {
        // never closed: `self` owns a sender
        let id = self.expired_rx.recv().await?;
        let expired = self.remove(id);
        match &expired {
            Some(notification) => {
                log::debug!("Notification {id} expired: {:?}", notification.title)
            }
            None => log::trace!("Expiry of notification {id} is moot, already removed"),
        }
        expired
    }

    /// Active notifications, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|notification| notification.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        for timer in self.timers.values() {
            timer.abort();
        }
    }
}

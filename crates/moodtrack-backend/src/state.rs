use moodtrack_bridge::config::Config;

use crate::notification_center::NotificationCenter;

/// The core application state that holds configuration and the notification
/// center.
///
/// It is owned by the backend loop alone and mutated only from there, so no
/// locking is involved: every handler runs to completion before the next
/// message or expiry is looked at.
pub struct State {
    /// The loaded application configuration.
    pub config: Config,
    /// Notifications currently shown to the user.
    pub notifications: NotificationCenter,
}

impl State {
    pub fn new(config: Config) -> Self {
        let notifications = NotificationCenter::new(&config.notifications);
        Self {
            config,
            notifications,
        }
    }
}

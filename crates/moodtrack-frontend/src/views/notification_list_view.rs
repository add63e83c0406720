use std::fmt;

use crate::entities::NotificationsEntity;
use crate::formatting::{format_details, format_kind, format_time};

/// Numbered listing of the active notifications, oldest first. The numbers
/// are what `dismiss` takes.
pub struct NotificationListView<'a> {
    entity: &'a NotificationsEntity,
}

impl<'a> NotificationListView<'a> {
    pub fn new(entity: &'a NotificationsEntity) -> Self {
        Self { entity }
    }
}

impl fmt::Display for NotificationListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entity.notifications.is_empty() {
            return f.write_str("No notifications.");
        }

        for (index, notification) in self.entity.notifications.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:>2}. {} {}",
                index + 1,
                format_kind(notification.kind),
                notification.title
            )?;
            if !notification.message.is_empty() {
                write!(f, ": {}", notification.message)?;
            }
            write!(f, "  ({})", format_time(notification.created_at))?;
            if !notification.details.is_empty() {
                write!(f, "  {}", format_details(&notification.details))?;
            }
        }
        Ok(())
    }
}

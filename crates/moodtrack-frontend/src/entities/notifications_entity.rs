use moodtrack_bridge::{
    MessageFromBackend,
    notification::{Notification, NotificationId},
};

/// Local mirror of the backend's active notifications, in display order.
#[derive(Debug, Clone, Default)]
pub struct NotificationsEntity {
    pub notifications: Vec<Notification>,
}

impl NotificationsEntity {
    /// Applies a backend event to the mirror. Returns whether the list should
    /// be rendered again.
    pub fn apply(&mut self, message: &MessageFromBackend) -> bool {
        match message {
            MessageFromBackend::NotificationAdded(notification) => {
                if self.position_of(notification.id).is_some() {
                    return false;
                }
                self.notifications.push(notification.clone());
                true
            }
            MessageFromBackend::NotificationRemoved { id, .. } => {
                match self.position_of(*id) {
                    Some(index) => {
                        self.notifications.remove(index);
                        true
                    }
                    None => false,
                }
            }
            MessageFromBackend::ActiveNotificationsResponse(active) => {
                self.notifications = active.clone();
                true
            }
            MessageFromBackend::ConfigurationResponse(_) => false,
        }
    }

    /// Id of the notification shown at the 1-based `position`.
    pub fn id_at(&self, position: usize) -> Option<NotificationId> {
        let index = position.checked_sub(1)?;
        self.notifications.get(index).map(|notification| notification.id)
    }

    fn position_of(&self, id: NotificationId) -> Option<usize> {
        self.notifications
            .iter()
            .position(|notification| notification.id == id)
    }
}

#[cfg(test)]
mod tests {
    use moodtrack_bridge::notification::{NotificationKind, NotificationRequest, RemovalReason};

    use super::*;

    fn notification(title: &str) -> Notification {
        Notification::new(NotificationRequest::new(NotificationKind::Info, title, ""))
    }

    fn titles(entity: &NotificationsEntity) -> Vec<&str> {
        entity
            .notifications
            .iter()
            .map(|notification| notification.title.as_str())
            .collect()
    }

    #[test]
    fn mirrors_additions_and_removals() {
        let mut entity = NotificationsEntity::default();
        let first = notification("first");
        let second = notification("second");
        let third = notification("third");
        for added in [&first, &second, &third] {
            assert!(entity.apply(&MessageFromBackend::NotificationAdded(added.clone())));
        }

        assert!(entity.apply(&MessageFromBackend::NotificationRemoved {
            id: second.id,
            reason: RemovalReason::Dismissed,
        }));
        assert_eq!(titles(&entity), vec!["first", "third"]);
        assert_eq!(entity.id_at(2), Some(third.id));
    }

    #[test]
    fn ignores_unknown_and_duplicate_events() {
        let mut entity = NotificationsEntity::default();
        let shown = notification("shown");
        entity.apply(&MessageFromBackend::NotificationAdded(shown.clone()));

        assert!(!entity.apply(&MessageFromBackend::NotificationAdded(shown.clone())));
        assert!(!entity.apply(&MessageFromBackend::NotificationRemoved {
            id: notification("never shown").id,
            reason: RemovalReason::Expired,
        }));
        assert_eq!(titles(&entity), vec!["shown"]);
    }

    #[test]
    fn snapshot_replaces_the_mirror() {
        let mut entity = NotificationsEntity::default();
        entity.apply(&MessageFromBackend::NotificationAdded(notification("stale")));

        let fresh = vec![notification("a"), notification("b")];
        assert!(entity.apply(&MessageFromBackend::ActiveNotificationsResponse(fresh)));
        assert_eq!(titles(&entity), vec!["a", "b"]);
    }

    #[test]
    fn positions_are_one_based() {
        let mut entity = NotificationsEntity::default();
        let only = notification("only");
        entity.apply(&MessageFromBackend::NotificationAdded(only.clone()));

        assert_eq!(entity.id_at(0), None);
        assert_eq!(entity.id_at(1), Some(only.id));
        assert_eq!(entity.id_at(2), None);
    }
}

use moodtrack_bridge::{
    MessageFromBackend,
    notification::{Notification, NotificationId, NotificationRequest, RemovalReason},
};

use crate::AppContext;

fn send_removed(context: &AppContext, id: NotificationId, reason: RemovalReason) {
    context.send(MessageFromBackend::NotificationRemoved { id, reason });
}

/// Handles an incoming request to show a notification (see
/// [`moodtrack_bridge::MessageToBackend::ShowNotification`]).
pub(crate) fn handle_show_notification(context: &mut AppContext, request: NotificationRequest) {
    let id = context.send_notification(request);
    log::info!(
        "Showing notification {id}, {} active",
        context.state.notifications.len()
    );
}

/// Handles an explicit dismissal (see
/// [`moodtrack_bridge::MessageToBackend::DismissNotification`]). Unknown ids
/// are ignored.
pub(crate) fn handle_dismiss_notification(context: &mut AppContext, id: NotificationId) {
    match context.state.notifications.remove(id) {
        Some(_) => send_removed(context, id, RemovalReason::Dismissed),
        None => log::debug!("Ignoring dismissal of inactive notification {id}"),
    }
}

/// Handles a request to dismiss every active notification (see
/// [`moodtrack_bridge::MessageToBackend::ClearNotifications`]).
pub(crate) fn handle_clear_notifications(context: &mut AppContext) {
    let cleared = context.state.notifications.clear();
    log::info!("Cleared {} notifications", cleared.len());
    for notification in cleared {
        send_removed(context, notification.id, RemovalReason::Cleared);
    }
}

/// Handles a request for the current active set (see
/// [`moodtrack_bridge::MessageToBackend::ActiveNotificationsRequest`]).
pub(crate) fn handle_active_notifications_request(context: &mut AppContext) {
    let active = context.state.notifications.active().to_vec();
    context.send(MessageFromBackend::ActiveNotificationsResponse(active));
}

/// Reports a notification whose expiry timer removed it from the active set.
pub(crate) fn handle_expired_notification(context: &mut AppContext, notification: Notification) {
    send_removed(context, notification.id, RemovalReason::Expired);
}

#[cfg(test)]
mod tests {
    use moodtrack_bridge::{config::Config, notification::NotificationKind};
    use tokio::sync::mpsc::{self, UnboundedReceiver, error::TryRecvError};

    use super::*;
    use crate::state::State;

    fn context() -> (AppContext, UnboundedReceiver<MessageFromBackend>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppContext::new(State::new(Config::default()), tx), rx)
    }

    fn show(context: &mut AppContext, title: &str) -> NotificationId {
        handle_show_notification(
            context,
            NotificationRequest::new(NotificationKind::Info, title, ""),
        );
        context
            .state
            .notifications
            .active()
            .last()
            .map(|notification| notification.id)
            .unwrap()
    }

    fn removed(message: MessageFromBackend) -> (NotificationId, RemovalReason) {
        match message {
            MessageFromBackend::NotificationRemoved { id, reason } => (id, reason),
            other => panic!("expected a removal, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn show_announces_the_new_notification() {
        let (mut context, mut rx) = context();
        let request =
            NotificationRequest::new(NotificationKind::Error, "Save failed", "Network error")
                .with_detail("status", 503i64);
        handle_show_notification(&mut context, request);

        match rx.try_recv().unwrap() {
            MessageFromBackend::NotificationAdded(notification) => {
                assert_eq!(notification.kind, NotificationKind::Error);
                assert_eq!(notification.title, "Save failed");
                assert_eq!(notification.message, "Network error");
                assert_eq!(notification.details.len(), 1);
                assert_eq!(
                    context.state.notifications.active(),
                    std::slice::from_ref(&notification)
                );
            }
            other => panic!("expected an added notification, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn dismiss_reports_only_actual_removals() {
        let (mut context, mut rx) = context();
        let id = show(&mut context, "Saved");
        rx.try_recv().unwrap();

        handle_dismiss_notification(&mut context, id);
        assert_eq!(removed(rx.try_recv().unwrap()), (id, RemovalReason::Dismissed));

        handle_dismiss_notification(&mut context, id);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(context.state.notifications.is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn clear_reports_each_removal_in_order() {
        let (mut context, mut rx) = context();
        let first = show(&mut context, "first");
        let second = show(&mut context, "second");
        rx.try_recv().unwrap();
        rx.try_recv().unwrap();

        handle_clear_notifications(&mut context);
        assert_eq!(removed(rx.try_recv().unwrap()), (first, RemovalReason::Cleared));
        assert_eq!(removed(rx.try_recv().unwrap()), (second, RemovalReason::Cleared));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn snapshot_lists_active_notifications_in_order() {
        let (mut context, mut rx) = context();
        let first = show(&mut context, "first");
        let second = show(&mut context, "second");
        let third = show(&mut context, "third");
        handle_dismiss_notification(&mut context, second);
        while rx.try_recv().is_ok() {}

        handle_active_notifications_request(&mut context);
        match rx.try_recv().unwrap() {
            MessageFromBackend::ActiveNotificationsResponse(active) => {
                let ids: Vec<_> = active.iter().map(|notification| notification.id).collect();
                assert_eq!(ids, vec![first, third]);
            }
            other => panic!("expected a snapshot, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn expiry_is_reported_as_expired() {
        let (mut context, mut rx) = context();
        let id = show(&mut context, "Synced");
        rx.try_recv().unwrap();

        let expired = context.state.notifications.expire_next().await.unwrap();
        handle_expired_notification(&mut context, expired);
        assert_eq!(removed(rx.try_recv().unwrap()), (id, RemovalReason::Expired));
    }

    #[tokio::test]
    async fn config_request_returns_loaded_config() {
        let (mut context, mut rx) = context();
        context.state.config.notifications.expiry_ms = 1200;

        crate::services::config_service::handle_config_request(&mut context);
        match rx.try_recv().unwrap() {
            MessageFromBackend::ConfigurationResponse(config) => {
                assert_eq!(config.notifications.expiry_ms, 1200);
            }
            other => panic!("expected the configuration, got {other:?}"),
        }
    }
}
